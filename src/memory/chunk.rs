//! A contiguous memory region carved into equal-size blocks.
//!
//! The chunk header stores the intrusive links used by the owning
//! allocator (free list + address tree) and a one-byte-per-block free
//! list: each free block's first byte holds the index of the next free
//! block. Indices rather than pointers keep the scheme valid for block
//! sizes down to a single byte.
//!
//! Chunk size and block size are deliberately not stored in the chunk;
//! every operation receives them from the owning allocator. The caller is
//! the trust boundary here, which is why the whole surface is `unsafe`.

use std::alloc::{alloc, dealloc, Layout};

use crate::error::{Error, Result};

const CHUNK_ALIGNMENT: usize = 8;

#[repr(C)]
pub struct MemoryChunk {
    /// Free-list links, maintained by the owning allocator.
    pub prev: *mut MemoryChunk,
    pub next: *mut MemoryChunk,
    /// Address-tree links, maintained by the owning allocator.
    pub left: *mut MemoryChunk,
    pub right: *mut MemoryChunk,

    available_blocks: u16,
    first_available_block: u8,
}

impl MemoryChunk {
    /// Offset of the block array behind the aligned header.
    pub const fn payload_offset() -> usize {
        (std::mem::size_of::<MemoryChunk>() + CHUNK_ALIGNMENT - 1) & !(CHUNK_ALIGNMENT - 1)
    }

    /// Number of blocks a chunk of the given geometry holds. Bounded by
    /// 256 because the free list stores one-byte indices.
    pub fn capacity(chunk_size: usize, block_size: usize) -> u16 {
        debug_assert!(chunk_size > MemoryChunk::payload_offset());
        debug_assert!(block_size > 0);

        let blocks = (chunk_size - MemoryChunk::payload_offset()) / block_size;
        blocks.min(256) as u16
    }

    pub unsafe fn create(chunk_size: usize, block_size: usize) -> Result<*mut MemoryChunk> {
        let layout = Layout::from_size_align(chunk_size, CHUNK_ALIGNMENT)
            .map_err(|_| Error::InvalidArgument)?;
        let raw = alloc(layout);
        if raw.is_null() {
            return Err(Error::MemoryExhausted);
        }

        let chunk = raw as *mut MemoryChunk;
        let capacity = MemoryChunk::capacity(chunk_size, block_size);
        (*chunk).prev = std::ptr::null_mut();
        (*chunk).next = std::ptr::null_mut();
        (*chunk).left = std::ptr::null_mut();
        (*chunk).right = std::ptr::null_mut();
        (*chunk).available_blocks = capacity;
        (*chunk).first_available_block = 0;

        // Chain the blocks: block i links to block i + 1. The final
        // link value is never used as an index.
        let payload = raw.add(MemoryChunk::payload_offset());
        for index in 0..capacity as usize {
            *payload.add(index * block_size) = (index + 1) as u8;
        }

        Ok(chunk)
    }

    /// Safe only when all blocks have been returned (or their contents
    /// are dead).
    pub unsafe fn destroy(chunk: *mut MemoryChunk, chunk_size: usize) {
        let layout = Layout::from_size_align_unchecked(chunk_size, CHUNK_ALIGNMENT);
        dealloc(chunk as *mut u8, layout);
    }

    /// Precondition: `available_blocks(chunk) > 0`.
    pub unsafe fn allocate(chunk: *mut MemoryChunk, block_size: usize) -> *mut u8 {
        debug_assert!(block_size > 0);
        debug_assert!((*chunk).available_blocks > 0);

        let payload = (chunk as *mut u8).add(MemoryChunk::payload_offset());
        let block = payload.add((*chunk).first_available_block as usize * block_size);

        (*chunk).first_available_block = *block;
        (*chunk).available_blocks -= 1;

        block
    }

    /// Precondition: `ptr` was returned by `allocate` on this chunk with
    /// the same block size.
    pub unsafe fn deallocate(chunk: *mut MemoryChunk, ptr: *mut u8, block_size: usize) {
        debug_assert!(block_size > 0);

        let payload = (chunk as *mut u8).add(MemoryChunk::payload_offset());
        let offset = ptr.offset_from(payload);
        debug_assert!(offset >= 0);
        let offset = offset as usize;
        debug_assert!(offset % block_size == 0);
        let index = offset / block_size;
        debug_assert!(index < 256);

        *ptr = (*chunk).first_available_block;
        (*chunk).first_available_block = index as u8;
        (*chunk).available_blocks += 1;
    }

    pub unsafe fn available_blocks(chunk: *const MemoryChunk) -> u16 {
        (*chunk).available_blocks
    }

    /// Whether the whole chunk lies below `ptr` in the address space.
    /// Pointers inside the chunk are neither less nor greater.
    pub unsafe fn is_less_than(
        chunk: *const MemoryChunk,
        ptr: *const u8,
        chunk_size: usize,
    ) -> bool {
        let chunk_end = (chunk as *const u8).add(chunk_size);
        chunk_end <= ptr
    }

    /// Whether the whole chunk lies above `ptr` in the address space.
    pub unsafe fn is_greater_than(
        chunk: *const MemoryChunk,
        ptr: *const u8,
        _chunk_size: usize,
    ) -> bool {
        ptr < chunk as *const u8
    }
}
