//! Fixed-block-size allocator over a growing set of memory chunks.
//!
//! Chunks with at least one free block sit in a doubly-linked free list;
//! every live chunk sits in the address-ordered splay tree so that
//! `deallocate` can find the owning chunk from a bare pointer. A chunk
//! whose last block is returned is destroyed immediately, which bounds
//! the allocator's footprint to what is actually live.

use std::ptr::NonNull;

use super::chunk::MemoryChunk;
use super::tree;
use crate::error::Result;

const MAX_SUPPORTED_BLOCK_SIZE: usize = 1024;

pub struct ChunkAllocator {
    free_list: *mut MemoryChunk,
    chunk_tree: *mut MemoryChunk,
    block_size: usize,
    chunk_size: usize,
}

impl ChunkAllocator {
    pub fn new(block_size: usize) -> ChunkAllocator {
        assert!(block_size > 0);
        assert!(block_size <= MAX_SUPPORTED_BLOCK_SIZE);

        let chunk_size = if block_size < 4 {
            256
        } else if block_size < 16 {
            1024
        } else {
            4096
        };

        ChunkAllocator {
            free_list: std::ptr::null_mut(),
            chunk_tree: std::ptr::null_mut(),
            block_size,
            chunk_size,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn allocate(&mut self) -> Result<NonNull<u8>> {
        unsafe {
            if self.free_list.is_null() {
                let chunk = MemoryChunk::create(self.chunk_size, self.block_size)?;
                (*chunk).prev = std::ptr::null_mut();
                (*chunk).next = std::ptr::null_mut();
                self.free_list = chunk;

                self.chunk_tree = tree::insert(self.chunk_tree, chunk, self.chunk_size);
            }

            debug_assert!(MemoryChunk::available_blocks(self.free_list) > 0);
            let block = MemoryChunk::allocate(self.free_list, self.block_size);

            if MemoryChunk::available_blocks(self.free_list) == 0 {
                self.free_list = (*self.free_list).next;
                if !self.free_list.is_null() {
                    (*self.free_list).prev = std::ptr::null_mut();
                }
            }

            Ok(NonNull::new_unchecked(block))
        }
    }

    /// `ptr` must have been returned by `allocate` on this allocator and
    /// not freed since.
    pub unsafe fn deallocate(&mut self, ptr: NonNull<u8>) {
        debug_assert!(!self.chunk_tree.is_null());

        self.chunk_tree = tree::splay(self.chunk_tree, ptr.as_ptr(), self.chunk_size);
        let chunk = self.chunk_tree;
        debug_assert!(
            !MemoryChunk::is_less_than(chunk, ptr.as_ptr(), self.chunk_size)
                && !MemoryChunk::is_greater_than(chunk, ptr.as_ptr(), self.chunk_size)
        );

        MemoryChunk::deallocate(chunk, ptr.as_ptr(), self.block_size);

        let available = MemoryChunk::available_blocks(chunk);
        if available == 1 {
            // was full, becomes the free-list head again
            if !self.free_list.is_null() {
                (*self.free_list).prev = chunk;
            }
            (*chunk).prev = std::ptr::null_mut();
            (*chunk).next = self.free_list;
            self.free_list = chunk;
        }

        if available == MemoryChunk::capacity(self.chunk_size, self.block_size) {
            if !(*chunk).prev.is_null() {
                (*(*chunk).prev).next = (*chunk).next;
            }
            if !(*chunk).next.is_null() {
                (*(*chunk).next).prev = (*chunk).prev;
            }
            if self.free_list == chunk {
                self.free_list = (*self.free_list).next;
            }

            self.chunk_tree = tree::remove(self.chunk_tree, self.chunk_size);
            MemoryChunk::destroy(chunk, self.chunk_size);
        }
    }
}

impl Drop for ChunkAllocator {
    fn drop(&mut self) {
        unsafe fn destroy_subtree(root: *mut MemoryChunk, chunk_size: usize) {
            if root.is_null() {
                return;
            }
            let left = (*root).left;
            let right = (*root).right;
            MemoryChunk::destroy(root, chunk_size);
            destroy_subtree(left, chunk_size);
            destroy_subtree(right, chunk_size);
        }

        unsafe { destroy_subtree(self.chunk_tree, self.chunk_size) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chunk_size_bands() {
        assert_eq!(ChunkAllocator::new(1).chunk_size, 256);
        assert_eq!(ChunkAllocator::new(4).chunk_size, 1024);
        assert_eq!(ChunkAllocator::new(15).chunk_size, 1024);
        assert_eq!(ChunkAllocator::new(16).chunk_size, 4096);
        assert_eq!(ChunkAllocator::new(1024).chunk_size, 4096);
    }

    #[test]
    fn mass_allocation_in_allocation_order() {
        const COUNT: usize = 2048;
        let mut allocator = ChunkAllocator::new(16);

        let blocks: Vec<NonNull<u8>> = (0..COUNT).map(|_| allocator.allocate().unwrap()).collect();
        let distinct: HashSet<usize> = blocks.iter().map(|b| b.as_ptr() as usize).collect();
        assert_eq!(distinct.len(), COUNT);

        // FIFO teardown exercises the splay lookups across many chunks
        for block in blocks {
            unsafe { allocator.deallocate(block) };
        }

        let again: Vec<NonNull<u8>> = (0..COUNT).map(|_| allocator.allocate().unwrap()).collect();
        let distinct: HashSet<usize> = again.iter().map(|b| b.as_ptr() as usize).collect();
        assert_eq!(distinct.len(), COUNT);

        for block in again {
            unsafe { allocator.deallocate(block) };
        }
    }

    #[test]
    fn live_count_tracks_operations() {
        let mut allocator = ChunkAllocator::new(8);
        let mut live = Vec::new();

        // interleaved allocate/free pattern
        for round in 0..512usize {
            live.push(allocator.allocate().unwrap());
            if round % 3 == 0 {
                let block = live.swap_remove(round % live.len());
                unsafe { allocator.deallocate(block) };
            }
        }

        let distinct: HashSet<usize> = live.iter().map(|b| b.as_ptr() as usize).collect();
        assert_eq!(distinct.len(), live.len());

        for block in live {
            unsafe { allocator.deallocate(block) };
        }
    }

    #[test]
    fn immediate_reuse_returns_same_block() {
        let mut allocator = ChunkAllocator::new(32);
        let first = allocator.allocate().unwrap();
        let keeper = allocator.allocate().unwrap();
        unsafe { allocator.deallocate(first) };
        let second = allocator.allocate().unwrap();
        assert_eq!(first, second);
        unsafe {
            allocator.deallocate(second);
            allocator.deallocate(keeper);
        }
    }
}
