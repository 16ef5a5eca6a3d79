//! Router for variable small-size requests: sizes are rounded up to the
//! next multiple of the minimum alignment and served by one lazily
//! created [`ChunkAllocator`] per size class. Anything outside the small
//! range falls through to the system allocator.

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use super::chunk_allocator::ChunkAllocator;
use crate::error::{Error, Result};

const MAX_BLOCK_SIZE: usize = 64;
const MIN_ALIGNMENT: usize = 4;
const NUM_ALLOCATORS: usize = MAX_BLOCK_SIZE / MIN_ALIGNMENT;

fn system_layout(block_size: usize) -> Layout {
    Layout::from_size_align(block_size, MIN_ALIGNMENT).expect("unrepresentable block size")
}

pub struct SmallBlockAllocator {
    allocators: Vec<Option<Box<ChunkAllocator>>>,
}

impl SmallBlockAllocator {
    pub fn new() -> SmallBlockAllocator {
        SmallBlockAllocator {
            allocators: (0..=NUM_ALLOCATORS).map(|_| None).collect(),
        }
    }

    pub fn allocate(&mut self, block_size: usize) -> Result<NonNull<u8>> {
        if block_size == 0 {
            return Ok(NonNull::dangling());
        }
        if block_size > MAX_BLOCK_SIZE {
            let raw = unsafe { alloc(system_layout(block_size)) };
            return NonNull::new(raw).ok_or(Error::MemoryExhausted);
        }

        let index = (block_size + MIN_ALIGNMENT - 1) / MIN_ALIGNMENT;
        let allocator = self.allocators[index]
            .get_or_insert_with(|| Box::new(ChunkAllocator::new(index * MIN_ALIGNMENT)));
        allocator.allocate()
    }

    /// `ptr` and `block_size` must match a prior `allocate` call on this
    /// instance.
    pub unsafe fn deallocate(&mut self, ptr: NonNull<u8>, block_size: usize) {
        if block_size == 0 {
            return;
        }
        if block_size > MAX_BLOCK_SIZE {
            dealloc(ptr.as_ptr(), system_layout(block_size));
            return;
        }

        let index = (block_size + MIN_ALIGNMENT - 1) / MIN_ALIGNMENT;
        let allocator = self.allocators[index]
            .as_mut()
            .expect("deallocate without matching allocate");
        allocator.deallocate(ptr);
    }
}

impl Default for SmallBlockAllocator {
    fn default() -> Self {
        SmallBlockAllocator::new()
    }
}
