//! Small-object memory layer.
//!
//! Attribute-list nodes and other short-lived decoder objects are far
//! smaller than a heap allocation is worth, so they come from a
//! fixed-block allocator stack instead: per-thread
//! [`SmallBlockAllocator`]s route each request to a size-class
//! [`ChunkAllocator`](chunk_allocator::ChunkAllocator), which manages
//! 256-byte to 4-KiB chunks with intra-chunk free lists and finds chunks
//! by address through a splay tree on deallocation.
//!
//! The thread-local allocator is created on a thread's first allocation
//! and registered process-wide; the fast path takes no lock.
//! [`memory_finalize`] tears all of them down and must only run when no
//! thread is using the layer anymore (same contract for cross-thread
//! frees: there are none, a block is returned on the thread that
//! allocated it).

pub mod chunk;
pub mod chunk_allocator;
pub mod small_block;
pub mod tree;

use std::cell::Cell;
use std::ptr::NonNull;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::error::Result;
use self::small_block::SmallBlockAllocator;

struct RegisteredAllocator(*mut SmallBlockAllocator);

// Registered pointers are only dereferenced by their owning thread (or by
// `memory_finalize` when all threads are done).
unsafe impl Send for RegisteredAllocator {}

static REGISTRY: Lazy<Mutex<Vec<RegisteredAllocator>>> = Lazy::new(|| Mutex::new(Vec::new()));

thread_local! {
    static THREAD_ALLOCATOR: Cell<*mut SmallBlockAllocator> =
        const { Cell::new(std::ptr::null_mut()) };
}

/// Sets up the process-wide registry. Optional; the layer also
/// initializes lazily on first use. Single-threaded call.
pub fn memory_initialize() {
    Lazy::force(&REGISTRY);
}

/// Allocates `block_size` bytes from the calling thread's allocator,
/// creating and registering it on first use.
pub fn memory_allocate(block_size: usize) -> Result<NonNull<u8>> {
    let allocator = THREAD_ALLOCATOR.with(|slot| {
        let mut allocator = slot.get();
        if allocator.is_null() {
            allocator = Box::into_raw(Box::new(SmallBlockAllocator::new()));
            REGISTRY
                .lock()
                .unwrap()
                .push(RegisteredAllocator(allocator));
            slot.set(allocator);
        }
        allocator
    });
    unsafe { (*allocator).allocate(block_size) }
}

/// Returns a block to the calling thread's allocator. Must run on the
/// thread that allocated `ptr`, with the same `block_size`.
pub unsafe fn memory_deallocate(ptr: NonNull<u8>, block_size: usize) {
    let allocator = THREAD_ALLOCATOR.with(|slot| slot.get());
    debug_assert!(!allocator.is_null());
    (*allocator).deallocate(ptr, block_size);
}

/// Destroys every registered per-thread allocator. Single-threaded call;
/// no other thread may touch this layer afterwards (its thread-local slot
/// would be stale).
pub fn memory_finalize() {
    let mut registry = REGISTRY.lock().unwrap();
    for RegisteredAllocator(allocator) in registry.drain(..) {
        unsafe { drop(Box::from_raw(allocator)) };
    }
    THREAD_ALLOCATOR.with(|slot| slot.set(std::ptr::null_mut()));
}
