//! Splay tree over memory chunks, ordered by address range.
//!
//! The tree exists for one purpose: given a block pointer on
//! deallocation, find the chunk that owns it. Splaying the queried
//! address to the root keeps repeated frees into the same chunk cheap.
//! Nodes carry their links inline (`left`/`right` in the chunk header);
//! all functions return the new root.

use super::chunk::MemoryChunk;

/// Inserts `chunk` into the tree rooted at `root`. `chunk` must not be in
/// the tree yet.
pub unsafe fn insert(
    root: *mut MemoryChunk,
    chunk: *mut MemoryChunk,
    chunk_size: usize,
) -> *mut MemoryChunk {
    debug_assert!(!chunk.is_null());

    if root.is_null() {
        (*chunk).left = std::ptr::null_mut();
        (*chunk).right = std::ptr::null_mut();
        return chunk;
    }

    let root = splay(root, chunk as *const u8, chunk_size);

    if MemoryChunk::is_less_than(chunk, root as *const u8, chunk_size) {
        (*chunk).left = (*root).left;
        (*chunk).right = root;
        (*root).left = std::ptr::null_mut();
    } else {
        (*chunk).left = root;
        (*chunk).right = (*root).right;
        (*root).right = std::ptr::null_mut();
    }

    chunk
}

/// Removes the current root from the tree.
pub unsafe fn remove(root: *mut MemoryChunk, chunk_size: usize) -> *mut MemoryChunk {
    debug_assert!(!root.is_null());

    if (*root).left.is_null() {
        return (*root).right;
    }

    let left = (*root).left;
    let right = (*root).right;

    // Splaying the old root's address in the left subtree brings its
    // largest node (which has no right child) to the top.
    let new_root = splay(left, root as *const u8, chunk_size);
    (*new_root).right = right;
    new_root
}

/// Brings the chunk containing `ptr` (or a nearest leaf if no chunk
/// contains it) to the root.
pub unsafe fn splay(
    root: *mut MemoryChunk,
    ptr: *const u8,
    chunk_size: usize,
) -> *mut MemoryChunk {
    debug_assert!(!root.is_null());
    let mut root = root;

    if MemoryChunk::is_greater_than(root, ptr, chunk_size) && !(*root).left.is_null() {
        let left = (*root).left;
        if MemoryChunk::is_greater_than(left, ptr, chunk_size) && !(*left).left.is_null() {
            // zig-zig
            (*left).left = splay((*left).left, ptr, chunk_size);
            root = rotate_right(root);
        } else if MemoryChunk::is_less_than(left, ptr, chunk_size) && !(*left).right.is_null() {
            // zig-zag
            (*left).right = splay((*left).right, ptr, chunk_size);
            (*root).left = rotate_left((*root).left);
        }
        root = rotate_right(root);
    } else if MemoryChunk::is_less_than(root, ptr, chunk_size) && !(*root).right.is_null() {
        let right = (*root).right;
        if MemoryChunk::is_less_than(right, ptr, chunk_size) && !(*right).right.is_null() {
            // zig-zig
            (*right).right = splay((*right).right, ptr, chunk_size);
            root = rotate_left(root);
        } else if MemoryChunk::is_greater_than(right, ptr, chunk_size) && !(*right).left.is_null() {
            // zig-zag
            (*right).left = splay((*right).left, ptr, chunk_size);
            (*root).right = rotate_right((*root).right);
        }
        root = rotate_left(root);
    }

    root
}

unsafe fn rotate_left(root: *mut MemoryChunk) -> *mut MemoryChunk {
    debug_assert!(!root.is_null());
    debug_assert!(!(*root).right.is_null());

    let pivot = (*root).right;
    (*root).right = (*pivot).left;
    (*pivot).left = root;
    pivot
}

unsafe fn rotate_right(root: *mut MemoryChunk) -> *mut MemoryChunk {
    debug_assert!(!root.is_null());
    debug_assert!(!(*root).left.is_null());

    let pivot = (*root).left;
    (*root).left = (*pivot).right;
    (*pivot).right = root;
    pivot
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHUNK_SIZE: usize = 256;
    const BLOCK_SIZE: usize = 16;

    /// Creates `n` chunks and returns them sorted by ascending address,
    /// so tests can assign tree roles by address rank.
    fn chunks_by_address(n: usize) -> Vec<*mut MemoryChunk> {
        let mut chunks: Vec<*mut MemoryChunk> = (0..n)
            .map(|_| unsafe { MemoryChunk::create(CHUNK_SIZE, BLOCK_SIZE).unwrap() })
            .collect();
        chunks.sort_by_key(|&chunk| chunk as usize);
        chunks
    }

    fn destroy_all(chunks: &[*mut MemoryChunk]) {
        for &chunk in chunks {
            unsafe { MemoryChunk::destroy(chunk, CHUNK_SIZE) };
        }
    }

    unsafe fn link(parent: *mut MemoryChunk, left: *mut MemoryChunk, right: *mut MemoryChunk) {
        (*parent).left = left;
        (*parent).right = right;
    }

    unsafe fn leaf(chunk: *mut MemoryChunk) {
        link(chunk, std::ptr::null_mut(), std::ptr::null_mut());
    }

    unsafe fn collect_in_order(root: *mut MemoryChunk, out: &mut Vec<*mut MemoryChunk>) {
        if root.is_null() {
            return;
        }
        collect_in_order((*root).left, out);
        out.push(root);
        collect_in_order((*root).right, out);
    }

    #[test]
    fn zig_right() {
        // y(left=C, right=x(left=B, right=A)), addresses C < y < B < x < A;
        // splaying x must produce x(left=y(left=C, right=B), right=A).
        let chunks = chunks_by_address(5);
        let (c, y, b, x, a) = (chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]);
        unsafe {
            leaf(c);
            leaf(b);
            leaf(a);
            link(x, b, a);
            link(y, c, x);

            let root = splay(y, x as *const u8, CHUNK_SIZE);

            assert_eq!(root, x);
            assert_eq!((*x).left, y);
            assert_eq!((*x).right, a);
            assert_eq!((*y).left, c);
            assert_eq!((*y).right, b);
        }
        destroy_all(&chunks);
    }

    #[test]
    fn zig_zig_left() {
        // z(left=y(left=x(left=A, right=B), right=C), right=D),
        // addresses A < x < B < y < C < z < D;
        // splaying x must produce x(left=A, right=y(left=B, right=z(left=C, right=D))).
        let chunks = chunks_by_address(7);
        let (a, x, b, y, c, z, d) = (
            chunks[0], chunks[1], chunks[2], chunks[3], chunks[4], chunks[5], chunks[6],
        );
        unsafe {
            leaf(a);
            leaf(b);
            leaf(c);
            leaf(d);
            link(x, a, b);
            link(y, x, c);
            link(z, y, d);

            let root = splay(z, x as *const u8, CHUNK_SIZE);

            assert_eq!(root, x);
            assert_eq!((*x).left, a);
            assert_eq!((*x).right, y);
            assert_eq!((*y).left, b);
            assert_eq!((*y).right, z);
            assert_eq!((*z).left, c);
            assert_eq!((*z).right, d);
        }
        destroy_all(&chunks);
    }

    #[test]
    fn splay_preserves_node_set_and_order() {
        let chunks = chunks_by_address(9);
        unsafe {
            let mut root = std::ptr::null_mut();
            for &chunk in &chunks {
                root = insert(root, chunk, CHUNK_SIZE);
            }

            for &probe in &chunks {
                root = splay(root, probe as *const u8, CHUNK_SIZE);
                assert_eq!(root, probe);

                let mut in_order = Vec::new();
                collect_in_order(root, &mut in_order);
                assert_eq!(in_order, chunks);
            }
        }
        destroy_all(&chunks);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let chunks = chunks_by_address(6);
        unsafe {
            let mut root = std::ptr::null_mut();
            for &chunk in &chunks {
                root = insert(root, chunk, CHUNK_SIZE);
            }

            let mut remaining: Vec<*mut MemoryChunk> = chunks.clone();
            while !remaining.is_empty() {
                let victim = remaining[remaining.len() / 2];
                root = splay(root, victim as *const u8, CHUNK_SIZE);
                assert_eq!(root, victim);
                root = remove(root, CHUNK_SIZE);
                remaining.retain(|&chunk| chunk != victim);

                let mut in_order = Vec::new();
                collect_in_order(root, &mut in_order);
                assert_eq!(in_order, remaining);
            }
            assert!(root.is_null());
        }
        destroy_all(&chunks);
    }
}
