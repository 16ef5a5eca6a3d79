//! The byte-source contract the event reader decodes from.
//!
//! A trace location's event file is a sequence of fixed-size chunks, each
//! holding whole records. The reader never performs I/O itself; it pulls
//! bytes, checks availability, and navigates chunks through this trait.
//! [`MemoryChunkStream`](crate::MemoryChunkStream) is the in-memory
//! implementation shipped with this crate.

use crate::error::Result;

/// A cursor into a chunked stream. Record payloads never span chunks, so a
/// position is a chunk plus a byte offset within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamPosition {
    pub chunk_index: usize,
    pub offset: usize,
}

impl StreamPosition {
    /// The position `n` bytes further into the same chunk. Only valid when
    /// availability of those bytes has been guaranteed.
    pub fn advanced(self, n: u64) -> StreamPosition {
        StreamPosition {
            chunk_index: self.chunk_index,
            offset: self.offset + n as usize,
        }
    }
}

pub trait ChunkStream {
    /// One raw byte.
    fn read_u8(&mut self) -> Result<u8>;

    /// A compressed 32-bit value (length byte + big-endian bytes).
    fn read_u32(&mut self) -> Result<u32>;

    /// A compressed 64-bit value.
    fn read_u64(&mut self) -> Result<u64>;

    /// A compressed signed 64-bit value, sign-extended from its encoding.
    fn read_i64(&mut self) -> Result<i64>;

    /// A full-width (uncompressed) little-endian u64.
    fn read_u64_full(&mut self) -> Result<u64>;

    fn read_f32(&mut self) -> Result<f32>;

    fn read_f64(&mut self) -> Result<f64>;

    /// The 8-byte timestamp preceding a record. Remembers its position so
    /// that [`rewrite_timestamp`](ChunkStream::rewrite_timestamp) and the
    /// timestamp cursor can refer back to it.
    fn read_timestamp(&mut self) -> Result<u64>;

    /// Fails with `IndexOutOfBounds` unless `n` bytes are available in the
    /// current chunk.
    fn guarantee_read(&mut self, n: u64) -> Result<()>;

    /// Fails unless a complete compressed value is available.
    fn guarantee_compressed(&mut self) -> Result<()>;

    /// Reads a record's announced byte length and fails unless that many
    /// bytes are available. On success the cursor sits on the first
    /// payload byte.
    fn guarantee_record(&mut self) -> Result<u64>;

    fn position(&self) -> StreamPosition;

    fn set_position(&mut self, position: StreamPosition) -> Result<()>;

    /// Position of the most recently read timestamp.
    fn timestamp_position(&self) -> StreamPosition;

    /// Restores the timestamp state saved by
    /// [`timestamp_position`](ChunkStream::timestamp_position).
    fn set_timestamp_position(&mut self, position: StreamPosition) -> Result<()>;

    /// Steps over `n` bytes in the current chunk.
    fn skip(&mut self, n: u64) -> Result<()>;

    /// Steps over one compressed value without decoding it.
    fn skip_compressed(&mut self) -> Result<()>;

    /// Positions the cursor at the start of the chunk containing the event
    /// with the given global index.
    fn seek_chunk(&mut self, event_index: u64) -> Result<()>;

    /// Advances to the start of the next chunk. `IndexOutOfBounds` when
    /// the current chunk is the last one.
    fn next_chunk(&mut self) -> Result<()>;

    /// Retreats to the start of the previous chunk. `IndexOutOfBounds`
    /// when the current chunk is the first one.
    fn previous_chunk(&mut self) -> Result<()>;

    /// The start of the chunk the cursor is currently in.
    fn begin_of_chunk(&self) -> StreamPosition;

    /// The global event-index range `(first, last)` of the current chunk,
    /// with `last` exclusive.
    fn event_range(&self) -> (u64, u64);

    /// Overwrites the most recently read timestamp on the stream.
    fn rewrite_timestamp(&mut self, timestamp: u64) -> Result<()>;
}
