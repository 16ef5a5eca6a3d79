//! In-memory [`ChunkStream`] implementation over caller-supplied chunk
//! buffers. This is what backs readers when the trace has already been
//! loaded (or mapped) into memory by the surrounding application.

use byteorder::{ByteOrder, LittleEndian};

use crate::chunk_stream::{ChunkStream, StreamPosition};
use crate::compression;
use crate::error::{Error, Result};

/// One chunk of a location's event data: the raw record bytes plus the
/// global event-index range `(first_event, last_event)` the chunk covers,
/// `last_event` exclusive. Event indices are 1-based.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    pub data: Vec<u8>,
    pub first_event: u64,
    pub last_event: u64,
}

pub struct MemoryChunkStream {
    chunks: Vec<StreamChunk>,
    current_chunk: usize,
    offset: usize,
    timestamp_position: StreamPosition,
}

impl MemoryChunkStream {
    /// Chunks must be non-empty and contiguous in event indices, starting
    /// at event 1.
    pub fn new(chunks: Vec<StreamChunk>) -> Result<MemoryChunkStream> {
        if chunks.is_empty() {
            return Err(Error::InvalidArgument);
        }
        let mut expected_first = 1;
        for chunk in &chunks {
            if chunk.first_event != expected_first || chunk.last_event < chunk.first_event {
                return Err(Error::InvalidArgument);
            }
            expected_first = chunk.last_event;
        }
        Ok(MemoryChunkStream {
            chunks,
            current_chunk: 0,
            offset: 0,
            timestamp_position: StreamPosition {
                chunk_index: 0,
                offset: 0,
            },
        })
    }

    fn chunk_data(&self) -> &[u8] {
        &self.chunks[self.current_chunk].data
    }

    fn remaining(&self) -> usize {
        self.chunk_data().len() - self.offset
    }

    fn take(&mut self, n: usize) -> Result<&[u8]> {
        if self.remaining() < n {
            return Err(Error::IndexOutOfBounds);
        }
        let start = self.offset;
        self.offset += n;
        Ok(&self.chunks[self.current_chunk].data[start..start + n])
    }
}

impl ChunkStream for MemoryChunkStream {
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32> {
        let chunk = &self.chunks[self.current_chunk];
        compression::read_compressed_u32(&chunk.data, &mut self.offset)
    }

    fn read_u64(&mut self) -> Result<u64> {
        let chunk = &self.chunks[self.current_chunk];
        compression::read_compressed_u64(&chunk.data, &mut self.offset)
    }

    fn read_i64(&mut self) -> Result<i64> {
        let chunk = &self.chunks[self.current_chunk];
        compression::read_compressed_i64(&chunk.data, &mut self.offset)
    }

    fn read_u64_full(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    fn read_timestamp(&mut self) -> Result<u64> {
        self.timestamp_position = self.position();
        self.read_u64_full()
    }

    fn guarantee_read(&mut self, n: u64) -> Result<()> {
        if (self.remaining() as u64) < n {
            return Err(Error::IndexOutOfBounds);
        }
        Ok(())
    }

    fn guarantee_compressed(&mut self) -> Result<()> {
        let data = self.chunk_data();
        if self.offset >= data.len() {
            return Err(Error::IndexOutOfBounds);
        }
        let needed = compression::compressed_size(data[self.offset])?;
        self.guarantee_read(needed as u64)
    }

    fn guarantee_record(&mut self) -> Result<u64> {
        self.guarantee_compressed()?;
        let length = self.read_u64()?;
        self.guarantee_read(length)?;
        Ok(length)
    }

    fn position(&self) -> StreamPosition {
        StreamPosition {
            chunk_index: self.current_chunk,
            offset: self.offset,
        }
    }

    fn set_position(&mut self, position: StreamPosition) -> Result<()> {
        let chunk = self
            .chunks
            .get(position.chunk_index)
            .ok_or(Error::InvalidArgument)?;
        if position.offset > chunk.data.len() {
            return Err(Error::InvalidArgument);
        }
        self.current_chunk = position.chunk_index;
        self.offset = position.offset;
        Ok(())
    }

    fn timestamp_position(&self) -> StreamPosition {
        self.timestamp_position
    }

    fn set_timestamp_position(&mut self, position: StreamPosition) -> Result<()> {
        let chunk = self
            .chunks
            .get(position.chunk_index)
            .ok_or(Error::InvalidArgument)?;
        if position.offset > chunk.data.len() {
            return Err(Error::InvalidArgument);
        }
        self.timestamp_position = position;
        Ok(())
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        self.guarantee_read(n)?;
        self.offset += n as usize;
        Ok(())
    }

    fn skip_compressed(&mut self) -> Result<()> {
        let data = self.chunk_data();
        if self.offset >= data.len() {
            return Err(Error::IndexOutOfBounds);
        }
        let size = compression::compressed_size(data[self.offset])?;
        self.skip(size as u64)
    }

    fn seek_chunk(&mut self, event_index: u64) -> Result<()> {
        for (index, chunk) in self.chunks.iter().enumerate() {
            if chunk.first_event <= event_index && event_index < chunk.last_event {
                self.current_chunk = index;
                self.offset = 0;
                return Ok(());
            }
        }
        Err(Error::IndexOutOfBounds)
    }

    fn next_chunk(&mut self) -> Result<()> {
        if self.current_chunk + 1 >= self.chunks.len() {
            return Err(Error::IndexOutOfBounds);
        }
        self.current_chunk += 1;
        self.offset = 0;
        Ok(())
    }

    fn previous_chunk(&mut self) -> Result<()> {
        if self.current_chunk == 0 {
            return Err(Error::IndexOutOfBounds);
        }
        self.current_chunk -= 1;
        self.offset = 0;
        Ok(())
    }

    fn begin_of_chunk(&self) -> StreamPosition {
        StreamPosition {
            chunk_index: self.current_chunk,
            offset: 0,
        }
    }

    fn event_range(&self) -> (u64, u64) {
        let chunk = &self.chunks[self.current_chunk];
        (chunk.first_event, chunk.last_event)
    }

    fn rewrite_timestamp(&mut self, timestamp: u64) -> Result<()> {
        let position = self.timestamp_position;
        let chunk = self
            .chunks
            .get_mut(position.chunk_index)
            .ok_or(Error::IntegrityFault)?;
        let bytes = chunk
            .data
            .get_mut(position.offset..position.offset + 8)
            .ok_or(Error::IntegrityFault)?;
        LittleEndian::write_u64(bytes, timestamp);
        Ok(())
    }
}
