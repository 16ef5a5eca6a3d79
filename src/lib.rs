//! A reader for chunked event trace files as written by parallel
//! performance measurement tools.
//!
//! Each measured location (a thread, a process, a GPU stream) has its own
//! chunked, variable-width-encoded event file. This crate decodes those
//! files and delivers typed event records to registered callbacks, either
//! per location through an [`EventReader`], or merged into one globally
//! time-sorted stream through a [`GlobalEventReader`].
//!
//! File access stays outside: a reader pulls bytes through the
//! [`ChunkStream`] trait ([`MemoryChunkStream`] is the bundled in-memory
//! implementation), and takes its id-mapping tables and clock-correction
//! intervals from a [`LocationContext`] built by the surrounding
//! application.
//!
//! ```
//! use evtrace_reader::{
//!     AttributeList, CallbackControl, EventContext, EventReader, LocationData,
//!     MemoryChunkStream, ReaderCallbacks, StreamChunk,
//! };
//!
//! # fn trace_bytes() -> Vec<u8> {
//! #     let mut data = Vec::new();
//! #     data.extend_from_slice(&10u64.to_le_bytes());
//! #     data.push(12); // Enter
//! #     data.extend_from_slice(&[1, 7]);
//! #     data.extend_from_slice(&0u64.to_le_bytes());
//! #     data.push(0x00); // end of file
//! #     data
//! # }
//! let chunks = vec![StreamChunk {
//!     data: trace_bytes(),
//!     first_event: 1,
//!     last_event: 2,
//! }];
//! let stream = MemoryChunkStream::new(chunks)?;
//!
//! let mut callbacks = ReaderCallbacks::<Vec<u32>>::new();
//! callbacks.enter = Some(
//!     |regions: &mut Vec<u32>,
//!      _ctx: EventContext,
//!      _attrs: &AttributeList,
//!      enter: &evtrace_reader::Enter| {
//!         regions.push(enter.region);
//!         CallbackControl::Continue
//!     },
//! );
//!
//! let mut reader =
//!     EventReader::with_callbacks(0, stream, LocationData::new(), callbacks, Vec::new());
//! let (read, result) = reader.read_events(u64::MAX);
//! result?;
//! assert_eq!(read, 1);
//! # Ok::<(), evtrace_reader::Error>(())
//! ```

pub mod attribute_list;
pub mod attribute_value;
pub mod callbacks;
pub mod chunk_stream;
mod compression;
mod dispatch;
mod error;
pub mod events;
mod event_reader;
mod fallback;
mod global_reader;
pub mod location;
pub mod memory;
mod memory_stream;
pub mod types;

pub use attribute_list::{AttributeList, AttributeListIter};
pub use attribute_value::{AttributeValue, Type};
pub use callbacks::{
    CallbackControl, EventCallbacks, EventContext, GlobalEventContext, GlobalReaderCallbacks,
    ReaderCallbacks,
};
pub use chunk_stream::{ChunkStream, StreamPosition};
pub use error::{Error, Result};
pub use event_reader::EventReader;
pub use events::*;
pub use global_reader::GlobalEventReader;
pub use location::{ClockInterval, IdMap, LocationContext, LocationData, MappingKind};
pub use memory_stream::{MemoryChunkStream, StreamChunk};
pub use types::*;
