//! Per-location streaming event decoder.
//!
//! One reader owns one location's chunk stream and walks it record by
//! record: timestamp, tag, payload. Attribute-list records fill the
//! reader's list for the following event, end-of-chunk records advance
//! the stream, and event records are decoded into the staging record,
//! id-remapped, clock-corrected and delivered to the registered
//! callbacks. When a reader is operated by the global reader it stops
//! delivering itself and only stages, so the merger can order events
//! across locations before triggering callbacks.

use log::debug;
use num_traits::FromPrimitive;

use crate::attribute_list::AttributeList;
use crate::callbacks::{CallbackControl, EventContext, ReaderCallbacks};
use crate::chunk_stream::{ChunkStream, StreamPosition};
use crate::dispatch::deliver_event;
use crate::error::{Error, Result};
use crate::events::*;
use crate::location::{LocationContext, MappingKind};
use crate::types::*;

/// Lazy per-chunk index for backward stepping: for each event in the
/// current chunk, the position of its record group (including an
/// attribute-list prefix) and of its own timestamp.
struct ChunkIndex {
    positions: Vec<StreamPosition>,
    timestamp_positions: Vec<StreamPosition>,
}

pub struct EventReader<S, L, U = ()> {
    location: LocationRef,
    stream: S,
    context: L,
    callbacks: ReaderCallbacks<U>,
    user_data: U,
    attribute_list: AttributeList,
    current_event: EventRecord,
    current_time: TimeStamp,
    global_event_position: u64,
    chunk_local_event_position: u64,
    chunk_index: Option<ChunkIndex>,
    clock_interval_cursor: Option<usize>,
    apply_mapping_tables: bool,
    apply_clock_offsets: bool,
    operated_by_global_reader: bool,
}

fn map_id<L: LocationContext>(context: &L, apply: bool, kind: MappingKind, local_id: u32) -> u32 {
    if !apply {
        return local_id;
    }
    match context.mapping_table(kind) {
        Some(map) => map
            .global_id(u64::from(local_id))
            .unwrap_or(u64::from(local_id)) as u32,
        None => local_id,
    }
}

impl<S: ChunkStream, L: LocationContext> EventReader<S, L, ()> {
    /// A reader without local callbacks, for use under a
    /// [`GlobalEventReader`](crate::GlobalEventReader).
    pub fn new(location: LocationRef, stream: S, context: L) -> EventReader<S, L, ()> {
        EventReader::with_callbacks(location, stream, context, ReaderCallbacks::new(), ())
    }
}

impl<S: ChunkStream, L: LocationContext, U> EventReader<S, L, U> {
    pub fn with_callbacks(
        location: LocationRef,
        stream: S,
        context: L,
        callbacks: ReaderCallbacks<U>,
        user_data: U,
    ) -> EventReader<S, L, U> {
        EventReader {
            location,
            stream,
            context,
            callbacks,
            user_data,
            attribute_list: AttributeList::new(),
            current_event: EventRecord::Unknown,
            current_time: 0,
            global_event_position: 0,
            chunk_local_event_position: 0,
            chunk_index: None,
            clock_interval_cursor: None,
            apply_mapping_tables: true,
            apply_clock_offsets: true,
            operated_by_global_reader: false,
        }
    }

    /// Last-writer-wins replacement of the whole callback table.
    pub fn set_callbacks(&mut self, callbacks: ReaderCallbacks<U>, user_data: U) {
        self.callbacks = callbacks;
        self.user_data = user_data;
    }

    pub fn user_data(&self) -> &U {
        &self.user_data
    }

    /// Consumes the reader and hands back the callback user data.
    pub fn into_user_data(self) -> U {
        self.user_data
    }

    pub fn location(&self) -> LocationRef {
        self.location
    }

    /// 1-based global index of the most recently delivered event.
    pub fn event_position(&self) -> u64 {
        self.global_event_position
    }

    /// Disables (or re-enables) id remapping. Ignored while operated by a
    /// global reader, which requires globally unique ids.
    pub fn apply_mapping_tables(&mut self, enable: bool) {
        self.apply_mapping_tables = enable;
    }

    /// Disables (or re-enables) timestamp correction. Ignored while
    /// operated by a global reader.
    pub fn apply_clock_offsets(&mut self, enable: bool) {
        self.apply_clock_offsets = enable;
    }

    /// Overwrites the timestamp of the record the stream last read.
    pub fn timestamp_rewrite(&mut self, time: TimeStamp) -> Result<()> {
        self.stream.rewrite_timestamp(time)
    }

    pub(crate) fn set_operated_by_global_reader(&mut self) {
        self.operated_by_global_reader = true;
    }

    pub(crate) fn current_time(&self) -> TimeStamp {
        self.current_time
    }

    pub(crate) fn current_event(&self) -> &EventRecord {
        &self.current_event
    }

    pub(crate) fn attribute_list(&self) -> &AttributeList {
        &self.attribute_list
    }

    pub(crate) fn clear_attribute_list(&mut self) {
        self.attribute_list.remove_all();
    }

    pub(crate) fn location_context(&self) -> &L {
        &self.context
    }

    /// Reads records until `records_to_read` events were delivered, the
    /// stream ends, or a callback interrupts. Returns the number of
    /// delivered events; an interrupting event is delivered and counted.
    pub fn read_events(&mut self, records_to_read: u64) -> (u64, Result<()>) {
        let mut read = 0;
        while read < records_to_read {
            match self.read_next() {
                Ok(()) => read += 1,
                Err(Error::InterruptedByCallback) => {
                    read += 1;
                    return (read, Err(Error::InterruptedByCallback));
                }
                Err(Error::IndexOutOfBounds) => return (read, Ok(())),
                Err(error) => return (read, Err(error)),
            }
        }
        (read, Ok(()))
    }

    /// Delivers events in reverse stream order: each call steps back over
    /// the event in front of the cursor, delivers it, and leaves the
    /// cursor before it.
    pub fn read_events_backward(&mut self, records_to_read: u64) -> (u64, Result<()>) {
        let mut read = 0;
        while read < records_to_read {
            match self.read_event_backward() {
                Ok(()) => read += 1,
                Err(Error::InterruptedByCallback) => {
                    read += 1;
                    return (read, Err(Error::InterruptedByCallback));
                }
                Err(Error::IndexOutOfBounds) => return (read, Ok(())),
                Err(error) => return (read, Err(error)),
            }
        }
        (read, Ok(()))
    }

    /// Positions the reader so that the next delivered event is the one
    /// with 1-based global index `position`.
    pub fn seek(&mut self, position: u64) -> Result<()> {
        self.chunk_index = None;
        self.stream.seek_chunk(position)?;

        let (first_event, _) = self.stream.event_range();
        self.global_event_position = first_event - 1;
        self.chunk_local_event_position = 0;

        while self.global_event_position + 1 < position {
            self.skip_event()?;
            self.global_event_position += 1;
            self.chunk_local_event_position += 1;
        }

        // Relocates lazily on the next read.
        self.clock_interval_cursor = None;
        Ok(())
    }

    /// Decodes the next event. Attribute lists, chunk transitions and the
    /// merger-operated mode are handled here; see the module docs.
    pub(crate) fn read_next(&mut self) -> Result<()> {
        loop {
            let raw_time = self.stream.read_timestamp()?;

            self.stream.guarantee_read(1)?;
            let tag = self.stream.read_u8()?;

            match tag {
                TAG_END_OF_CHUNK => {
                    self.chunk_local_event_position = 0;
                    self.chunk_index = None;
                    self.stream.next_chunk()?;
                    continue;
                }
                TAG_END_OF_FILE => return Err(Error::IndexOutOfBounds),
                TAG_ATTRIBUTE_LIST => {
                    // describes the event that follows
                    let apply = self.operated_by_global_reader || self.apply_mapping_tables;
                    let context = &self.context;
                    self.attribute_list
                        .read_from_stream(&mut self.stream, |kind, id| {
                            map_id(context, apply, kind, id)
                        })?;
                    continue;
                }
                _ => {
                    let time = self.apply_clock_correction(raw_time);
                    self.current_time = time;
                    self.current_event = match EventKind::from_u8(tag) {
                        Some(kind) => self.decode_event(kind)?,
                        None => {
                            debug!("stepping over unknown event record tag {tag}");
                            self.skip_record()?;
                            EventRecord::Unknown
                        }
                    };

                    self.global_event_position += 1;
                    self.chunk_local_event_position += 1;

                    // Operated readers stage only; the global reader
                    // triggers callbacks and clears the attribute list.
                    if self.operated_by_global_reader {
                        return Ok(());
                    }

                    let event_context = EventContext {
                        location: self.location,
                        time,
                        event_position: self.global_event_position,
                    };
                    let control = deliver_event(
                        &self.callbacks,
                        &mut self.user_data,
                        event_context,
                        &self.attribute_list,
                        &self.current_event,
                        &self.context,
                    );
                    self.attribute_list.remove_all();

                    return match control {
                        CallbackControl::Continue => Ok(()),
                        CallbackControl::Interrupt => Err(Error::InterruptedByCallback),
                    };
                }
            }
        }
    }

    fn map(&self, kind: MappingKind, local_id: u32) -> u32 {
        map_id(
            &self.context,
            self.operated_by_global_reader || self.apply_mapping_tables,
            kind,
            local_id,
        )
    }

    fn apply_clock_correction(&mut self, time: TimeStamp) -> TimeStamp {
        if !self.operated_by_global_reader && !self.apply_clock_offsets {
            return time;
        }

        let intervals = self.context.clock_intervals();
        if intervals.is_empty() {
            return time;
        }

        // Timestamps mostly increase, so resume from the current interval.
        let mut cursor = self.clock_interval_cursor.unwrap_or(0);
        while time > intervals[cursor].end && cursor + 1 < intervals.len() {
            cursor += 1;
        }
        self.clock_interval_cursor = Some(cursor);

        let interval = &intervals[cursor];
        // A backward seek can put `time` before the interval start.
        let diff = if time >= interval.begin {
            (time - interval.begin) as f64
        } else {
            -((interval.begin - time) as f64)
        };
        let offset = interval.offset + (interval.slope * diff).round_ties_even() as i64;
        // Relies on two's complement; the sum is non-negative by
        // construction of the intervals.
        time.wrapping_add(offset as u64)
    }

    fn skip_record(&mut self) -> Result<()> {
        let record_length = self.stream.guarantee_record()?;
        self.stream.skip(record_length)
    }

    fn skip_compressed_record(&mut self) -> Result<()> {
        self.stream.guarantee_compressed()?;
        self.stream.skip_compressed()
    }

    /// Steps over one event together with an attribute-list prefix,
    /// without decoding or delivering. `IndexOutOfBounds` at the end of
    /// the chunk. Singleton records cannot be stepped over by record
    /// length: their single `0xff`-marked value would read as a length.
    fn skip_event(&mut self) -> Result<()> {
        loop {
            self.stream.read_timestamp()?;
            self.stream.guarantee_read(1)?;
            let tag = self.stream.read_u8()?;
            match tag {
                TAG_END_OF_CHUNK | TAG_END_OF_FILE => return Err(Error::IndexOutOfBounds),
                TAG_ATTRIBUTE_LIST => {
                    self.skip_record()?;
                    continue;
                }
                _ => {
                    return match EventKind::from_u8(tag) {
                        Some(kind) if kind.is_singleton() => self.skip_compressed_record(),
                        _ => self.skip_record(),
                    };
                }
            }
        }
    }

    /// Builds the position/timestamp tables for the current chunk by a
    /// forward skip pass. No-op if the index already exists.
    fn build_chunk_index(&mut self) -> Result<()> {
        if self.chunk_index.is_some() {
            return Ok(());
        }

        let saved_position = self.stream.position();
        let saved_timestamp = self.stream.timestamp_position();
        let begin = self.stream.begin_of_chunk();
        self.stream.set_position(begin)?;

        let mut positions = Vec::new();
        let mut timestamp_positions = Vec::new();

        let scan = loop {
            let group_start = self.stream.position();
            // one record group: optional attribute list, then the event
            // whose own timestamp position the index needs
            let step: Result<StreamPosition> = loop {
                let record_timestamp = self.stream.position();
                if let Err(error) = self.stream.read_timestamp() {
                    break Err(error);
                }
                if let Err(error) = self.stream.guarantee_read(1) {
                    break Err(error);
                }
                let tag = match self.stream.read_u8() {
                    Ok(tag) => tag,
                    Err(error) => break Err(error),
                };
                match tag {
                    TAG_END_OF_CHUNK | TAG_END_OF_FILE => break Err(Error::IndexOutOfBounds),
                    TAG_ATTRIBUTE_LIST => match self.skip_record() {
                        Ok(()) => continue,
                        Err(error) => break Err(error),
                    },
                    _ => {
                        let skipped = match EventKind::from_u8(tag) {
                            Some(kind) if kind.is_singleton() => self.skip_compressed_record(),
                            _ => self.skip_record(),
                        };
                        break skipped.map(|()| record_timestamp);
                    }
                }
            };
            match step {
                Ok(event_timestamp) => {
                    positions.push(group_start);
                    timestamp_positions.push(event_timestamp);
                }
                Err(Error::IndexOutOfBounds) => break Ok(()),
                Err(error) => break Err(error),
            }
        };

        self.stream.set_position(saved_position)?;
        self.stream.set_timestamp_position(saved_timestamp)?;
        scan?;

        self.chunk_index = Some(ChunkIndex {
            positions,
            timestamp_positions,
        });
        Ok(())
    }

    /// One backward step: reposition to the event before the cursor,
    /// deliver it by reading forward, then put the cursor back in front
    /// of it so a subsequent forward read delivers it again.
    fn read_event_backward(&mut self) -> Result<()> {
        if self.chunk_local_event_position == 0 {
            self.stream.previous_chunk()?;
            let (first_event, last_event) = self.stream.event_range();
            self.chunk_local_event_position = last_event - first_event;
            self.chunk_index = None;
        }

        self.build_chunk_index()?;

        let index = self
            .chunk_local_event_position
            .checked_sub(1)
            .ok_or(Error::IndexOutOfBounds)? as usize;
        let (position, timestamp_position) = {
            let chunk_index = self.chunk_index.as_ref().ok_or(Error::IntegrityFault)?;
            let position = *chunk_index.positions.get(index).ok_or(Error::IntegrityFault)?;
            let timestamp = *chunk_index
                .timestamp_positions
                .get(index)
                .ok_or(Error::IntegrityFault)?;
            (position, timestamp)
        };

        self.chunk_local_event_position -= 1;
        self.global_event_position -= 1;
        self.stream.set_position(position)?;
        self.stream.set_timestamp_position(timestamp_position)?;

        match self.read_next() {
            Ok(()) => {}
            // start of chunk reached; the caller already repositioned
            Err(Error::IndexOutOfBounds) => return Ok(()),
            // the event was delivered and counts
            Err(error) => return Err(error),
        }

        self.chunk_local_event_position -= 1;
        self.global_event_position -= 1;
        self.stream.set_position(position)?;
        self.stream.set_timestamp_position(timestamp_position)
    }

    fn decode_event(&mut self, kind: EventKind) -> Result<EventRecord> {
        if kind.is_singleton() {
            self.stream.guarantee_compressed()?;
            return self.decode_singleton_payload(kind);
        }

        let record_length = self.stream.guarantee_record()?;
        let record_end = self.stream.position().advanced(record_length);
        let record = self.decode_framed_payload(kind)?;
        // Always jump to the announced end of the record; fields added by
        // later format revisions are skipped this way.
        self.stream.set_position(record_end)?;
        Ok(record)
    }

    fn decode_singleton_payload(&mut self, kind: EventKind) -> Result<EventRecord> {
        let record = match kind {
            EventKind::Enter => {
                let region = self.stream.read_u32()?;
                EventRecord::Enter(Enter {
                    region: self.map(MappingKind::Region, region),
                })
            }
            EventKind::Leave => {
                let region = self.stream.read_u32()?;
                EventRecord::Leave(Leave {
                    region: self.map(MappingKind::Region, region),
                })
            }
            EventKind::MpiIsendComplete => EventRecord::MpiIsendComplete(MpiIsendComplete {
                request_id: self.stream.read_u64()?,
            }),
            EventKind::MpiIrecvRequest => EventRecord::MpiIrecvRequest(MpiIrecvRequest {
                request_id: self.stream.read_u64()?,
            }),
            EventKind::MpiRequestTest => EventRecord::MpiRequestTest(MpiRequestTest {
                request_id: self.stream.read_u64()?,
            }),
            EventKind::MpiRequestCancelled => {
                EventRecord::MpiRequestCancelled(MpiRequestCancelled {
                    request_id: self.stream.read_u64()?,
                })
            }
            EventKind::OmpFork => EventRecord::OmpFork(OmpFork {
                number_of_requested_threads: self.stream.read_u32()?,
            }),
            EventKind::OmpTaskCreate => EventRecord::OmpTaskCreate(OmpTaskCreate {
                task_id: self.stream.read_u64()?,
            }),
            EventKind::OmpTaskSwitch => EventRecord::OmpTaskSwitch(OmpTaskSwitch {
                task_id: self.stream.read_u64()?,
            }),
            EventKind::OmpTaskComplete => EventRecord::OmpTaskComplete(OmpTaskComplete {
                task_id: self.stream.read_u64()?,
            }),
            _ => unreachable!("not a singleton kind"),
        };
        Ok(record)
    }

    fn decode_framed_payload(&mut self, kind: EventKind) -> Result<EventRecord> {
        let record = match kind {
            EventKind::BufferFlush => {
                let stop_time = self.stream.read_u64_full()?;
                EventRecord::BufferFlush(BufferFlush {
                    stop_time: self.apply_clock_correction(stop_time),
                })
            }
            EventKind::MeasurementOnOff => EventRecord::MeasurementOnOff(MeasurementOnOff {
                measurement_mode: self.stream.read_u8()?,
            }),
            EventKind::MpiSend => {
                let receiver = self.stream.read_u32()?;
                let communicator = self.stream.read_u32()?;
                EventRecord::MpiSend(MpiSend {
                    receiver,
                    communicator: self.map(MappingKind::Comm, communicator),
                    msg_tag: self.stream.read_u32()?,
                    msg_length: self.stream.read_u64()?,
                })
            }
            EventKind::MpiIsend => {
                let receiver = self.stream.read_u32()?;
                let communicator = self.stream.read_u32()?;
                EventRecord::MpiIsend(MpiIsend {
                    receiver,
                    communicator: self.map(MappingKind::Comm, communicator),
                    msg_tag: self.stream.read_u32()?,
                    msg_length: self.stream.read_u64()?,
                    request_id: self.stream.read_u64()?,
                })
            }
            EventKind::MpiRecv => {
                let sender = self.stream.read_u32()?;
                let communicator = self.stream.read_u32()?;
                EventRecord::MpiRecv(MpiRecv {
                    sender,
                    communicator: self.map(MappingKind::Comm, communicator),
                    msg_tag: self.stream.read_u32()?,
                    msg_length: self.stream.read_u64()?,
                })
            }
            EventKind::MpiIrecv => {
                let sender = self.stream.read_u32()?;
                let communicator = self.stream.read_u32()?;
                EventRecord::MpiIrecv(MpiIrecv {
                    sender,
                    communicator: self.map(MappingKind::Comm, communicator),
                    msg_tag: self.stream.read_u32()?,
                    msg_length: self.stream.read_u64()?,
                    request_id: self.stream.read_u64()?,
                })
            }
            EventKind::MpiCollectiveBegin => EventRecord::MpiCollectiveBegin,
            EventKind::MpiCollectiveEnd => {
                let collective_op = self.stream.read_u8()?;
                let communicator = self.stream.read_u32()?;
                EventRecord::MpiCollectiveEnd(MpiCollectiveEnd {
                    collective_op,
                    communicator: self.map(MappingKind::Comm, communicator),
                    root: self.stream.read_u32()?,
                    size_sent: self.stream.read_u64()?,
                    size_received: self.stream.read_u64()?,
                })
            }
            EventKind::OmpJoin => EventRecord::OmpJoin,
            EventKind::OmpAcquireLock => EventRecord::OmpAcquireLock(OmpAcquireLock {
                lock_id: self.stream.read_u32()?,
                acquisition_order: self.stream.read_u32()?,
            }),
            EventKind::OmpReleaseLock => EventRecord::OmpReleaseLock(OmpReleaseLock {
                lock_id: self.stream.read_u32()?,
                acquisition_order: self.stream.read_u32()?,
            }),
            EventKind::Metric => {
                let metric = self.stream.read_u32()?;
                let metric = self.map(MappingKind::Metric, metric);
                let count = self.stream.read_u8()?;
                let mut values = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    let value_type = self.stream.read_u8()?;
                    values.push(self.decode_metric_value(value_type)?);
                }
                EventRecord::Metric(Metric { metric, values })
            }
            EventKind::ParameterString => {
                let parameter = self.stream.read_u32()?;
                let string = self.stream.read_u32()?;
                EventRecord::ParameterString(ParameterString {
                    parameter: self.map(MappingKind::Parameter, parameter),
                    string: self.map(MappingKind::String, string),
                })
            }
            EventKind::ParameterInt => {
                let parameter = self.stream.read_u32()?;
                EventRecord::ParameterInt(ParameterInt {
                    parameter: self.map(MappingKind::Parameter, parameter),
                    value: self.stream.read_i64()?,
                })
            }
            EventKind::ParameterUnsignedInt => {
                let parameter = self.stream.read_u32()?;
                EventRecord::ParameterUnsignedInt(ParameterUnsignedInt {
                    parameter: self.map(MappingKind::Parameter, parameter),
                    value: self.stream.read_u64()?,
                })
            }
            EventKind::RmaWinCreate => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaWinCreate(RmaWinCreate {
                    win: self.map(MappingKind::RmaWin, win),
                })
            }
            EventKind::RmaWinDestroy => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaWinDestroy(RmaWinDestroy {
                    win: self.map(MappingKind::RmaWin, win),
                })
            }
            EventKind::RmaCollectiveBegin => EventRecord::RmaCollectiveBegin,
            EventKind::RmaCollectiveEnd => {
                let collective_op = self.stream.read_u8()?;
                let sync_level = RmaSyncLevel::from_bits_retain(self.stream.read_u32()?);
                let win = self.stream.read_u32()?;
                EventRecord::RmaCollectiveEnd(RmaCollectiveEnd {
                    collective_op,
                    sync_level,
                    win: self.map(MappingKind::RmaWin, win),
                    root: self.stream.read_u32()?,
                    bytes_sent: self.stream.read_u64()?,
                    bytes_received: self.stream.read_u64()?,
                })
            }
            EventKind::RmaGroupSync => {
                let sync_level = RmaSyncLevel::from_bits_retain(self.stream.read_u32()?);
                let win = self.stream.read_u32()?;
                let win = self.map(MappingKind::RmaWin, win);
                let group = self.stream.read_u32()?;
                EventRecord::RmaGroupSync(RmaGroupSync {
                    sync_level,
                    win,
                    group: self.map(MappingKind::Group, group),
                })
            }
            EventKind::RmaRequestLock => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaRequestLock(RmaRequestLock {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    lock_id: self.stream.read_u64()?,
                    lock_type: self.stream.read_u8()?,
                })
            }
            EventKind::RmaAcquireLock => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaAcquireLock(RmaAcquireLock {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    lock_id: self.stream.read_u64()?,
                    lock_type: self.stream.read_u8()?,
                })
            }
            EventKind::RmaTryLock => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaTryLock(RmaTryLock {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    lock_id: self.stream.read_u64()?,
                    lock_type: self.stream.read_u8()?,
                })
            }
            EventKind::RmaReleaseLock => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaReleaseLock(RmaReleaseLock {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    lock_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaSync => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaSync(RmaSync {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    sync_type: self.stream.read_u8()?,
                })
            }
            EventKind::RmaWaitChange => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaWaitChange(RmaWaitChange {
                    win: self.map(MappingKind::RmaWin, win),
                })
            }
            EventKind::RmaPut => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaPut(RmaPut {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    bytes: self.stream.read_u64()?,
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaGet => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaGet(RmaGet {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    bytes: self.stream.read_u64()?,
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaAtomic => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaAtomic(RmaAtomic {
                    win: self.map(MappingKind::RmaWin, win),
                    remote: self.stream.read_u32()?,
                    atomic_type: self.stream.read_u8()?,
                    bytes_sent: self.stream.read_u64()?,
                    bytes_received: self.stream.read_u64()?,
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaOpCompleteBlocking => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaOpCompleteBlocking(RmaOpCompleteBlocking {
                    win: self.map(MappingKind::RmaWin, win),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaOpCompleteNonBlocking => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaOpCompleteNonBlocking(RmaOpCompleteNonBlocking {
                    win: self.map(MappingKind::RmaWin, win),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaOpTest => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaOpTest(RmaOpTest {
                    win: self.map(MappingKind::RmaWin, win),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::RmaOpCompleteRemote => {
                let win = self.stream.read_u32()?;
                EventRecord::RmaOpCompleteRemote(RmaOpCompleteRemote {
                    win: self.map(MappingKind::RmaWin, win),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::ThreadFork => EventRecord::ThreadFork(ThreadFork {
                model: self.stream.read_u8()?,
                number_of_requested_threads: self.stream.read_u32()?,
            }),
            EventKind::ThreadJoin => EventRecord::ThreadJoin(ThreadJoin {
                model: self.stream.read_u8()?,
            }),
            EventKind::ThreadTeamBegin => {
                let thread_team = self.stream.read_u32()?;
                EventRecord::ThreadTeamBegin(ThreadTeamBegin {
                    thread_team: self.map(MappingKind::Comm, thread_team),
                })
            }
            EventKind::ThreadTeamEnd => {
                let thread_team = self.stream.read_u32()?;
                EventRecord::ThreadTeamEnd(ThreadTeamEnd {
                    thread_team: self.map(MappingKind::Comm, thread_team),
                })
            }
            EventKind::ThreadAcquireLock => EventRecord::ThreadAcquireLock(ThreadAcquireLock {
                model: self.stream.read_u8()?,
                lock_id: self.stream.read_u32()?,
                acquisition_order: self.stream.read_u32()?,
            }),
            EventKind::ThreadReleaseLock => EventRecord::ThreadReleaseLock(ThreadReleaseLock {
                model: self.stream.read_u8()?,
                lock_id: self.stream.read_u32()?,
                acquisition_order: self.stream.read_u32()?,
            }),
            EventKind::ThreadTaskCreate => {
                let thread_team = self.stream.read_u32()?;
                EventRecord::ThreadTaskCreate(ThreadTaskCreate {
                    thread_team: self.map(MappingKind::Comm, thread_team),
                    creating_thread: self.stream.read_u32()?,
                    generation_number: self.stream.read_u32()?,
                })
            }
            EventKind::ThreadTaskSwitch => {
                let thread_team = self.stream.read_u32()?;
                EventRecord::ThreadTaskSwitch(ThreadTaskSwitch {
                    thread_team: self.map(MappingKind::Comm, thread_team),
                    creating_thread: self.stream.read_u32()?,
                    generation_number: self.stream.read_u32()?,
                })
            }
            EventKind::ThreadTaskComplete => {
                let thread_team = self.stream.read_u32()?;
                EventRecord::ThreadTaskComplete(ThreadTaskComplete {
                    thread_team: self.map(MappingKind::Comm, thread_team),
                    creating_thread: self.stream.read_u32()?,
                    generation_number: self.stream.read_u32()?,
                })
            }
            EventKind::ThreadCreate => {
                let thread_contingent = self.stream.read_u32()?;
                EventRecord::ThreadCreate(ThreadCreate {
                    thread_contingent: self.map(MappingKind::Comm, thread_contingent),
                    sequence_count: self.stream.read_u64()?,
                })
            }
            EventKind::ThreadBegin => {
                let thread_contingent = self.stream.read_u32()?;
                EventRecord::ThreadBegin(ThreadBegin {
                    thread_contingent: self.map(MappingKind::Comm, thread_contingent),
                    sequence_count: self.stream.read_u64()?,
                })
            }
            EventKind::ThreadWait => {
                let thread_contingent = self.stream.read_u32()?;
                EventRecord::ThreadWait(ThreadWait {
                    thread_contingent: self.map(MappingKind::Comm, thread_contingent),
                    sequence_count: self.stream.read_u64()?,
                })
            }
            EventKind::ThreadEnd => {
                let thread_contingent = self.stream.read_u32()?;
                EventRecord::ThreadEnd(ThreadEnd {
                    thread_contingent: self.map(MappingKind::Comm, thread_contingent),
                    sequence_count: self.stream.read_u64()?,
                })
            }
            EventKind::CallingContextEnter => {
                let calling_context = self.stream.read_u32()?;
                EventRecord::CallingContextEnter(CallingContextEnter {
                    calling_context: self.map(MappingKind::CallingContext, calling_context),
                    unwind_distance: self.stream.read_u32()?,
                })
            }
            EventKind::CallingContextLeave => {
                let calling_context = self.stream.read_u32()?;
                EventRecord::CallingContextLeave(CallingContextLeave {
                    calling_context: self.map(MappingKind::CallingContext, calling_context),
                })
            }
            EventKind::CallingContextSample => {
                let calling_context = self.stream.read_u32()?;
                let calling_context = self.map(MappingKind::CallingContext, calling_context);
                let unwind_distance = self.stream.read_u32()?;
                let interrupt_generator = self.stream.read_u32()?;
                EventRecord::CallingContextSample(CallingContextSample {
                    calling_context,
                    unwind_distance,
                    interrupt_generator: self
                        .map(MappingKind::InterruptGenerator, interrupt_generator),
                })
            }
            EventKind::IoCreateHandle => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoCreateHandle(IoCreateHandle {
                    handle: self.map(MappingKind::IoHandle, handle),
                    mode: self.stream.read_u8()?,
                    creation_flags: IoCreationFlags::from_bits_retain(self.stream.read_u32()?),
                    status_flags: IoStatusFlags::from_bits_retain(self.stream.read_u32()?),
                })
            }
            EventKind::IoDestroyHandle => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoDestroyHandle(IoDestroyHandle {
                    handle: self.map(MappingKind::IoHandle, handle),
                })
            }
            EventKind::IoDuplicateHandle => {
                let old_handle = self.stream.read_u32()?;
                let old_handle = self.map(MappingKind::IoHandle, old_handle);
                let new_handle = self.stream.read_u32()?;
                EventRecord::IoDuplicateHandle(IoDuplicateHandle {
                    old_handle,
                    new_handle: self.map(MappingKind::IoHandle, new_handle),
                    status_flags: IoStatusFlags::from_bits_retain(self.stream.read_u32()?),
                })
            }
            EventKind::IoSeek => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoSeek(IoSeek {
                    handle: self.map(MappingKind::IoHandle, handle),
                    offset_request: self.stream.read_i64()?,
                    whence: self.stream.read_u8()?,
                    offset_result: self.stream.read_u64()?,
                })
            }
            EventKind::IoChangeStatusFlags => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoChangeStatusFlags(IoChangeStatusFlags {
                    handle: self.map(MappingKind::IoHandle, handle),
                    status_flags: IoStatusFlags::from_bits_retain(self.stream.read_u32()?),
                })
            }
            EventKind::IoDeleteFile => {
                let io_paradigm = self.stream.read_u8()?;
                let file = self.stream.read_u32()?;
                EventRecord::IoDeleteFile(IoDeleteFile {
                    io_paradigm,
                    file: self.map(MappingKind::IoFile, file),
                })
            }
            EventKind::IoOperationBegin => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoOperationBegin(IoOperationBegin {
                    handle: self.map(MappingKind::IoHandle, handle),
                    mode: self.stream.read_u8()?,
                    operation_flags: IoOperationFlags::from_bits_retain(self.stream.read_u32()?),
                    bytes_request: self.stream.read_u64()?,
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::IoOperationTest => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoOperationTest(IoOperationTest {
                    handle: self.map(MappingKind::IoHandle, handle),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::IoOperationIssued => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoOperationIssued(IoOperationIssued {
                    handle: self.map(MappingKind::IoHandle, handle),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::IoOperationComplete => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoOperationComplete(IoOperationComplete {
                    handle: self.map(MappingKind::IoHandle, handle),
                    bytes_result: self.stream.read_u64()?,
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::IoOperationCancelled => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoOperationCancelled(IoOperationCancelled {
                    handle: self.map(MappingKind::IoHandle, handle),
                    matching_id: self.stream.read_u64()?,
                })
            }
            EventKind::IoAcquireLock => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoAcquireLock(IoAcquireLock {
                    handle: self.map(MappingKind::IoHandle, handle),
                    lock_type: self.stream.read_u8()?,
                })
            }
            EventKind::IoReleaseLock => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoReleaseLock(IoReleaseLock {
                    handle: self.map(MappingKind::IoHandle, handle),
                    lock_type: self.stream.read_u8()?,
                })
            }
            EventKind::IoTryLock => {
                let handle = self.stream.read_u32()?;
                EventRecord::IoTryLock(IoTryLock {
                    handle: self.map(MappingKind::IoHandle, handle),
                    lock_type: self.stream.read_u8()?,
                })
            }
            EventKind::ProgramBegin => {
                let program_name = self.stream.read_u32()?;
                let program_name = self.map(MappingKind::String, program_name);
                let argument_count = self.stream.read_u32()?;
                let mut program_arguments = Vec::with_capacity(argument_count as usize);
                for _ in 0..argument_count {
                    let argument = self.stream.read_u32()?;
                    program_arguments.push(self.map(MappingKind::String, argument));
                }
                EventRecord::ProgramBegin(ProgramBegin {
                    program_name,
                    program_arguments,
                })
            }
            EventKind::ProgramEnd => EventRecord::ProgramEnd(ProgramEnd {
                exit_status: self.stream.read_i64()?,
            }),
            _ => unreachable!("singleton kinds are decoded separately"),
        };
        Ok(record)
    }

    fn decode_metric_value(&mut self, value_type: u8) -> Result<MetricValue> {
        use crate::attribute_value::Type;

        match Type::from_u8(value_type) {
            Some(Type::Int64) => Ok(MetricValue::Int(self.stream.read_i64()?)),
            Some(Type::Uint64) => Ok(MetricValue::Uint(self.stream.read_u64()?)),
            Some(Type::Double) => Ok(MetricValue::Double(self.stream.read_f64()?)),
            _ => Err(Error::ProcessedWithFaults),
        }
    }
}
