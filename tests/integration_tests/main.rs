use evtrace_reader::{
    AttributeList, AttributeValue, CallbackControl, ClockInterval, Enter, EventContext,
    EventReader, Error, GlobalEventContext, GlobalEventReader, GlobalReaderCallbacks, IdMap,
    Leave, LocationData, MappingKind, MemoryChunkStream, Metric, MetricValue, MpiSend, OmpFork,
    ReaderCallbacks, StreamChunk,
};

/// Hand-assembled wire bytes: every record is an 8-byte little-endian
/// timestamp, a tag byte, and a payload in the compressed encoding.
mod wire {
    pub const TAG_END_OF_FILE: u8 = 0x00;
    pub const TAG_END_OF_CHUNK: u8 = 0x01;
    pub const TAG_ATTRIBUTE_LIST: u8 = 0x04;

    pub const TAG_ENTER: u8 = 12;
    pub const TAG_LEAVE: u8 = 13;
    pub const TAG_MPI_SEND: u8 = 14;
    pub const TAG_METRIC: u8 = 31;
    pub const TAG_THREAD_FORK: u8 = 53;
    pub const TAG_CALLING_CONTEXT_ENTER: u8 = 66;

    pub fn timestamp(out: &mut Vec<u8>, time: u64) {
        out.extend_from_slice(&time.to_le_bytes());
    }

    /// Minimal big-endian compressed encoding: length byte, then bytes.
    pub fn u64v(out: &mut Vec<u8>, value: u64) {
        let len = (8 - value.leading_zeros() as usize / 8).min(8);
        out.push(len as u8);
        out.extend_from_slice(&value.to_be_bytes()[8 - len..]);
    }

    pub fn u32v(out: &mut Vec<u8>, value: u32) {
        u64v(out, u64::from(value));
    }

    pub fn i64v(out: &mut Vec<u8>, value: i64) {
        for len in 1..=8u32 {
            let shift = 64 - 8 * len;
            if (value << shift) >> shift == value {
                out.push(len as u8);
                out.extend_from_slice(&value.to_be_bytes()[8 - len as usize..]);
                return;
            }
        }
    }

    pub fn singleton(out: &mut Vec<u8>, time: u64, tag: u8, encode: impl FnOnce(&mut Vec<u8>)) {
        timestamp(out, time);
        out.push(tag);
        encode(out);
    }

    pub fn framed(out: &mut Vec<u8>, time: u64, tag: u8, payload: &[u8]) {
        timestamp(out, time);
        out.push(tag);
        u64v(out, payload.len() as u64);
        out.extend_from_slice(payload);
    }

    pub fn enter(out: &mut Vec<u8>, time: u64, region: u32) {
        singleton(out, time, TAG_ENTER, |out| u32v(out, region));
    }

    pub fn leave(out: &mut Vec<u8>, time: u64, region: u32) {
        singleton(out, time, TAG_LEAVE, |out| u32v(out, region));
    }

    pub fn mpi_send(
        out: &mut Vec<u8>,
        time: u64,
        receiver: u32,
        communicator: u32,
        msg_tag: u32,
        msg_length: u64,
    ) {
        let mut payload = Vec::new();
        u32v(&mut payload, receiver);
        u32v(&mut payload, communicator);
        u32v(&mut payload, msg_tag);
        u64v(&mut payload, msg_length);
        framed(out, time, TAG_MPI_SEND, &payload);
    }

    /// Attribute list carrying a single `Uint32` entry.
    pub fn attribute_list_u32(out: &mut Vec<u8>, time: u64, id: u32, value: u32) {
        let mut payload = Vec::new();
        u32v(&mut payload, 1);
        u32v(&mut payload, id);
        payload.push(3); // Type::Uint32
        u32v(&mut payload, value);
        framed(out, time, TAG_ATTRIBUTE_LIST, &payload);
    }

    pub fn end_of_chunk(out: &mut Vec<u8>) {
        timestamp(out, 0);
        out.push(TAG_END_OF_CHUNK);
    }

    pub fn end_of_file(out: &mut Vec<u8>) {
        timestamp(out, 0);
        out.push(TAG_END_OF_FILE);
    }
}

/// One chunk holding `event_count` events, terminated as the last chunk.
fn single_chunk_stream(mut data: Vec<u8>, event_count: u64) -> MemoryChunkStream {
    wire::end_of_file(&mut data);
    MemoryChunkStream::new(vec![StreamChunk {
        data,
        first_event: 1,
        last_event: event_count + 1,
    }])
    .unwrap()
}

/// Chunks given as (record bytes, event count); all but the last get an
/// end-of-chunk terminator.
fn multi_chunk_stream(chunks: Vec<(Vec<u8>, u64)>) -> MemoryChunkStream {
    let last = chunks.len() - 1;
    let mut first_event = 1;
    let stream_chunks = chunks
        .into_iter()
        .enumerate()
        .map(|(index, (mut data, event_count))| {
            if index == last {
                wire::end_of_file(&mut data);
            } else {
                wire::end_of_chunk(&mut data);
            }
            let chunk = StreamChunk {
                data,
                first_event,
                last_event: first_event + event_count,
            };
            first_event += event_count;
            chunk
        })
        .collect();
    MemoryChunkStream::new(stream_chunks).unwrap()
}

/// Records every delivered Enter/Leave with its context.
#[derive(Default)]
struct Deliveries {
    events: Vec<(u64, u64, &'static str, u32)>, // (time, position, kind, region)
}

fn collecting_callbacks() -> ReaderCallbacks<Deliveries> {
    let mut callbacks = ReaderCallbacks::<Deliveries>::new();
    callbacks.enter = Some(
        |user: &mut Deliveries, ctx: EventContext, _attrs: &AttributeList, enter: &Enter| {
            user.events
                .push((ctx.time, ctx.event_position, "enter", enter.region));
            CallbackControl::Continue
        },
    );
    callbacks.leave = Some(
        |user: &mut Deliveries, ctx: EventContext, _attrs: &AttributeList, leave: &Leave| {
            user.events
                .push((ctx.time, ctx.event_position, "leave", leave.region));
            CallbackControl::Continue
        },
    );
    callbacks
}

fn into_deliveries<S: evtrace_reader::ChunkStream>(
    reader: EventReader<S, LocationData, Deliveries>,
) -> Vec<(u64, u64, &'static str, u32)> {
    reader.into_user_data().events
}

#[test]
fn delivers_events_with_positions_and_stops_at_end() {
    let mut data = Vec::new();
    wire::enter(&mut data, 10, 1);
    wire::leave(&mut data, 20, 1);
    wire::enter(&mut data, 30, 2);
    let stream = single_chunk_stream(data, 3);

    let mut reader = EventReader::with_callbacks(
        7,
        stream,
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    let (read, result) = reader.read_events(100);
    result.unwrap();
    assert_eq!(read, 3);
    assert_eq!(
        into_deliveries(reader),
        [
            (10, 1, "enter", 1),
            (20, 2, "leave", 1),
            (30, 3, "enter", 2)
        ]
    );
}

#[test]
fn attribute_list_attaches_to_next_event_only() {
    #[derive(Default)]
    struct Attrs {
        per_event: Vec<Vec<(u32, AttributeValue)>>,
    }

    let mut data = Vec::new();
    wire::attribute_list_u32(&mut data, 10, 7, 42);
    wire::enter(&mut data, 10, 5);
    wire::enter(&mut data, 20, 6);
    let stream = single_chunk_stream(data, 2);

    let mut callbacks = ReaderCallbacks::<Attrs>::new();
    callbacks.enter = Some(
        |user: &mut Attrs, _ctx: EventContext, attrs: &AttributeList, _enter: &Enter| {
            user.per_event
                .push(attrs.iter().map(|(id, value)| (id, *value)).collect());
            CallbackControl::Continue
        },
    );

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        LocationData::new(),
        callbacks,
        Attrs::default(),
    );
    let (read, result) = reader.read_events(10);
    result.unwrap();
    assert_eq!(read, 2);

    let per_event = reader.into_user_data().per_event;
    assert_eq!(per_event[0], [(7, AttributeValue::Uint32(42))]);
    assert!(per_event[1].is_empty());
}

#[test]
fn piecewise_clock_correction() {
    let mut data = Vec::new();
    wire::enter(&mut data, 50, 1);
    wire::enter(&mut data, 100, 1);
    wire::enter(&mut data, 200, 1);
    let stream = single_chunk_stream(data, 3);

    let mut context = LocationData::new();
    context.set_clock_intervals(vec![
        ClockInterval {
            begin: 0,
            end: 100,
            offset: 0,
            slope: 0.1,
        },
        ClockInterval {
            begin: 100,
            end: u64::MAX,
            offset: 10,
            slope: 0.0,
        },
    ]);

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        context,
        collecting_callbacks(),
        Deliveries::default(),
    );
    let (read, result) = reader.read_events(3);
    result.unwrap();
    assert_eq!(read, 3);

    let times: Vec<u64> = into_deliveries(reader)
        .iter()
        .map(|(time, ..)| *time)
        .collect();
    assert_eq!(times, [55, 110, 210]);
}

#[test]
fn identity_without_tables_and_remapping_with_them() {
    let build = || {
        let mut data = Vec::new();
        wire::enter(&mut data, 10, 2);
        single_chunk_stream(data, 1)
    };

    // no mapping table: ids unchanged
    let mut reader = EventReader::with_callbacks(
        0,
        build(),
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.read_events(1).1.unwrap();
    assert_eq!(into_deliveries(reader)[0].3, 2);

    // dense region table rewrites the id
    let mut context = LocationData::new();
    context.set_mapping_table(MappingKind::Region, IdMap::Dense(vec![100, 101, 102]));
    let mut reader = EventReader::with_callbacks(
        0,
        build(),
        context,
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.read_events(1).1.unwrap();
    assert_eq!(into_deliveries(reader)[0].3, 102);

    // remapping disabled again
    let mut context = LocationData::new();
    context.set_mapping_table(MappingKind::Region, IdMap::Dense(vec![100, 101, 102]));
    let mut reader = EventReader::with_callbacks(
        0,
        build(),
        context,
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.apply_mapping_tables(false);
    reader.read_events(1).1.unwrap();
    assert_eq!(into_deliveries(reader)[0].3, 2);
}

#[test]
fn framed_payload_and_metric_values() {
    #[derive(Default)]
    struct Payloads {
        sends: Vec<MpiSend>,
        metrics: Vec<(u32, Vec<MetricValue>)>,
    }

    let mut data = Vec::new();
    wire::mpi_send(&mut data, 5, 3, 1, 99, 4096);
    let mut metric_payload = Vec::new();
    wire::u32v(&mut metric_payload, 17); // metric id
    metric_payload.push(3); // three values
    metric_payload.push(8); // Type::Int64
    wire::i64v(&mut metric_payload, -5);
    metric_payload.push(4); // Type::Uint64
    wire::u64v(&mut metric_payload, 77);
    metric_payload.push(10); // Type::Double
    metric_payload.extend_from_slice(&1.5f64.to_le_bytes());
    wire::framed(&mut data, 6, wire::TAG_METRIC, &metric_payload);
    let stream = single_chunk_stream(data, 2);

    let mut callbacks = ReaderCallbacks::<Payloads>::new();
    callbacks.mpi_send = Some(
        |user: &mut Payloads, _ctx: EventContext, _attrs: &AttributeList, send: &MpiSend| {
            user.sends.push(*send);
            CallbackControl::Continue
        },
    );
    callbacks.metric = Some(
        |user: &mut Payloads, _ctx: EventContext, _attrs: &AttributeList, metric: &Metric| {
            user.metrics.push((metric.metric, metric.values.clone()));
            CallbackControl::Continue
        },
    );

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        LocationData::new(),
        callbacks,
        Payloads::default(),
    );
    let (read, result) = reader.read_events(2);
    result.unwrap();
    assert_eq!(read, 2);

    let collected = reader.into_user_data();
    assert_eq!(
        collected.sends,
        [MpiSend {
            receiver: 3,
            communicator: 1,
            msg_tag: 99,
            msg_length: 4096,
        }]
    );
    assert_eq!(
        collected.metrics,
        [(
            17,
            vec![
                MetricValue::Int(-5),
                MetricValue::Uint(77),
                MetricValue::Double(1.5)
            ]
        )]
    );
}

#[test]
fn unknown_and_extended_records_are_stepped_over() {
    let mut data = Vec::new();
    wire::enter(&mut data, 10, 1);
    // a record tag from a future format revision
    wire::framed(&mut data, 11, 200, &[0xaa, 0xbb, 0xcc]);
    // a known framed record with extra trailing payload bytes
    let mut extended = Vec::new();
    wire::u32v(&mut extended, 3);
    wire::u32v(&mut extended, 1);
    wire::u32v(&mut extended, 99);
    wire::u64v(&mut extended, 4096);
    extended.extend_from_slice(&[0xde, 0xad]); // future fields
    wire::framed(&mut data, 12, wire::TAG_MPI_SEND, &extended);
    wire::leave(&mut data, 13, 1);
    let stream = single_chunk_stream(data, 4);

    #[derive(Default)]
    struct Counts {
        unknown: u32,
        sends: u32,
        leaves: u32,
    }
    let mut callbacks = ReaderCallbacks::<Counts>::new();
    callbacks.unknown = Some(
        |user: &mut Counts, _ctx: EventContext, _attrs: &AttributeList| {
            user.unknown += 1;
            CallbackControl::Continue
        },
    );
    callbacks.mpi_send = Some(
        |user: &mut Counts, _ctx: EventContext, _attrs: &AttributeList, _send: &MpiSend| {
            user.sends += 1;
            CallbackControl::Continue
        },
    );
    callbacks.leave = Some(
        |user: &mut Counts, _ctx: EventContext, _attrs: &AttributeList, _leave: &Leave| {
            user.leaves += 1;
            CallbackControl::Continue
        },
    );

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        LocationData::new(),
        callbacks,
        Counts::default(),
    );
    let (read, result) = reader.read_events(10);
    result.unwrap();
    assert_eq!(read, 4);
    let counts = reader.into_user_data();
    assert_eq!(counts.unknown, 1);
    assert_eq!(counts.sends, 1);
    assert_eq!(counts.leaves, 1);
}

#[test]
fn callback_interrupt_counts_the_delivered_event() {
    let mut data = Vec::new();
    for index in 0..5 {
        wire::enter(&mut data, 10 + index, index as u32);
    }
    let stream = single_chunk_stream(data, 5);

    #[derive(Default)]
    struct Stopper {
        delivered: u64,
    }
    let mut callbacks = ReaderCallbacks::<Stopper>::new();
    callbacks.enter = Some(
        |user: &mut Stopper, _ctx: EventContext, _attrs: &AttributeList, _enter: &Enter| {
            user.delivered += 1;
            if user.delivered == 3 {
                CallbackControl::Interrupt
            } else {
                CallbackControl::Continue
            }
        },
    );

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        LocationData::new(),
        callbacks,
        Stopper::default(),
    );
    let (read, result) = reader.read_events(10);
    assert_eq!(read, 3);
    assert_eq!(result, Err(Error::InterruptedByCallback));
    assert_eq!(reader.event_position(), 3);

    // the loop can be resumed afterwards
    let (rest, result) = reader.read_events(10);
    result.unwrap();
    assert_eq!(rest, 2);
}

#[test]
fn seek_is_idempotent_with_forward_reading() {
    let mut chunk_a = Vec::new();
    wire::enter(&mut chunk_a, 10, 1);
    wire::attribute_list_u32(&mut chunk_a, 20, 9, 1);
    wire::enter(&mut chunk_a, 20, 2);
    let mut chunk_b = Vec::new();
    wire::enter(&mut chunk_b, 30, 3);
    wire::leave(&mut chunk_b, 40, 3);
    let chunks = vec![(chunk_a, 2), (chunk_b, 2)];

    // read everything once for the reference sequence
    let mut reader = EventReader::with_callbacks(
        0,
        multi_chunk_stream(chunks.clone()),
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.read_events(4).1.unwrap();
    let reference = into_deliveries(reader);

    // seeking to each position must deliver the same event as the
    // uninterrupted forward pass
    for position in 1..=4u64 {
        let mut reader = EventReader::with_callbacks(
            0,
            multi_chunk_stream(chunks.clone()),
            LocationData::new(),
            collecting_callbacks(),
            Deliveries::default(),
        );
        reader.seek(position).unwrap();
        let (read, result) = reader.read_events(1);
        result.unwrap();
        assert_eq!(read, 1);
        assert_eq!(into_deliveries(reader)[0], reference[position as usize - 1]);
    }

    // seeking backward after reading forward
    let mut reader = EventReader::with_callbacks(
        0,
        multi_chunk_stream(chunks.clone()),
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.read_events(4).1.unwrap();
    reader.seek(2).unwrap();
    let (read, result) = reader.read_events(1);
    result.unwrap();
    assert_eq!(read, 1);
    assert_eq!(into_deliveries(reader)[4], reference[1]);
}

#[test]
fn backward_read_redelivers_and_restores_the_cursor() {
    let mut data = Vec::new();
    wire::enter(&mut data, 10, 1);
    wire::attribute_list_u32(&mut data, 20, 9, 7);
    wire::enter(&mut data, 20, 2);
    wire::leave(&mut data, 30, 2);
    let chunks = vec![(data, 3)];

    let mut reader = EventReader::with_callbacks(
        0,
        multi_chunk_stream(chunks),
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );

    reader.read_events(2).1.unwrap();
    let (read, result) = reader.read_events_backward(1);
    result.unwrap();
    assert_eq!(read, 1);
    let (read, result) = reader.read_events(2);
    result.unwrap();
    assert_eq!(read, 2);

    let events = into_deliveries(reader);
    // forward e1 e2, backward redelivers e2, forward e2 e3
    assert_eq!(events[1], events[2]);
    assert_eq!(events[1], events[3]);
    assert_eq!(events[0].3, 1);
    assert_eq!(events[4].3, 2);
    assert_eq!(events[4].2, "leave");
}

#[test]
fn backward_read_walks_the_whole_trace_in_reverse() {
    let mut chunk_a = Vec::new();
    wire::enter(&mut chunk_a, 10, 1);
    wire::enter(&mut chunk_a, 20, 2);
    let mut chunk_b = Vec::new();
    wire::enter(&mut chunk_b, 30, 3);
    wire::enter(&mut chunk_b, 40, 4);
    let chunks = vec![(chunk_a, 2), (chunk_b, 2)];

    let mut reader = EventReader::with_callbacks(
        0,
        multi_chunk_stream(chunks),
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );

    reader.read_events(4).1.unwrap();
    // steps back across the chunk boundary and stops at the start
    let (read, result) = reader.read_events_backward(10);
    result.unwrap();
    assert_eq!(read, 4);

    let regions: Vec<u32> = into_deliveries(reader)
        .iter()
        .map(|(.., region)| *region)
        .collect();
    assert_eq!(regions, [1, 2, 3, 4, 4, 3, 2, 1]);
}

#[test]
fn backward_read_on_a_fresh_reader_reads_nothing() {
    let mut data = Vec::new();
    wire::enter(&mut data, 10, 1);
    let stream = single_chunk_stream(data, 1);

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    let (read, result) = reader.read_events_backward(1);
    result.unwrap();
    assert_eq!(read, 0);
}

#[test]
fn timestamp_rewrite_changes_the_stored_time() {
    let mut data = Vec::new();
    wire::enter(&mut data, 10, 1);
    let stream = single_chunk_stream(data, 1);

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.read_events(1).1.unwrap();
    reader.timestamp_rewrite(999).unwrap();

    reader.seek(1).unwrap();
    reader.read_events(1).1.unwrap();

    let events = into_deliveries(reader);
    assert_eq!(events[0].0, 10);
    assert_eq!(events[1].0, 999);
}

fn global_collecting_callbacks() -> GlobalReaderCallbacks<Vec<(u64, u64, &'static str, u32)>> {
    type Sink = Vec<(u64, u64, &'static str, u32)>;
    let mut callbacks = GlobalReaderCallbacks::<Sink>::new();
    callbacks.enter = Some(
        |user: &mut Sink, ctx: GlobalEventContext, _attrs: &AttributeList, enter: &Enter| {
            user.push((ctx.time, ctx.location, "enter", enter.region));
            CallbackControl::Continue
        },
    );
    callbacks.leave = Some(
        |user: &mut Sink, ctx: GlobalEventContext, _attrs: &AttributeList, leave: &Leave| {
            user.push((ctx.time, ctx.location, "leave", leave.region));
            CallbackControl::Continue
        },
    );
    callbacks
}

#[test]
fn merger_orders_by_time_then_location() {
    let mut l1 = Vec::new();
    wire::enter(&mut l1, 10, 1);
    wire::leave(&mut l1, 20, 1);
    let mut l2 = Vec::new();
    wire::enter(&mut l2, 10, 2);
    wire::leave(&mut l2, 15, 2);

    let readers = vec![
        EventReader::new(1, single_chunk_stream(l1, 2), LocationData::new()),
        EventReader::new(2, single_chunk_stream(l2, 2), LocationData::new()),
    ];
    let mut global =
        GlobalEventReader::new(readers, global_collecting_callbacks(), Vec::new()).unwrap();

    let (read, result) = global.read_events(100);
    result.unwrap();
    assert_eq!(read, 4);
    assert!(!global.has_event());

    assert_eq!(
        global.into_user_data(),
        [
            (10, 1, "enter", 1),
            (10, 2, "enter", 2),
            (15, 2, "leave", 2),
            (20, 1, "leave", 1)
        ]
    );
}

#[test]
fn merger_retires_exhausted_and_empty_locations() {
    let mut l1 = Vec::new();
    wire::enter(&mut l1, 5, 1);
    let mut l2 = Vec::new();
    wire::enter(&mut l2, 1, 2);
    wire::enter(&mut l2, 10, 2);
    wire::enter(&mut l2, 20, 2);
    let l3 = Vec::new(); // no events at all

    let readers = vec![
        EventReader::new(1, single_chunk_stream(l1, 1), LocationData::new()),
        EventReader::new(2, single_chunk_stream(l2, 3), LocationData::new()),
        EventReader::new(3, single_chunk_stream(l3, 0), LocationData::new()),
    ];
    let mut global =
        GlobalEventReader::new(readers, global_collecting_callbacks(), Vec::new()).unwrap();

    let (read, result) = global.read_events(100);
    result.unwrap();
    assert_eq!(read, 4);

    let order: Vec<(u64, u64)> = global
        .into_user_data()
        .iter()
        .map(|(time, location, ..)| (*time, *location))
        .collect();
    assert_eq!(order, [(1, 2), (5, 1), (10, 2), (20, 2)]);
}

#[test]
fn merger_applies_mappings_even_when_disabled_locally() {
    let mut l1 = Vec::new();
    wire::enter(&mut l1, 10, 0);

    let mut context = LocationData::new();
    context.set_mapping_table(MappingKind::Region, IdMap::Dense(vec![500]));

    let mut reader = EventReader::new(1, single_chunk_stream(l1, 1), context);
    reader.apply_mapping_tables(false);

    let mut global =
        GlobalEventReader::new(vec![reader], global_collecting_callbacks(), Vec::new()).unwrap();
    global.read_events(1).1.unwrap();
    assert_eq!(global.into_user_data()[0].3, 500);
}

#[test]
fn merger_interrupt_counts_the_delivered_event() {
    let mut l1 = Vec::new();
    wire::enter(&mut l1, 10, 1);
    wire::enter(&mut l1, 20, 1);
    wire::enter(&mut l1, 30, 1);

    type Sink = Vec<u64>;
    let mut callbacks = GlobalReaderCallbacks::<Sink>::new();
    callbacks.enter = Some(
        |user: &mut Sink, ctx: GlobalEventContext, _attrs: &AttributeList, _enter: &Enter| {
            user.push(ctx.time);
            if user.len() == 2 {
                CallbackControl::Interrupt
            } else {
                CallbackControl::Continue
            }
        },
    );

    let readers = vec![EventReader::new(
        1,
        single_chunk_stream(l1, 3),
        LocationData::new(),
    )];
    let mut global = GlobalEventReader::new(readers, callbacks, Vec::new()).unwrap();

    let (read, result) = global.read_events(10);
    assert_eq!(read, 2);
    assert_eq!(result, Err(Error::InterruptedByCallback));

    let (rest, result) = global.read_events(10);
    result.unwrap();
    assert_eq!(rest, 1);
}

#[test]
fn thread_fork_lowers_to_omp_fork_for_legacy_consumers() {
    let openmp = 3u8;
    let pthread = 5u8;

    let mut data = Vec::new();
    let mut payload = Vec::new();
    payload.push(openmp);
    wire::u32v(&mut payload, 4);
    wire::framed(&mut data, 10, wire::TAG_THREAD_FORK, &payload);
    let mut payload = Vec::new();
    payload.push(pthread);
    wire::u32v(&mut payload, 2);
    wire::framed(&mut data, 20, wire::TAG_THREAD_FORK, &payload);
    let stream = single_chunk_stream(data, 2);

    type Sink = Vec<u32>;
    let mut callbacks = ReaderCallbacks::<Sink>::new();
    callbacks.omp_fork = Some(
        |user: &mut Sink, _ctx: EventContext, _attrs: &AttributeList, fork: &OmpFork| {
            user.push(fork.number_of_requested_threads);
            CallbackControl::Continue
        },
    );

    let mut reader =
        EventReader::with_callbacks(0, stream, LocationData::new(), callbacks, Vec::new());
    let (read, result) = reader.read_events(10);
    result.unwrap();
    // both events advance the position, only the OpenMP one is lowered
    assert_eq!(read, 2);
    assert_eq!(reader.into_user_data(), [4]);
}

#[test]
fn calling_context_enter_lowers_to_enter() {
    let mut data = Vec::new();
    let mut payload = Vec::new();
    wire::u32v(&mut payload, 6); // calling context
    wire::u32v(&mut payload, 1); // unwind distance
    wire::framed(&mut data, 10, wire::TAG_CALLING_CONTEXT_ENTER, &payload);
    let stream = single_chunk_stream(data, 1);

    let mut context = LocationData::new();
    context.set_calling_context_region(6, 77);

    let mut reader = EventReader::with_callbacks(
        0,
        stream,
        context,
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.read_events(1).1.unwrap();
    assert_eq!(into_deliveries(reader), [(10, 1, "enter", 77)]);
}

#[test]
fn full_width_escape_values_survive_skip_and_read() {
    let mut data = Vec::new();
    // region encoded through the 0xff full-width escape
    wire::timestamp(&mut data, 10);
    data.push(wire::TAG_ENTER);
    data.push(0xff);
    data.extend_from_slice(&u64::from(u32::MAX).to_le_bytes());
    wire::enter(&mut data, 20, 3);
    let chunks = vec![(data, 2)];

    // seek(2) has to step over the escaped singleton
    let mut reader = EventReader::with_callbacks(
        0,
        multi_chunk_stream(chunks),
        LocationData::new(),
        collecting_callbacks(),
        Deliveries::default(),
    );
    reader.seek(2).unwrap();
    reader.read_events(1).1.unwrap();
    assert_eq!(into_deliveries(reader), [(20, 2, "enter", 3)]);
}
