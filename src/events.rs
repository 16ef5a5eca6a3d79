//! The closed set of event record kinds and their payload types.
//!
//! Tag numbering and field order are fixed by the producer. Kinds fall
//! into two wire framings: *singleton* records carry exactly one
//! compressed value, everything else announces its byte length up front
//! so that readers can step over fields added by later format revisions.

use num_derive::FromPrimitive;

use crate::types::*;

/// Record tag of the end-of-file marker.
pub const TAG_END_OF_FILE: u8 = 0x00;
/// Record tag of the end-of-chunk marker.
pub const TAG_END_OF_CHUNK: u8 = 0x01;
/// Record tag of an attribute list prefixing the following event.
pub const TAG_ATTRIBUTE_LIST: u8 = 0x04;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum EventKind {
    BufferFlush = 10,
    MeasurementOnOff = 11,
    Enter = 12,
    Leave = 13,
    MpiSend = 14,
    MpiIsend = 15,
    MpiIsendComplete = 16,
    MpiIrecvRequest = 17,
    MpiRecv = 18,
    MpiIrecv = 19,
    MpiRequestTest = 20,
    MpiRequestCancelled = 21,
    MpiCollectiveBegin = 22,
    MpiCollectiveEnd = 23,
    OmpFork = 24,
    OmpJoin = 25,
    OmpAcquireLock = 26,
    OmpReleaseLock = 27,
    OmpTaskCreate = 28,
    OmpTaskSwitch = 29,
    OmpTaskComplete = 30,
    Metric = 31,
    ParameterString = 32,
    ParameterInt = 33,
    ParameterUnsignedInt = 34,
    RmaWinCreate = 35,
    RmaWinDestroy = 36,
    RmaCollectiveBegin = 37,
    RmaCollectiveEnd = 38,
    RmaGroupSync = 39,
    RmaRequestLock = 40,
    RmaAcquireLock = 41,
    RmaTryLock = 42,
    RmaReleaseLock = 43,
    RmaSync = 44,
    RmaWaitChange = 45,
    RmaPut = 46,
    RmaGet = 47,
    RmaAtomic = 48,
    RmaOpCompleteBlocking = 49,
    RmaOpCompleteNonBlocking = 50,
    RmaOpTest = 51,
    RmaOpCompleteRemote = 52,
    ThreadFork = 53,
    ThreadJoin = 54,
    ThreadTeamBegin = 55,
    ThreadTeamEnd = 56,
    ThreadAcquireLock = 57,
    ThreadReleaseLock = 58,
    ThreadTaskCreate = 59,
    ThreadTaskSwitch = 60,
    ThreadTaskComplete = 61,
    ThreadCreate = 62,
    ThreadBegin = 63,
    ThreadWait = 64,
    ThreadEnd = 65,
    CallingContextEnter = 66,
    CallingContextLeave = 67,
    CallingContextSample = 68,
    IoCreateHandle = 69,
    IoDestroyHandle = 70,
    IoDuplicateHandle = 71,
    IoSeek = 72,
    IoChangeStatusFlags = 73,
    IoDeleteFile = 74,
    IoOperationBegin = 75,
    IoOperationTest = 76,
    IoOperationIssued = 77,
    IoOperationComplete = 78,
    IoOperationCancelled = 79,
    IoAcquireLock = 80,
    IoReleaseLock = 81,
    IoTryLock = 82,
    ProgramBegin = 83,
    ProgramEnd = 84,
}

impl EventKind {
    /// Singleton records carry a single compressed value and no length
    /// prefix. This set is closed; later format revisions only add
    /// length-framed kinds.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            EventKind::Enter
                | EventKind::Leave
                | EventKind::MpiIsendComplete
                | EventKind::MpiIrecvRequest
                | EventKind::MpiRequestTest
                | EventKind::MpiRequestCancelled
                | EventKind::OmpFork
                | EventKind::OmpTaskCreate
                | EventKind::OmpTaskSwitch
                | EventKind::OmpTaskComplete
        )
    }
}

/// One sampled metric value, typed by the producer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(i64),
    Uint(u64),
    Double(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferFlush {
    /// Time the flush finished, clock-corrected like the event time.
    pub stop_time: TimeStamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementOnOff {
    pub measurement_mode: MeasurementMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enter {
    pub region: RegionRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leave {
    pub region: RegionRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiSend {
    pub receiver: u32,
    pub communicator: CommRef,
    pub msg_tag: u32,
    pub msg_length: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiIsend {
    pub receiver: u32,
    pub communicator: CommRef,
    pub msg_tag: u32,
    pub msg_length: u64,
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiIsendComplete {
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiIrecvRequest {
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiRecv {
    pub sender: u32,
    pub communicator: CommRef,
    pub msg_tag: u32,
    pub msg_length: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiIrecv {
    pub sender: u32,
    pub communicator: CommRef,
    pub msg_tag: u32,
    pub msg_length: u64,
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiRequestTest {
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiRequestCancelled {
    pub request_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpiCollectiveEnd {
    pub collective_op: CollectiveOp,
    pub communicator: CommRef,
    pub root: u32,
    pub size_sent: u64,
    pub size_received: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmpFork {
    pub number_of_requested_threads: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmpAcquireLock {
    pub lock_id: u32,
    pub acquisition_order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmpReleaseLock {
    pub lock_id: u32,
    pub acquisition_order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmpTaskCreate {
    pub task_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmpTaskSwitch {
    pub task_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmpTaskComplete {
    pub task_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub metric: MetricRef,
    pub values: Vec<MetricValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterString {
    pub parameter: ParameterRef,
    pub string: StringRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterInt {
    pub parameter: ParameterRef,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterUnsignedInt {
    pub parameter: ParameterRef,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaWinCreate {
    pub win: RmaWinRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaWinDestroy {
    pub win: RmaWinRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaCollectiveEnd {
    pub collective_op: CollectiveOp,
    pub sync_level: RmaSyncLevel,
    pub win: RmaWinRef,
    pub root: u32,
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaGroupSync {
    pub sync_level: RmaSyncLevel,
    pub win: RmaWinRef,
    pub group: GroupRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaRequestLock {
    pub win: RmaWinRef,
    pub remote: u32,
    pub lock_id: u64,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaAcquireLock {
    pub win: RmaWinRef,
    pub remote: u32,
    pub lock_id: u64,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaTryLock {
    pub win: RmaWinRef,
    pub remote: u32,
    pub lock_id: u64,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaReleaseLock {
    pub win: RmaWinRef,
    pub remote: u32,
    pub lock_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaSync {
    pub win: RmaWinRef,
    pub remote: u32,
    pub sync_type: RmaSyncType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaWaitChange {
    pub win: RmaWinRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaPut {
    pub win: RmaWinRef,
    pub remote: u32,
    pub bytes: u64,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaGet {
    pub win: RmaWinRef,
    pub remote: u32,
    pub bytes: u64,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaAtomic {
    pub win: RmaWinRef,
    pub remote: u32,
    pub atomic_type: RmaAtomicType,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaOpCompleteBlocking {
    pub win: RmaWinRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaOpCompleteNonBlocking {
    pub win: RmaWinRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaOpTest {
    pub win: RmaWinRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmaOpCompleteRemote {
    pub win: RmaWinRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadFork {
    pub model: Paradigm,
    pub number_of_requested_threads: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadJoin {
    pub model: Paradigm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadTeamBegin {
    pub thread_team: CommRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadTeamEnd {
    pub thread_team: CommRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAcquireLock {
    pub model: Paradigm,
    pub lock_id: u32,
    pub acquisition_order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadReleaseLock {
    pub model: Paradigm,
    pub lock_id: u32,
    pub acquisition_order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadTaskCreate {
    pub thread_team: CommRef,
    pub creating_thread: u32,
    pub generation_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadTaskSwitch {
    pub thread_team: CommRef,
    pub creating_thread: u32,
    pub generation_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadTaskComplete {
    pub thread_team: CommRef,
    pub creating_thread: u32,
    pub generation_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadCreate {
    pub thread_contingent: CommRef,
    pub sequence_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadBegin {
    pub thread_contingent: CommRef,
    pub sequence_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadWait {
    pub thread_contingent: CommRef,
    pub sequence_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadEnd {
    pub thread_contingent: CommRef,
    pub sequence_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallingContextEnter {
    pub calling_context: CallingContextRef,
    pub unwind_distance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallingContextLeave {
    pub calling_context: CallingContextRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallingContextSample {
    pub calling_context: CallingContextRef,
    pub unwind_distance: u32,
    pub interrupt_generator: InterruptGeneratorRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoCreateHandle {
    pub handle: IoHandleRef,
    pub mode: IoAccessMode,
    pub creation_flags: IoCreationFlags,
    pub status_flags: IoStatusFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoDestroyHandle {
    pub handle: IoHandleRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoDuplicateHandle {
    pub old_handle: IoHandleRef,
    pub new_handle: IoHandleRef,
    pub status_flags: IoStatusFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoSeek {
    pub handle: IoHandleRef,
    pub offset_request: i64,
    pub whence: IoSeekOption,
    pub offset_result: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoChangeStatusFlags {
    pub handle: IoHandleRef,
    pub status_flags: IoStatusFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoDeleteFile {
    pub io_paradigm: IoParadigmRef,
    pub file: IoFileRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOperationBegin {
    pub handle: IoHandleRef,
    pub mode: IoOperationMode,
    pub operation_flags: IoOperationFlags,
    pub bytes_request: u64,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOperationTest {
    pub handle: IoHandleRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOperationIssued {
    pub handle: IoHandleRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOperationComplete {
    pub handle: IoHandleRef,
    pub bytes_result: u64,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOperationCancelled {
    pub handle: IoHandleRef,
    pub matching_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoAcquireLock {
    pub handle: IoHandleRef,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoReleaseLock {
    pub handle: IoHandleRef,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoTryLock {
    pub handle: IoHandleRef,
    pub lock_type: LockType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBegin {
    pub program_name: StringRef,
    pub program_arguments: Vec<StringRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramEnd {
    pub exit_status: i64,
}

/// The staged "current event" of a reader: one variant per kind, plus
/// `Unknown` for tags outside the closed set (their payload is stepped
/// over, the delivery goes to the `unknown` callback).
#[derive(Debug, Clone, PartialEq)]
pub enum EventRecord {
    Unknown,
    BufferFlush(BufferFlush),
    MeasurementOnOff(MeasurementOnOff),
    Enter(Enter),
    Leave(Leave),
    MpiSend(MpiSend),
    MpiIsend(MpiIsend),
    MpiIsendComplete(MpiIsendComplete),
    MpiIrecvRequest(MpiIrecvRequest),
    MpiRecv(MpiRecv),
    MpiIrecv(MpiIrecv),
    MpiRequestTest(MpiRequestTest),
    MpiRequestCancelled(MpiRequestCancelled),
    MpiCollectiveBegin,
    MpiCollectiveEnd(MpiCollectiveEnd),
    OmpFork(OmpFork),
    OmpJoin,
    OmpAcquireLock(OmpAcquireLock),
    OmpReleaseLock(OmpReleaseLock),
    OmpTaskCreate(OmpTaskCreate),
    OmpTaskSwitch(OmpTaskSwitch),
    OmpTaskComplete(OmpTaskComplete),
    Metric(Metric),
    ParameterString(ParameterString),
    ParameterInt(ParameterInt),
    ParameterUnsignedInt(ParameterUnsignedInt),
    RmaWinCreate(RmaWinCreate),
    RmaWinDestroy(RmaWinDestroy),
    RmaCollectiveBegin,
    RmaCollectiveEnd(RmaCollectiveEnd),
    RmaGroupSync(RmaGroupSync),
    RmaRequestLock(RmaRequestLock),
    RmaAcquireLock(RmaAcquireLock),
    RmaTryLock(RmaTryLock),
    RmaReleaseLock(RmaReleaseLock),
    RmaSync(RmaSync),
    RmaWaitChange(RmaWaitChange),
    RmaPut(RmaPut),
    RmaGet(RmaGet),
    RmaAtomic(RmaAtomic),
    RmaOpCompleteBlocking(RmaOpCompleteBlocking),
    RmaOpCompleteNonBlocking(RmaOpCompleteNonBlocking),
    RmaOpTest(RmaOpTest),
    RmaOpCompleteRemote(RmaOpCompleteRemote),
    ThreadFork(ThreadFork),
    ThreadJoin(ThreadJoin),
    ThreadTeamBegin(ThreadTeamBegin),
    ThreadTeamEnd(ThreadTeamEnd),
    ThreadAcquireLock(ThreadAcquireLock),
    ThreadReleaseLock(ThreadReleaseLock),
    ThreadTaskCreate(ThreadTaskCreate),
    ThreadTaskSwitch(ThreadTaskSwitch),
    ThreadTaskComplete(ThreadTaskComplete),
    ThreadCreate(ThreadCreate),
    ThreadBegin(ThreadBegin),
    ThreadWait(ThreadWait),
    ThreadEnd(ThreadEnd),
    CallingContextEnter(CallingContextEnter),
    CallingContextLeave(CallingContextLeave),
    CallingContextSample(CallingContextSample),
    IoCreateHandle(IoCreateHandle),
    IoDestroyHandle(IoDestroyHandle),
    IoDuplicateHandle(IoDuplicateHandle),
    IoSeek(IoSeek),
    IoChangeStatusFlags(IoChangeStatusFlags),
    IoDeleteFile(IoDeleteFile),
    IoOperationBegin(IoOperationBegin),
    IoOperationTest(IoOperationTest),
    IoOperationIssued(IoOperationIssued),
    IoOperationCancelled(IoOperationCancelled),
    IoOperationComplete(IoOperationComplete),
    IoAcquireLock(IoAcquireLock),
    IoReleaseLock(IoReleaseLock),
    IoTryLock(IoTryLock),
    ProgramBegin(ProgramBegin),
    ProgramEnd(ProgramEnd),
}

impl EventRecord {
    /// The kind tag of a staged record; `None` for `Unknown`.
    pub fn kind(&self) -> Option<EventKind> {
        use EventRecord::*;
        Some(match self {
            Unknown => return None,
            BufferFlush(_) => EventKind::BufferFlush,
            MeasurementOnOff(_) => EventKind::MeasurementOnOff,
            Enter(_) => EventKind::Enter,
            Leave(_) => EventKind::Leave,
            MpiSend(_) => EventKind::MpiSend,
            MpiIsend(_) => EventKind::MpiIsend,
            MpiIsendComplete(_) => EventKind::MpiIsendComplete,
            MpiIrecvRequest(_) => EventKind::MpiIrecvRequest,
            MpiRecv(_) => EventKind::MpiRecv,
            MpiIrecv(_) => EventKind::MpiIrecv,
            MpiRequestTest(_) => EventKind::MpiRequestTest,
            MpiRequestCancelled(_) => EventKind::MpiRequestCancelled,
            MpiCollectiveBegin => EventKind::MpiCollectiveBegin,
            MpiCollectiveEnd(_) => EventKind::MpiCollectiveEnd,
            OmpFork(_) => EventKind::OmpFork,
            OmpJoin => EventKind::OmpJoin,
            OmpAcquireLock(_) => EventKind::OmpAcquireLock,
            OmpReleaseLock(_) => EventKind::OmpReleaseLock,
            OmpTaskCreate(_) => EventKind::OmpTaskCreate,
            OmpTaskSwitch(_) => EventKind::OmpTaskSwitch,
            OmpTaskComplete(_) => EventKind::OmpTaskComplete,
            Metric(_) => EventKind::Metric,
            ParameterString(_) => EventKind::ParameterString,
            ParameterInt(_) => EventKind::ParameterInt,
            ParameterUnsignedInt(_) => EventKind::ParameterUnsignedInt,
            RmaWinCreate(_) => EventKind::RmaWinCreate,
            RmaWinDestroy(_) => EventKind::RmaWinDestroy,
            RmaCollectiveBegin => EventKind::RmaCollectiveBegin,
            RmaCollectiveEnd(_) => EventKind::RmaCollectiveEnd,
            RmaGroupSync(_) => EventKind::RmaGroupSync,
            RmaRequestLock(_) => EventKind::RmaRequestLock,
            RmaAcquireLock(_) => EventKind::RmaAcquireLock,
            RmaTryLock(_) => EventKind::RmaTryLock,
            RmaReleaseLock(_) => EventKind::RmaReleaseLock,
            RmaSync(_) => EventKind::RmaSync,
            RmaWaitChange(_) => EventKind::RmaWaitChange,
            RmaPut(_) => EventKind::RmaPut,
            RmaGet(_) => EventKind::RmaGet,
            RmaAtomic(_) => EventKind::RmaAtomic,
            RmaOpCompleteBlocking(_) => EventKind::RmaOpCompleteBlocking,
            RmaOpCompleteNonBlocking(_) => EventKind::RmaOpCompleteNonBlocking,
            RmaOpTest(_) => EventKind::RmaOpTest,
            RmaOpCompleteRemote(_) => EventKind::RmaOpCompleteRemote,
            ThreadFork(_) => EventKind::ThreadFork,
            ThreadJoin(_) => EventKind::ThreadJoin,
            ThreadTeamBegin(_) => EventKind::ThreadTeamBegin,
            ThreadTeamEnd(_) => EventKind::ThreadTeamEnd,
            ThreadAcquireLock(_) => EventKind::ThreadAcquireLock,
            ThreadReleaseLock(_) => EventKind::ThreadReleaseLock,
            ThreadTaskCreate(_) => EventKind::ThreadTaskCreate,
            ThreadTaskSwitch(_) => EventKind::ThreadTaskSwitch,
            ThreadTaskComplete(_) => EventKind::ThreadTaskComplete,
            ThreadCreate(_) => EventKind::ThreadCreate,
            ThreadBegin(_) => EventKind::ThreadBegin,
            ThreadWait(_) => EventKind::ThreadWait,
            ThreadEnd(_) => EventKind::ThreadEnd,
            CallingContextEnter(_) => EventKind::CallingContextEnter,
            CallingContextLeave(_) => EventKind::CallingContextLeave,
            CallingContextSample(_) => EventKind::CallingContextSample,
            IoCreateHandle(_) => EventKind::IoCreateHandle,
            IoDestroyHandle(_) => EventKind::IoDestroyHandle,
            IoDuplicateHandle(_) => EventKind::IoDuplicateHandle,
            IoSeek(_) => EventKind::IoSeek,
            IoChangeStatusFlags(_) => EventKind::IoChangeStatusFlags,
            IoDeleteFile(_) => EventKind::IoDeleteFile,
            IoOperationBegin(_) => EventKind::IoOperationBegin,
            IoOperationTest(_) => EventKind::IoOperationTest,
            IoOperationIssued(_) => EventKind::IoOperationIssued,
            IoOperationCancelled(_) => EventKind::IoOperationCancelled,
            IoOperationComplete(_) => EventKind::IoOperationComplete,
            IoAcquireLock(_) => EventKind::IoAcquireLock,
            IoReleaseLock(_) => EventKind::IoReleaseLock,
            IoTryLock(_) => EventKind::IoTryLock,
            ProgramBegin(_) => EventKind::ProgramBegin,
            ProgramEnd(_) => EventKind::ProgramEnd,
        })
    }
}
