//! Consumer callback registration.
//!
//! A callback table has one slot per event kind plus a generic `unknown`
//! slot. Registration is last-writer-wins; a kind without a registered
//! slot is still decoded (positions advance, the attribute list is
//! cleared) but not delivered, which gives consumers rudimentary
//! filtering for free.
//!
//! The same table shape serves both reader flavors: local readers invoke
//! slots with an [`EventContext`] (which carries the global event
//! position), the global reader with a [`GlobalEventContext`].

use crate::attribute_list::AttributeList;
use crate::events::*;
use crate::types::{LocationRef, TimeStamp};

/// Return value of consumer callbacks: carry on, or stop the read loop
/// after this event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackControl {
    Continue,
    Interrupt,
}

#[derive(Debug, Clone, Copy)]
pub struct EventContext {
    pub location: LocationRef,
    pub time: TimeStamp,
    /// 1-based global index of the delivered event on its location.
    pub event_position: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct GlobalEventContext {
    pub location: LocationRef,
    pub time: TimeStamp,
}

/// Callback taking an event payload.
pub type EventCallback<U, C, T> = fn(&mut U, C, &AttributeList, &T) -> CallbackControl;

/// Callback for kinds without payload, and for `unknown`.
pub type PlainEventCallback<U, C> = fn(&mut U, C, &AttributeList) -> CallbackControl;

pub struct EventCallbacks<U, C> {
    pub unknown: Option<PlainEventCallback<U, C>>,
    pub buffer_flush: Option<EventCallback<U, C, BufferFlush>>,
    pub measurement_on_off: Option<EventCallback<U, C, MeasurementOnOff>>,
    pub enter: Option<EventCallback<U, C, Enter>>,
    pub leave: Option<EventCallback<U, C, Leave>>,
    pub mpi_send: Option<EventCallback<U, C, MpiSend>>,
    pub mpi_isend: Option<EventCallback<U, C, MpiIsend>>,
    pub mpi_isend_complete: Option<EventCallback<U, C, MpiIsendComplete>>,
    pub mpi_irecv_request: Option<EventCallback<U, C, MpiIrecvRequest>>,
    pub mpi_recv: Option<EventCallback<U, C, MpiRecv>>,
    pub mpi_irecv: Option<EventCallback<U, C, MpiIrecv>>,
    pub mpi_request_test: Option<EventCallback<U, C, MpiRequestTest>>,
    pub mpi_request_cancelled: Option<EventCallback<U, C, MpiRequestCancelled>>,
    pub mpi_collective_begin: Option<PlainEventCallback<U, C>>,
    pub mpi_collective_end: Option<EventCallback<U, C, MpiCollectiveEnd>>,
    pub omp_fork: Option<EventCallback<U, C, OmpFork>>,
    pub omp_join: Option<PlainEventCallback<U, C>>,
    pub omp_acquire_lock: Option<EventCallback<U, C, OmpAcquireLock>>,
    pub omp_release_lock: Option<EventCallback<U, C, OmpReleaseLock>>,
    pub omp_task_create: Option<EventCallback<U, C, OmpTaskCreate>>,
    pub omp_task_switch: Option<EventCallback<U, C, OmpTaskSwitch>>,
    pub omp_task_complete: Option<EventCallback<U, C, OmpTaskComplete>>,
    pub metric: Option<EventCallback<U, C, Metric>>,
    pub parameter_string: Option<EventCallback<U, C, ParameterString>>,
    pub parameter_int: Option<EventCallback<U, C, ParameterInt>>,
    pub parameter_unsigned_int: Option<EventCallback<U, C, ParameterUnsignedInt>>,
    pub rma_win_create: Option<EventCallback<U, C, RmaWinCreate>>,
    pub rma_win_destroy: Option<EventCallback<U, C, RmaWinDestroy>>,
    pub rma_collective_begin: Option<PlainEventCallback<U, C>>,
    pub rma_collective_end: Option<EventCallback<U, C, RmaCollectiveEnd>>,
    pub rma_group_sync: Option<EventCallback<U, C, RmaGroupSync>>,
    pub rma_request_lock: Option<EventCallback<U, C, RmaRequestLock>>,
    pub rma_acquire_lock: Option<EventCallback<U, C, RmaAcquireLock>>,
    pub rma_try_lock: Option<EventCallback<U, C, RmaTryLock>>,
    pub rma_release_lock: Option<EventCallback<U, C, RmaReleaseLock>>,
    pub rma_sync: Option<EventCallback<U, C, RmaSync>>,
    pub rma_wait_change: Option<EventCallback<U, C, RmaWaitChange>>,
    pub rma_put: Option<EventCallback<U, C, RmaPut>>,
    pub rma_get: Option<EventCallback<U, C, RmaGet>>,
    pub rma_atomic: Option<EventCallback<U, C, RmaAtomic>>,
    pub rma_op_complete_blocking: Option<EventCallback<U, C, RmaOpCompleteBlocking>>,
    pub rma_op_complete_non_blocking: Option<EventCallback<U, C, RmaOpCompleteNonBlocking>>,
    pub rma_op_test: Option<EventCallback<U, C, RmaOpTest>>,
    pub rma_op_complete_remote: Option<EventCallback<U, C, RmaOpCompleteRemote>>,
    pub thread_fork: Option<EventCallback<U, C, ThreadFork>>,
    pub thread_join: Option<EventCallback<U, C, ThreadJoin>>,
    pub thread_team_begin: Option<EventCallback<U, C, ThreadTeamBegin>>,
    pub thread_team_end: Option<EventCallback<U, C, ThreadTeamEnd>>,
    pub thread_acquire_lock: Option<EventCallback<U, C, ThreadAcquireLock>>,
    pub thread_release_lock: Option<EventCallback<U, C, ThreadReleaseLock>>,
    pub thread_task_create: Option<EventCallback<U, C, ThreadTaskCreate>>,
    pub thread_task_switch: Option<EventCallback<U, C, ThreadTaskSwitch>>,
    pub thread_task_complete: Option<EventCallback<U, C, ThreadTaskComplete>>,
    pub thread_create: Option<EventCallback<U, C, ThreadCreate>>,
    pub thread_begin: Option<EventCallback<U, C, ThreadBegin>>,
    pub thread_wait: Option<EventCallback<U, C, ThreadWait>>,
    pub thread_end: Option<EventCallback<U, C, ThreadEnd>>,
    pub calling_context_enter: Option<EventCallback<U, C, CallingContextEnter>>,
    pub calling_context_leave: Option<EventCallback<U, C, CallingContextLeave>>,
    pub calling_context_sample: Option<EventCallback<U, C, CallingContextSample>>,
    pub io_create_handle: Option<EventCallback<U, C, IoCreateHandle>>,
    pub io_destroy_handle: Option<EventCallback<U, C, IoDestroyHandle>>,
    pub io_duplicate_handle: Option<EventCallback<U, C, IoDuplicateHandle>>,
    pub io_seek: Option<EventCallback<U, C, IoSeek>>,
    pub io_change_status_flags: Option<EventCallback<U, C, IoChangeStatusFlags>>,
    pub io_delete_file: Option<EventCallback<U, C, IoDeleteFile>>,
    pub io_operation_begin: Option<EventCallback<U, C, IoOperationBegin>>,
    pub io_operation_test: Option<EventCallback<U, C, IoOperationTest>>,
    pub io_operation_issued: Option<EventCallback<U, C, IoOperationIssued>>,
    pub io_operation_complete: Option<EventCallback<U, C, IoOperationComplete>>,
    pub io_operation_cancelled: Option<EventCallback<U, C, IoOperationCancelled>>,
    pub io_acquire_lock: Option<EventCallback<U, C, IoAcquireLock>>,
    pub io_release_lock: Option<EventCallback<U, C, IoReleaseLock>>,
    pub io_try_lock: Option<EventCallback<U, C, IoTryLock>>,
    pub program_begin: Option<EventCallback<U, C, ProgramBegin>>,
    pub program_end: Option<EventCallback<U, C, ProgramEnd>>,
}

/// Callback table of a local [`EventReader`](crate::EventReader).
pub type ReaderCallbacks<U> = EventCallbacks<U, EventContext>;

/// Callback table of the [`GlobalEventReader`](crate::GlobalEventReader).
pub type GlobalReaderCallbacks<U> = EventCallbacks<U, GlobalEventContext>;

impl<U, C> EventCallbacks<U, C> {
    pub fn new() -> EventCallbacks<U, C> {
        EventCallbacks {
            unknown: None,
            buffer_flush: None,
            measurement_on_off: None,
            enter: None,
            leave: None,
            mpi_send: None,
            mpi_isend: None,
            mpi_isend_complete: None,
            mpi_irecv_request: None,
            mpi_recv: None,
            mpi_irecv: None,
            mpi_request_test: None,
            mpi_request_cancelled: None,
            mpi_collective_begin: None,
            mpi_collective_end: None,
            omp_fork: None,
            omp_join: None,
            omp_acquire_lock: None,
            omp_release_lock: None,
            omp_task_create: None,
            omp_task_switch: None,
            omp_task_complete: None,
            metric: None,
            parameter_string: None,
            parameter_int: None,
            parameter_unsigned_int: None,
            rma_win_create: None,
            rma_win_destroy: None,
            rma_collective_begin: None,
            rma_collective_end: None,
            rma_group_sync: None,
            rma_request_lock: None,
            rma_acquire_lock: None,
            rma_try_lock: None,
            rma_release_lock: None,
            rma_sync: None,
            rma_wait_change: None,
            rma_put: None,
            rma_get: None,
            rma_atomic: None,
            rma_op_complete_blocking: None,
            rma_op_complete_non_blocking: None,
            rma_op_test: None,
            rma_op_complete_remote: None,
            thread_fork: None,
            thread_join: None,
            thread_team_begin: None,
            thread_team_end: None,
            thread_acquire_lock: None,
            thread_release_lock: None,
            thread_task_create: None,
            thread_task_switch: None,
            thread_task_complete: None,
            thread_create: None,
            thread_begin: None,
            thread_wait: None,
            thread_end: None,
            calling_context_enter: None,
            calling_context_leave: None,
            calling_context_sample: None,
            io_create_handle: None,
            io_destroy_handle: None,
            io_duplicate_handle: None,
            io_seek: None,
            io_change_status_flags: None,
            io_delete_file: None,
            io_operation_begin: None,
            io_operation_test: None,
            io_operation_issued: None,
            io_operation_complete: None,
            io_operation_cancelled: None,
            io_acquire_lock: None,
            io_release_lock: None,
            io_try_lock: None,
            program_begin: None,
            program_end: None,
        }
    }
}

impl<U, C> Default for EventCallbacks<U, C> {
    fn default() -> Self {
        EventCallbacks::new()
    }
}

// Function pointers are copyable regardless of the user-data type, so a
// derive (which would bound `U: Clone`) is not usable here.
impl<U, C> Clone for EventCallbacks<U, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, C> Copy for EventCallbacks<U, C> {}
