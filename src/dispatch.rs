//! Delivery of a staged event through a callback table.
//!
//! Both reader flavors funnel through [`deliver_event`]; the context type
//! parameter is the only difference between them. An absent slot means
//! the event is silently not delivered, except for the six kinds with a
//! legacy lowering (see [`fallback`](crate::fallback)).

use crate::attribute_list::AttributeList;
use crate::callbacks::{CallbackControl, EventCallbacks};
use crate::events::EventRecord;
use crate::fallback;
use crate::location::LocationContext;

pub(crate) fn deliver_event<U, C, L>(
    callbacks: &EventCallbacks<U, C>,
    user_data: &mut U,
    context: C,
    attributes: &AttributeList,
    event: &EventRecord,
    location_context: &L,
) -> CallbackControl
where
    L: LocationContext,
{
    macro_rules! invoke {
        ($slot:ident) => {
            match callbacks.$slot {
                Some(callback) => callback(user_data, context, attributes),
                None => CallbackControl::Continue,
            }
        };
        ($slot:ident, $record:expr) => {
            match callbacks.$slot {
                Some(callback) => callback(user_data, context, attributes, $record),
                None => CallbackControl::Continue,
            }
        };
    }

    match event {
        EventRecord::Unknown => invoke!(unknown),
        EventRecord::BufferFlush(record) => invoke!(buffer_flush, record),
        EventRecord::MeasurementOnOff(record) => invoke!(measurement_on_off, record),
        EventRecord::Enter(record) => invoke!(enter, record),
        EventRecord::Leave(record) => invoke!(leave, record),
        EventRecord::MpiSend(record) => invoke!(mpi_send, record),
        EventRecord::MpiIsend(record) => invoke!(mpi_isend, record),
        EventRecord::MpiIsendComplete(record) => invoke!(mpi_isend_complete, record),
        EventRecord::MpiIrecvRequest(record) => invoke!(mpi_irecv_request, record),
        EventRecord::MpiRecv(record) => invoke!(mpi_recv, record),
        EventRecord::MpiIrecv(record) => invoke!(mpi_irecv, record),
        EventRecord::MpiRequestTest(record) => invoke!(mpi_request_test, record),
        EventRecord::MpiRequestCancelled(record) => invoke!(mpi_request_cancelled, record),
        EventRecord::MpiCollectiveBegin => invoke!(mpi_collective_begin),
        EventRecord::MpiCollectiveEnd(record) => invoke!(mpi_collective_end, record),
        EventRecord::OmpFork(record) => invoke!(omp_fork, record),
        EventRecord::OmpJoin => invoke!(omp_join),
        EventRecord::OmpAcquireLock(record) => invoke!(omp_acquire_lock, record),
        EventRecord::OmpReleaseLock(record) => invoke!(omp_release_lock, record),
        EventRecord::OmpTaskCreate(record) => invoke!(omp_task_create, record),
        EventRecord::OmpTaskSwitch(record) => invoke!(omp_task_switch, record),
        EventRecord::OmpTaskComplete(record) => invoke!(omp_task_complete, record),
        EventRecord::Metric(record) => invoke!(metric, record),
        EventRecord::ParameterString(record) => invoke!(parameter_string, record),
        EventRecord::ParameterInt(record) => invoke!(parameter_int, record),
        EventRecord::ParameterUnsignedInt(record) => invoke!(parameter_unsigned_int, record),
        EventRecord::RmaWinCreate(record) => invoke!(rma_win_create, record),
        EventRecord::RmaWinDestroy(record) => invoke!(rma_win_destroy, record),
        EventRecord::RmaCollectiveBegin => invoke!(rma_collective_begin),
        EventRecord::RmaCollectiveEnd(record) => invoke!(rma_collective_end, record),
        EventRecord::RmaGroupSync(record) => invoke!(rma_group_sync, record),
        EventRecord::RmaRequestLock(record) => invoke!(rma_request_lock, record),
        EventRecord::RmaAcquireLock(record) => invoke!(rma_acquire_lock, record),
        EventRecord::RmaTryLock(record) => invoke!(rma_try_lock, record),
        EventRecord::RmaReleaseLock(record) => invoke!(rma_release_lock, record),
        EventRecord::RmaSync(record) => invoke!(rma_sync, record),
        EventRecord::RmaWaitChange(record) => invoke!(rma_wait_change, record),
        EventRecord::RmaPut(record) => invoke!(rma_put, record),
        EventRecord::RmaGet(record) => invoke!(rma_get, record),
        EventRecord::RmaAtomic(record) => invoke!(rma_atomic, record),
        EventRecord::RmaOpCompleteBlocking(record) => invoke!(rma_op_complete_blocking, record),
        EventRecord::RmaOpCompleteNonBlocking(record) => {
            invoke!(rma_op_complete_non_blocking, record)
        }
        EventRecord::RmaOpTest(record) => invoke!(rma_op_test, record),
        EventRecord::RmaOpCompleteRemote(record) => invoke!(rma_op_complete_remote, record),

        EventRecord::ThreadFork(record) => match callbacks.thread_fork {
            Some(callback) => callback(user_data, context, attributes, record),
            None => match callbacks.omp_fork {
                Some(callback) => {
                    match fallback::thread_fork_to_omp_fork(location_context, record, attributes) {
                        Some(lowered) => callback(user_data, context, attributes, &lowered),
                        None => CallbackControl::Continue,
                    }
                }
                None => CallbackControl::Continue,
            },
        },
        EventRecord::ThreadJoin(record) => match callbacks.thread_join {
            Some(callback) => callback(user_data, context, attributes, record),
            None => match callbacks.omp_join {
                Some(callback)
                    if fallback::thread_join_to_omp_join(location_context, record, attributes) =>
                {
                    callback(user_data, context, attributes)
                }
                _ => CallbackControl::Continue,
            },
        },
        EventRecord::ThreadTeamBegin(record) => invoke!(thread_team_begin, record),
        EventRecord::ThreadTeamEnd(record) => invoke!(thread_team_end, record),
        EventRecord::ThreadAcquireLock(record) => match callbacks.thread_acquire_lock {
            Some(callback) => callback(user_data, context, attributes, record),
            None => match callbacks.omp_acquire_lock {
                Some(callback) => {
                    match fallback::thread_acquire_lock_to_omp(location_context, record, attributes)
                    {
                        Some(lowered) => callback(user_data, context, attributes, &lowered),
                        None => CallbackControl::Continue,
                    }
                }
                None => CallbackControl::Continue,
            },
        },
        EventRecord::ThreadReleaseLock(record) => match callbacks.thread_release_lock {
            Some(callback) => callback(user_data, context, attributes, record),
            None => match callbacks.omp_release_lock {
                Some(callback) => {
                    match fallback::thread_release_lock_to_omp(location_context, record, attributes)
                    {
                        Some(lowered) => callback(user_data, context, attributes, &lowered),
                        None => CallbackControl::Continue,
                    }
                }
                None => CallbackControl::Continue,
            },
        },
        EventRecord::ThreadTaskCreate(record) => invoke!(thread_task_create, record),
        EventRecord::ThreadTaskSwitch(record) => invoke!(thread_task_switch, record),
        EventRecord::ThreadTaskComplete(record) => invoke!(thread_task_complete, record),
        EventRecord::ThreadCreate(record) => invoke!(thread_create, record),
        EventRecord::ThreadBegin(record) => invoke!(thread_begin, record),
        EventRecord::ThreadWait(record) => invoke!(thread_wait, record),
        EventRecord::ThreadEnd(record) => invoke!(thread_end, record),

        EventRecord::CallingContextEnter(record) => match callbacks.calling_context_enter {
            Some(callback) => callback(user_data, context, attributes, record),
            None => match callbacks.enter {
                Some(callback) => {
                    match fallback::calling_context_enter_to_enter(
                        location_context,
                        record,
                        attributes,
                    ) {
                        Some(lowered) => callback(user_data, context, attributes, &lowered),
                        None => CallbackControl::Continue,
                    }
                }
                None => CallbackControl::Continue,
            },
        },
        EventRecord::CallingContextLeave(record) => match callbacks.calling_context_leave {
            Some(callback) => callback(user_data, context, attributes, record),
            None => match callbacks.leave {
                Some(callback) => {
                    match fallback::calling_context_leave_to_leave(
                        location_context,
                        record,
                        attributes,
                    ) {
                        Some(lowered) => callback(user_data, context, attributes, &lowered),
                        None => CallbackControl::Continue,
                    }
                }
                None => CallbackControl::Continue,
            },
        },
        EventRecord::CallingContextSample(record) => invoke!(calling_context_sample, record),

        EventRecord::IoCreateHandle(record) => invoke!(io_create_handle, record),
        EventRecord::IoDestroyHandle(record) => invoke!(io_destroy_handle, record),
        EventRecord::IoDuplicateHandle(record) => invoke!(io_duplicate_handle, record),
        EventRecord::IoSeek(record) => invoke!(io_seek, record),
        EventRecord::IoChangeStatusFlags(record) => invoke!(io_change_status_flags, record),
        EventRecord::IoDeleteFile(record) => invoke!(io_delete_file, record),
        EventRecord::IoOperationBegin(record) => invoke!(io_operation_begin, record),
        EventRecord::IoOperationTest(record) => invoke!(io_operation_test, record),
        EventRecord::IoOperationIssued(record) => invoke!(io_operation_issued, record),
        EventRecord::IoOperationComplete(record) => invoke!(io_operation_complete, record),
        EventRecord::IoOperationCancelled(record) => invoke!(io_operation_cancelled, record),
        EventRecord::IoAcquireLock(record) => invoke!(io_acquire_lock, record),
        EventRecord::IoReleaseLock(record) => invoke!(io_release_lock, record),
        EventRecord::IoTryLock(record) => invoke!(io_try_lock, record),
        EventRecord::ProgramBegin(record) => invoke!(program_begin, record),
        EventRecord::ProgramEnd(record) => invoke!(program_end, record),
    }
}
