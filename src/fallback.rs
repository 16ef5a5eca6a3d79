//! Lowering of newer event kinds to their legacy counterparts.
//!
//! Consumers written against the older event model may only register the
//! Omp* / Enter / Leave callbacks. When the preferred callback for one of
//! the six newer kinds is absent but the legacy one is present, the
//! record is converted and delivered through the legacy slot. A
//! conversion that does not apply (wrong threading model, unresolvable
//! calling context) fails silently: no callback, no error.

use crate::attribute_list::AttributeList;
use crate::events::*;
use crate::location::LocationContext;
use crate::types::paradigm;

pub(crate) fn thread_fork_to_omp_fork<L: LocationContext>(
    _context: &L,
    record: &ThreadFork,
    _attributes: &AttributeList,
) -> Option<OmpFork> {
    if record.model != paradigm::OPENMP {
        return None;
    }
    Some(OmpFork {
        number_of_requested_threads: record.number_of_requested_threads,
    })
}

pub(crate) fn thread_join_to_omp_join<L: LocationContext>(
    _context: &L,
    record: &ThreadJoin,
    _attributes: &AttributeList,
) -> bool {
    record.model == paradigm::OPENMP
}

pub(crate) fn thread_acquire_lock_to_omp<L: LocationContext>(
    _context: &L,
    record: &ThreadAcquireLock,
    _attributes: &AttributeList,
) -> Option<OmpAcquireLock> {
    if record.model != paradigm::OPENMP {
        return None;
    }
    Some(OmpAcquireLock {
        lock_id: record.lock_id,
        acquisition_order: record.acquisition_order,
    })
}

pub(crate) fn thread_release_lock_to_omp<L: LocationContext>(
    _context: &L,
    record: &ThreadReleaseLock,
    _attributes: &AttributeList,
) -> Option<OmpReleaseLock> {
    if record.model != paradigm::OPENMP {
        return None;
    }
    Some(OmpReleaseLock {
        lock_id: record.lock_id,
        acquisition_order: record.acquisition_order,
    })
}

pub(crate) fn calling_context_enter_to_enter<L: LocationContext>(
    context: &L,
    record: &CallingContextEnter,
    _attributes: &AttributeList,
) -> Option<Enter> {
    let region = context.region_of_calling_context(record.calling_context)?;
    Some(Enter { region })
}

pub(crate) fn calling_context_leave_to_leave<L: LocationContext>(
    context: &L,
    record: &CallingContextLeave,
    _attributes: &AttributeList,
) -> Option<Leave> {
    let region = context.region_of_calling_context(record.calling_context)?;
    Some(Leave { region })
}
