use thiserror::Error;

/// The error type used in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("Memory could not be obtained from the block allocator or the system")]
    MemoryExhausted,

    #[error("The reader state is corrupted")]
    IntegrityFault,

    #[error("Invalid argument")]
    InvalidArgument,

    /// End of the event stream, or a position past its end. The global
    /// reader recovers from this by retiring the affected location.
    #[error("Index out of bounds")]
    IndexOutOfBounds,

    /// A consumer callback asked to stop. The event that triggered the
    /// interrupt has been delivered and is counted.
    #[error("Reading was interrupted by a callback")]
    InterruptedByCallback,

    /// Soft corruption: the record could be traversed but parts of its
    /// payload were not understood.
    #[error("Record processed with faults")]
    ProcessedWithFaults,

    /// Placeholder for paths that have not produced a result yet. Should
    /// never escape to callers.
    #[error("Invalid error code")]
    Invalid,
}

pub type Result<T> = std::result::Result<T, Error>;
