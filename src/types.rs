//! Reference-id aliases and small wire-level carrier types shared by the
//! event payload records.

use bitflags::bitflags;

/// Identifies a location (thread, process or hardware stream).
pub type LocationRef = u64;
pub type RegionRef = u32;
pub type MetricRef = u32;
pub type CommRef = u32;
pub type ParameterRef = u32;
pub type StringRef = u32;
pub type RmaWinRef = u32;
pub type GroupRef = u32;
pub type CallingContextRef = u32;
pub type InterruptGeneratorRef = u32;
pub type IoFileRef = u32;
pub type IoHandleRef = u32;
pub type AttributeRef = u32;

pub type TimeStamp = u64;

// Single-byte carriers. These stay plain bytes on the record structs; the
// constants below cover the values the reader itself needs to interpret.
pub type Paradigm = u8;
pub type CollectiveOp = u8;
pub type LockType = u8;
pub type MeasurementMode = u8;
pub type RmaSyncType = u8;
pub type RmaAtomicType = u8;
pub type IoParadigmRef = u8;
pub type IoAccessMode = u8;
pub type IoOperationMode = u8;
pub type IoSeekOption = u8;

pub mod paradigm {
    use super::Paradigm;

    pub const UNKNOWN: Paradigm = 0;
    pub const USER: Paradigm = 1;
    pub const COMPILER: Paradigm = 2;
    pub const OPENMP: Paradigm = 3;
    pub const MPI: Paradigm = 4;
    pub const PTHREAD: Paradigm = 5;
}

bitflags! {
    /// Flags given at I/O handle creation time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IoCreationFlags: u32 {
        const CREATE = 1 << 0;
        const TRUNCATE = 1 << 1;
        const DIRECTORY = 1 << 2;
        const EXCLUSIVE = 1 << 3;
        const NO_CONTROLLING_TERMINAL = 1 << 4;
        const NO_FOLLOW = 1 << 5;
        const PATH = 1 << 6;
        const TEMPORARY_FILE = 1 << 7;
        const LARGE_FILE = 1 << 8;
        const NO_SEEK = 1 << 9;
        const UNIQUE = 1 << 10;
    }

    /// Status flags of an open I/O handle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IoStatusFlags: u32 {
        const CLOSE_ON_EXEC = 1 << 0;
        const APPEND = 1 << 1;
        const NON_BLOCKING = 1 << 2;
        const ASYNC = 1 << 3;
        const SYNC = 1 << 4;
        const DATA_SYNC = 1 << 5;
        const AVOID_CACHING = 1 << 6;
        const NO_ACCESS_TIME = 1 << 7;
        const DELETE_ON_CLOSE = 1 << 8;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IoOperationFlags: u32 {
        const NON_BLOCKING = 1 << 0;
        const COLLECTIVE = 1 << 1;
    }

    /// Synchronization level of RMA sync/collective operations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RmaSyncLevel: u32 {
        const PROCESS = 1 << 0;
        const MEMORY = 1 << 1;
    }
}
