//! Per-location decoding context: id-mapping tables and the piecewise
//! clock-correction function. The surrounding application builds these
//! from the trace's definition data; the reader only consumes them.

use rustc_hash::FxHashMap;

/// The reference kinds whose event fields are rewritten from file-local
/// ids to globally meaningful ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    Region = 0,
    Metric,
    Comm,
    Parameter,
    String,
    RmaWin,
    Group,
    CallingContext,
    InterruptGenerator,
    IoFile,
    IoHandle,
}

pub const MAPPING_KIND_COUNT: usize = 11;

/// A file-local → global id function. Dense maps are plain lookup
/// vectors; sparse maps only carry the ids that actually change.
#[derive(Debug, Clone)]
pub enum IdMap {
    Dense(Vec<u64>),
    Sparse(FxHashMap<u64, u64>),
}

impl IdMap {
    pub fn global_id(&self, local_id: u64) -> Option<u64> {
        match self {
            IdMap::Dense(table) => table.get(local_id as usize).copied(),
            IdMap::Sparse(table) => table.get(&local_id).copied(),
        }
    }
}

/// One segment of the piecewise-linear timestamp correction: for a raw
/// timestamp `t` inside `[begin, end]` the corrected time is
/// `t + offset + round(slope * (t - begin))`.
#[derive(Debug, Clone, Copy)]
pub struct ClockInterval {
    pub begin: u64,
    pub end: u64,
    pub offset: i64,
    pub slope: f64,
}

pub trait LocationContext {
    /// The mapping table for a reference kind, or `None` for identity.
    fn mapping_table(&self, kind: MappingKind) -> Option<&IdMap>;

    /// Clock-correction intervals in ascending time order. Empty means no
    /// correction.
    fn clock_intervals(&self) -> &[ClockInterval];

    /// The source region a sampled calling context resolves to. Only used
    /// when lowering CallingContextEnter/Leave to Enter/Leave for
    /// consumers that registered the legacy callbacks.
    fn region_of_calling_context(&self, _calling_context: u32) -> Option<u32> {
        None
    }
}

/// Plain-data [`LocationContext`] implementation.
#[derive(Debug, Clone, Default)]
pub struct LocationData {
    mapping_tables: [Option<IdMap>; MAPPING_KIND_COUNT],
    clock_intervals: Vec<ClockInterval>,
    calling_context_regions: FxHashMap<u32, u32>,
}

impl LocationData {
    pub fn new() -> LocationData {
        LocationData::default()
    }

    pub fn set_mapping_table(&mut self, kind: MappingKind, map: IdMap) {
        self.mapping_tables[kind as usize] = Some(map);
    }

    pub fn set_clock_intervals(&mut self, intervals: Vec<ClockInterval>) {
        self.clock_intervals = intervals;
    }

    pub fn set_calling_context_region(&mut self, calling_context: u32, region: u32) {
        self.calling_context_regions
            .insert(calling_context, region);
    }
}

impl LocationContext for LocationData {
    fn mapping_table(&self, kind: MappingKind) -> Option<&IdMap> {
        self.mapping_tables[kind as usize].as_ref()
    }

    fn clock_intervals(&self) -> &[ClockInterval] {
        &self.clock_intervals
    }

    fn region_of_calling_context(&self, calling_context: u32) -> Option<u32> {
        self.calling_context_regions.get(&calling_context).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_and_sparse_lookup() {
        let dense = IdMap::Dense(vec![10, 11, 12]);
        assert_eq!(dense.global_id(1), Some(11));
        assert_eq!(dense.global_id(3), None);

        let mut table = FxHashMap::default();
        table.insert(7u64, 70u64);
        let sparse = IdMap::Sparse(table);
        assert_eq!(sparse.global_id(7), Some(70));
        assert_eq!(sparse.global_id(8), None);
    }
}
