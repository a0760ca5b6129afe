/// Cumulative counters read for one process at one point in time.
///
/// `process_ticks` and `system_ticks` are always in the same unit, so only
/// their deltas are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawCounters {
    pub process_ticks: u64,
    pub system_ticks: u64,
    pub io_bytes: u64,
}

/// One enumerated process before metrics are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawProcess {
    pub pid: u32,
    pub name: String,
    pub thread_count: u32,
    pub working_set_bytes: u64,
    /// `None` when the process could not be queried (gone, or access denied).
    pub counters: Option<RawCounters>,
}
