use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::process::{RawCounters, RawProcess};
use crate::model::ProcessSample;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_MB_INT: u64 = 1024 * 1024;

/// Multiplier applied to the per-poll I/O delta in MB.
///
/// The poll interval is not divided out, so the result is only a rough,
/// interval-coupled throughput estimate.
pub const DISK_SCALING_FACTOR: f64 = 2.5;

/// Counters remembered from the previous observation of a pid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub last_process_ticks: u64,
    pub last_system_ticks: u64,
    pub last_io_bytes: u64,
}

impl From<RawCounters> for HistoryEntry {
    fn from(counters: RawCounters) -> Self {
        Self {
            last_process_ticks: counters.process_ticks,
            last_system_ticks: counters.system_ticks,
            last_io_bytes: counters.io_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    pub cpu_percent: f64,
    pub disk_mbps: f64,
}

/// Derives CPU and disk rates from successive cumulative counter readings.
#[derive(Debug, Default)]
pub struct MetricEngine {
    entries: HashMap<u32, HistoryEntry>,
}

impl MetricEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns zero rates on the first observation of `pid`, otherwise rates
    /// from the delta against the stored entry. Always stores `counters`.
    pub fn compute(&mut self, pid: u32, counters: RawCounters) -> Rates {
        let Some(previous) = self.entries.insert(pid, HistoryEntry::from(counters)) else {
            return Rates::default();
        };

        // Counters running backwards mean the pid was reused; treat as idle.
        let process_delta = counters
            .process_ticks
            .saturating_sub(previous.last_process_ticks);
        let system_delta = counters
            .system_ticks
            .saturating_sub(previous.last_system_ticks);
        let io_delta = counters.io_bytes.saturating_sub(previous.last_io_bytes);

        let cpu_percent = if system_delta > 0 {
            100.0 * process_delta as f64 / system_delta as f64
        } else {
            0.0
        };
        let disk_mbps = (io_delta as f64 / BYTES_PER_MB) * DISK_SCALING_FACTOR;

        Rates {
            cpu_percent,
            disk_mbps,
        }
    }

    /// Turns one enumeration pass into table rows and drops history for
    /// pids that are no longer present.
    pub fn sample_all(&mut self, processes: &[RawProcess]) -> Vec<ProcessSample> {
        let samples: Vec<ProcessSample> = processes
            .iter()
            .map(|raw| {
                let rates = raw
                    .counters
                    .map(|counters| self.compute(raw.pid, counters))
                    .unwrap_or_default();
                ProcessSample {
                    pid: raw.pid,
                    name: raw.name.clone(),
                    thread_count: raw.thread_count,
                    working_set_mb: raw.working_set_bytes / BYTES_PER_MB_INT,
                    cpu_percent: rates.cpu_percent,
                    disk_mbps: rates.disk_mbps,
                }
            })
            .collect();

        let alive: HashSet<u32> = processes.iter().map(|p| p.pid).collect();
        let evicted = self.evict_missing(&alive);
        if evicted > 0 {
            debug!(evicted, tracked = self.entries.len(), "evicted history for exited pids");
        }

        samples
    }

    /// Removes entries whose pid is not in `alive`. Returns how many went.
    pub fn evict_missing(&mut self, alive: &HashSet<u32>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|pid, _| alive.contains(pid));
        before - self.entries.len()
    }

    pub fn get(&self, pid: u32) -> Option<&HistoryEntry> {
        self.entries.get(&pid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
