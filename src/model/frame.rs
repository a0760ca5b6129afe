use super::filter::FilterQuery;
use super::sample::ProcessSample;
use super::sort::SortMode;

/// Upper bound shown for the summed CPU gauge.
pub const AGGREGATE_CPU_CAP: f64 = 100.0;

/// The filtered, ordered process list for one rendered frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameView {
    pub rows: Vec<ProcessSample>,
    pub total_count: usize,
    pub visible_count: usize,
    /// Sum of visible `cpu_percent`, capped at [`AGGREGATE_CPU_CAP`].
    pub aggregate_cpu: f64,
    pub aggregate_disk: f64,
}

impl FrameView {
    pub fn build(samples: &[ProcessSample], filter: &FilterQuery, sort: SortMode) -> Self {
        let mut rows: Vec<ProcessSample> = samples
            .iter()
            .filter(|s| filter.matches(&s.name))
            .cloned()
            .collect();

        sort_rows(&mut rows, sort);

        let cpu_sum: f64 = rows.iter().map(|s| s.cpu_percent).sum();
        let disk_sum: f64 = rows.iter().map(|s| s.disk_mbps).sum();

        FrameView {
            total_count: samples.len(),
            visible_count: rows.len(),
            aggregate_cpu: cpu_sum.min(AGGREGATE_CPU_CAP),
            aggregate_disk: disk_sum,
            rows,
        }
    }
}

pub fn sort_rows(rows: &mut [ProcessSample], sort: SortMode) {
    match sort {
        SortMode::ByRam => rows.sort_unstable_by(|a, b| b.working_set_mb.cmp(&a.working_set_mb)),
        SortMode::ByCpu => rows.sort_unstable_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent)),
        SortMode::ByDisk => rows.sort_unstable_by(|a, b| b.disk_mbps.total_cmp(&a.disk_mbps)),
        SortMode::ByPid => rows.sort_unstable_by_key(|s| s.pid),
    }
}
