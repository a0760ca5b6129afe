/// One row of the process table, rebuilt on every poll.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub thread_count: u32,
    pub working_set_mb: u64,
    pub cpu_percent: f64,
    pub disk_mbps: f64,
}
