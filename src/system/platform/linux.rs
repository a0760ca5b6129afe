use super::PlatformExtensions;

pub struct Platform;

// Fields after comm in /proc/{pid}/stat:
// state(0) ppid(1) pgrp(2) session(3) tty_nr(4) tpgid(5) flags(6)
// minflt(7) cminflt(8) majflt(9) cmajflt(10) utime(11) stime(12)
// cutime(13) cstime(14) priority(15) nice(16) num_threads(17)
const UTIME: usize = 11;
const STIME: usize = 12;
const NUM_THREADS: usize = 17;

fn stat_fields(pid: u32) -> Option<Vec<String>> {
    let contents = std::fs::read_to_string(format!("/proc/{pid}/stat")).ok()?;
    // comm may contain spaces and parens, so split after the last )
    let after_comm = contents.rfind(')')? + 1;
    Some(
        contents[after_comm..]
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    )
}

impl PlatformExtensions for Platform {
    fn system_cpu_ticks() -> Option<u64> {
        let contents = std::fs::read_to_string("/proc/stat").ok()?;
        let line = contents.lines().find(|l| l.starts_with("cpu "))?;
        // user nice system idle iowait irq softirq steal, in USER_HZ ticks
        line.split_whitespace()
            .skip(1)
            .take(8)
            .map(|v| v.parse::<u64>().ok())
            .sum()
    }

    fn process_cpu_ticks(pid: u32) -> Option<u64> {
        let fields = stat_fields(pid)?;
        let utime: u64 = fields.get(UTIME)?.parse().ok()?;
        let stime: u64 = fields.get(STIME)?.parse().ok()?;
        Some(utime + stime)
    }

    fn process_thread_count(pid: u32) -> Option<u32> {
        stat_fields(pid)?.get(NUM_THREADS)?.parse().ok()
    }
}
