use std::time::Instant;

use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::{debug, warn};

use super::control::{KillResult, LaunchResult, kill_process, launch_command};
use super::platform;
use super::process::{RawCounters, RawProcess};
use super::snapshot::{HostMemory, HostSnapshot};
use super::{ProcessControl, ProcessSource};

/// Where process and host CPU time are read from. Both readings of one
/// snapshot always come from the same clock.
#[derive(Debug, Clone, Copy)]
enum CpuClock {
    /// Kernel + user ticks from the OS, see `platform`.
    Native,
    /// sysinfo's accumulated CPU milliseconds against wall time times cores.
    Sysinfo { started: Instant },
}

pub struct Collector {
    sys: System,
    clock: CpuClock,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, Self::refresh_kind());

        let clock = if platform::system_cpu_ticks().is_some() {
            CpuClock::Native
        } else {
            debug!("native CPU tick counters unavailable, using sysinfo clock");
            CpuClock::Sysinfo {
                started: Instant::now(),
            }
        };

        Collector { sys, clock }
    }

    fn refresh_kind() -> ProcessRefreshKind {
        ProcessRefreshKind::nothing()
            .with_memory()
            .with_cpu()
            .with_disk_usage()
    }

    fn refresh(&mut self) {
        self.sys.refresh_memory();
        self.sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, Self::refresh_kind());
    }

    fn system_ticks(&self) -> Option<u64> {
        match self.clock {
            CpuClock::Native => platform::system_cpu_ticks(),
            CpuClock::Sysinfo { started } => {
                let cores = self.sys.cpus().len().max(1) as u64;
                Some(started.elapsed().as_millis() as u64 * cores)
            }
        }
    }

    fn counters_for(
        &self,
        pid: u32,
        process: &Process,
        system_ticks: Option<u64>,
    ) -> Option<RawCounters> {
        let system_ticks = system_ticks?;
        let process_ticks = match self.clock {
            CpuClock::Native => platform::process_cpu_ticks(pid)?,
            CpuClock::Sysinfo { .. } => process.accumulated_cpu_time(),
        };
        let usage = process.disk_usage();
        Some(RawCounters {
            process_ticks,
            system_ticks,
            io_bytes: usage.total_read_bytes + usage.total_written_bytes,
        })
    }

    fn build_snapshot(&self) -> HostSnapshot {
        let system_ticks = self.system_ticks();
        if system_ticks.is_none() {
            warn!("host CPU counters could not be read this cycle");
        }

        let mut processes = Vec::with_capacity(self.sys.processes().len());
        for (pid, process) in self.sys.processes() {
            // Userland threads are listed as processes on Linux.
            if process.thread_kind().is_some() {
                continue;
            }
            let pid_u32 = pid.as_u32();
            let thread_count = platform::process_thread_count(pid_u32)
                .or_else(|| process.tasks().map(|tasks| tasks.len() as u32))
                .unwrap_or(0);

            processes.push(RawProcess {
                pid: pid_u32,
                name: process.name().to_string_lossy().to_string(),
                thread_count,
                working_set_bytes: process.memory(),
                counters: self.counters_for(pid_u32, process, system_ticks),
            });
        }

        HostSnapshot {
            processes,
            memory: HostMemory {
                total: self.sys.total_memory(),
                available: self.sys.available_memory(),
                swap_total: self.sys.total_swap(),
                swap_free: self.sys.free_swap(),
            },
            uptime_secs: System::uptime(),
        }
    }
}

impl ProcessSource for Collector {
    fn snapshot(&mut self) -> HostSnapshot {
        self.refresh();
        self.build_snapshot()
    }
}

impl ProcessControl for Collector {
    fn terminate(&mut self, pid: u32) -> KillResult {
        let pids = [Pid::from_u32(pid)];
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&pids),
            true,
            ProcessRefreshKind::nothing(),
        );
        kill_process(&self.sys, pid)
    }

    fn launch(&mut self, command: &str) -> LaunchResult {
        launch_command(command)
    }
}
