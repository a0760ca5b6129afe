//! In-memory backend for app and UI tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::control::{KillResult, LaunchResult};
use super::process::{RawCounters, RawProcess};
use super::snapshot::{HostMemory, HostSnapshot};
use super::{ProcessControl, ProcessSource};

#[derive(Debug, Default)]
pub(crate) struct ActionLog {
    pub terminated: Vec<u32>,
    pub launched: Vec<String>,
}

/// Replays queued snapshots (repeating the last one) and records actions.
pub(crate) struct FakeBackend {
    queued: VecDeque<HostSnapshot>,
    current: HostSnapshot,
    log: Rc<RefCell<ActionLog>>,
}

impl FakeBackend {
    pub fn new(snapshots: Vec<HostSnapshot>) -> (Self, Rc<RefCell<ActionLog>>) {
        let log = Rc::new(RefCell::new(ActionLog::default()));
        let backend = FakeBackend {
            queued: snapshots.into(),
            current: HostSnapshot::default(),
            log: Rc::clone(&log),
        };
        (backend, log)
    }
}

impl ProcessSource for FakeBackend {
    fn snapshot(&mut self) -> HostSnapshot {
        if let Some(next) = self.queued.pop_front() {
            self.current = next;
        }
        self.current.clone()
    }
}

impl ProcessControl for FakeBackend {
    fn terminate(&mut self, pid: u32) -> KillResult {
        self.log.borrow_mut().terminated.push(pid);
        if self.current.processes.iter().any(|p| p.pid == pid) {
            KillResult::Success(pid)
        } else {
            KillResult::NotFound(pid)
        }
    }

    fn launch(&mut self, command: &str) -> LaunchResult {
        self.log.borrow_mut().launched.push(command.to_string());
        LaunchResult::Spawned(4242)
    }
}

pub(crate) fn raw_process(pid: u32, name: &str, mem_mb: u64, counters: RawCounters) -> RawProcess {
    RawProcess {
        pid,
        name: name.to_string(),
        thread_count: 2,
        working_set_bytes: mem_mb * 1024 * 1024,
        counters: Some(counters),
    }
}

pub(crate) fn counters(process_ticks: u64, system_ticks: u64, io_bytes: u64) -> RawCounters {
    RawCounters {
        process_ticks,
        system_ticks,
        io_bytes,
    }
}

pub(crate) fn host_snapshot(processes: Vec<RawProcess>) -> HostSnapshot {
    HostSnapshot {
        processes,
        memory: HostMemory {
            total: 16 * 1024 * 1024 * 1024,
            available: 8 * 1024 * 1024 * 1024,
            swap_total: 4 * 1024 * 1024 * 1024,
            swap_free: 3 * 1024 * 1024 * 1024,
        },
        uptime_secs: 93_784,
    }
}
