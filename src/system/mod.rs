pub mod collector;
pub mod control;
pub mod metrics;
mod platform;
pub mod process;
pub mod snapshot;
#[cfg(test)]
pub(crate) mod testing;

use control::{KillResult, LaunchResult};
use snapshot::HostSnapshot;

/// Enumerates live processes together with their raw cumulative counters.
pub trait ProcessSource {
    fn snapshot(&mut self) -> HostSnapshot;
}

/// Side-effecting process actions. Outcomes are reported, never fatal.
pub trait ProcessControl {
    fn terminate(&mut self, pid: u32) -> KillResult;
    fn launch(&mut self, command: &str) -> LaunchResult;
}

/// Everything the app needs from the host.
pub trait Backend: ProcessSource + ProcessControl {}

impl<T: ProcessSource + ProcessControl> Backend for T {}
