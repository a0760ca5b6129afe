//! Per-OS counter access that `sysinfo` does not expose in a unit shared by
//! process and host CPU time.

pub trait PlatformExtensions {
    /// Host-wide cumulative CPU time across all cores, including idle.
    fn system_cpu_ticks() -> Option<u64>;
    /// Cumulative kernel + user CPU time of `pid`, same unit as above.
    fn process_cpu_ticks(pid: u32) -> Option<u64>;
    fn process_thread_count(pid: u32) -> Option<u32>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn system_cpu_ticks() -> Option<u64> {
    platform_impl::Platform::system_cpu_ticks()
}

pub fn process_cpu_ticks(pid: u32) -> Option<u64> {
    platform_impl::Platform::process_cpu_ticks(pid)
}

pub fn process_thread_count(pid: u32) -> Option<u32> {
    platform_impl::Platform::process_thread_count(pid)
}
