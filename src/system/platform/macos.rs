use libproc::libproc::proc_pid::pidinfo;
use libproc::libproc::task_info::TaskInfo;

use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    // Host CPU time is not readable without mach host calls; the collector
    // falls back to its own clock when this is None.
    fn system_cpu_ticks() -> Option<u64> {
        None
    }

    fn process_cpu_ticks(_pid: u32) -> Option<u64> {
        None
    }

    fn process_thread_count(pid: u32) -> Option<u32> {
        let info = pidinfo::<TaskInfo>(pid as i32, 0).ok()?;
        u32::try_from(info.pti_threadnum).ok()
    }
}
