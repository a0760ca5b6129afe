use super::PlatformExtensions;

pub struct Platform;

#[cfg(target_os = "windows")]
use windows_sys::Win32::{
    Foundation::{CloseHandle, FILETIME},
    System::Threading::{
        GetProcessTimes, GetSystemTimes, OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
    },
};

#[cfg(target_os = "windows")]
fn filetime_ticks(ft: FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}

impl PlatformExtensions for Platform {
    // Kernel time reported by GetSystemTimes already includes idle time.
    #[cfg(target_os = "windows")]
    fn system_cpu_ticks() -> Option<u64> {
        unsafe {
            let mut idle = std::mem::zeroed::<FILETIME>();
            let mut kernel = std::mem::zeroed::<FILETIME>();
            let mut user = std::mem::zeroed::<FILETIME>();
            if GetSystemTimes(&mut idle, &mut kernel, &mut user) == 0 {
                return None;
            }
            Some(filetime_ticks(kernel) + filetime_ticks(user))
        }
    }

    #[cfg(not(target_os = "windows"))]
    fn system_cpu_ticks() -> Option<u64> {
        None
    }

    #[cfg(target_os = "windows")]
    fn process_cpu_ticks(pid: u32) -> Option<u64> {
        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
            if handle.is_null() {
                return None;
            }
            let mut creation = std::mem::zeroed::<FILETIME>();
            let mut exit = std::mem::zeroed::<FILETIME>();
            let mut kernel = std::mem::zeroed::<FILETIME>();
            let mut user = std::mem::zeroed::<FILETIME>();
            let ok = GetProcessTimes(handle, &mut creation, &mut exit, &mut kernel, &mut user);
            CloseHandle(handle);
            if ok == 0 {
                return None;
            }
            Some(filetime_ticks(kernel) + filetime_ticks(user))
        }
    }

    #[cfg(not(target_os = "windows"))]
    fn process_cpu_ticks(_pid: u32) -> Option<u64> {
        None
    }

    // Left to the collector's sysinfo fallback.
    fn process_thread_count(_pid: u32) -> Option<u32> {
        None
    }
}
