use std::io::{self, ErrorKind};
use std::process::{Child, Command, Stdio};

use sysinfo::{Pid, Signal, System};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(u32),
    Failed(u32, String),
    NotFound(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchResult {
    Spawned(u32),
    Failed(String),
}

pub fn kill_process(sys: &System, pid: u32) -> KillResult {
    let sysinfo_pid = Pid::from_u32(pid);
    match sys.process(sysinfo_pid) {
        Some(process) => match process.kill_with(Signal::Kill) {
            Some(true) => KillResult::Success(pid),
            Some(false) => KillResult::Failed(pid, format!("Failed to terminate PID {pid}")),
            None => {
                // Signal not supported on this platform, fall back to kill()
                if process.kill() {
                    KillResult::Success(pid)
                } else {
                    KillResult::Failed(
                        pid,
                        format!("Failed to terminate PID {pid} (permission denied?)"),
                    )
                }
            }
        },
        None => KillResult::NotFound(pid),
    }
}

/// Starts `command` detached from the terminal. The whole text is tried as a
/// program path first; if nothing by that name exists, the first whitespace
/// token is the program and the remaining tokens are its arguments.
pub fn launch_command(command: &str) -> LaunchResult {
    let command = command.trim();
    if command.is_empty() {
        return LaunchResult::Failed("Nothing to run".to_string());
    }

    let mut program = command;
    let mut spawned = spawn_detached(command, &[]);
    if let Err(err) = &spawned
        && err.kind() == ErrorKind::NotFound
        && command.contains(char::is_whitespace)
    {
        let mut parts = command.split_whitespace();
        program = parts.next().unwrap_or(command);
        let args: Vec<&str> = parts.collect();
        spawned = spawn_detached(program, &args);
    }

    match spawned {
        Ok(mut child) => {
            let pid = child.id();
            // Exit status is untracked; the thread only reaps the child.
            std::thread::spawn(move || {
                let _ = child.wait();
            });
            LaunchResult::Spawned(pid)
        }
        Err(err) => LaunchResult::Failed(format!("Failed to run {program}: {err}")),
    }
}

fn spawn_detached(program: &str, args: &[&str]) -> io::Result<Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}
