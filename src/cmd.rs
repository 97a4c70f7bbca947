use crate::errors::PackModError;

/// Extract the return status from a subprocess result.
pub fn status(result: subprocess::Result<subprocess::ExitStatus>) -> i32 {
    let mut exit_status: i32 = 1;
    if let Ok(status_result) = result {
        match status_result {
            subprocess::ExitStatus::Exited(status) => {
                exit_status = status as i32;
            }
            subprocess::ExitStatus::Signaled(status) => {
                exit_status = status as i32;
            }
            subprocess::ExitStatus::Other(status) => {
                exit_status = status;
            }
            _ => (),
        }
    }
    exit_status
}

/// Return a `subprocess::Exec` for a command vector.
pub fn exec_cmd<S>(command: &[S]) -> subprocess::Exec
where
    S: AsRef<std::ffi::OsStr>,
{
    subprocess::Exec::cmd(&command[0]).args(&command[1..])
}

/// Return a `subprocess::Exec` that runs a command in the specified directory.
pub fn exec_in_dir<P, S>(command: &[S], path: P) -> subprocess::Exec
where
    P: AsRef<std::path::Path>,
    S: AsRef<std::ffi::OsStr>,
{
    exec_cmd(command).cwd(path)
}

/// Run a command in a directory; a non-zero exit status is an error
/// carrying the command line and status.
pub fn run_in_dir<P>(command: &[String], path: P) -> Result<(), PackModError>
where
    P: AsRef<std::path::Path>,
{
    let exit_status = status(exec_in_dir(command, path).join());
    if exit_status == 0 {
        Ok(())
    } else {
        Err(PackModError::Command {
            command: command.join(" "),
            code: exit_status,
        })
    }
}

/// Capture the trimmed stdout of a shell command line, or None when the
/// command cannot be run or fails.
pub fn capture_shell(command: &str) -> Option<String> {
    let capture = subprocess::Exec::shell(command)
        .stdout(subprocess::Redirection::Pipe)
        .capture()
        .ok()?;
    if capture.success() {
        Some(capture.stdout_str().trim_end().to_string())
    } else {
        None
    }
}
