//! Launches the platform's default viewer for a file.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Errors that can occur while launching the viewer.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("launcher `{0}` not found on PATH")]
    LauncherNotFound(String),

    #[error("failed to launch viewer: {0}")]
    Launch(io::Error),

    #[error("viewer launcher exited with {status}")]
    LauncherFailed { status: ExitStatus },
}

/// How to treat the launcher process after spawning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitMode {
    /// Fire-and-forget: return as soon as the launcher has been spawned.
    #[default]
    Detach,

    /// Wait for the launcher process to exit and surface a nonzero status.
    WaitForLauncher,
}

/// A resolved open command: the launcher program plus its arguments, with
/// the file path already appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub args: Vec<OsString>,
}

/// Map a platform identifier (as in `std::env::consts::OS`) to its open
/// command for `file`.
///
/// Recognized platforms: `linux` (`xdg-open`), `macos` (`open`), and
/// `windows` (`cmd /C start`). Anything else fails without touching the
/// process table.
pub fn launch_command(os: &str, file: &Path) -> Result<LaunchCommand, PreviewError> {
    let (program, mut args): (&'static str, Vec<OsString>) = match os {
        "linux" => ("xdg-open", vec![]),
        "macos" => ("open", vec![]),
        // The empty string is the window title `start` would otherwise
        // consume the path for.
        "windows" => ("cmd", vec!["/C".into(), "start".into(), "".into()]),
        other => return Err(PreviewError::UnsupportedPlatform(other.to_string())),
    };

    args.push(file.as_os_str().to_os_string());
    Ok(LaunchCommand { program, args })
}

/// Open `file` with the current platform's default viewer.
pub fn preview(file: &Path, mode: WaitMode) -> Result<(), PreviewError> {
    let cmd = launch_command(env::consts::OS, file)?;

    let program = find_on_path(cmd.program, env::var_os("PATH").as_deref())
        .ok_or_else(|| PreviewError::LauncherNotFound(cmd.program.to_string()))?;

    tracing::debug!(launcher = %program.display(), ?mode, "opening preview");

    let mut command = Command::new(&program);
    command.args(&cmd.args);

    match mode {
        WaitMode::Detach => {
            command.spawn().map_err(PreviewError::Launch)?;
            Ok(())
        }
        WaitMode::WaitForLauncher => {
            let status = command.status().map_err(PreviewError::Launch)?;
            if status.success() {
                Ok(())
            } else {
                Err(PreviewError::LauncherFailed { status })
            }
        }
    }
}

/// Locate `program` in the directories of a `PATH`-style variable.
///
/// A candidate must be a regular file with the execute bit set (on unix);
/// a plain file shadowing the launcher on `PATH` is skipped.
fn find_on_path(program: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    let path_var = path_var?;

    for dir in env::split_paths(path_var) {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let candidate = dir.join(format!("{program}.exe"));
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linux_to_xdg_open() {
        let cmd = launch_command("linux", Path::new("/tmp/page.html")).unwrap();

        assert_eq!(cmd.program, "xdg-open");
        assert_eq!(cmd.args, vec![OsString::from("/tmp/page.html")]);
    }

    #[test]
    fn maps_macos_to_open() {
        let cmd = launch_command("macos", Path::new("/tmp/page.html")).unwrap();

        assert_eq!(cmd.program, "open");
        assert_eq!(cmd.args, vec![OsString::from("/tmp/page.html")]);
    }

    #[test]
    fn maps_windows_to_cmd_start() {
        let cmd = launch_command("windows", Path::new("page.html")).unwrap();

        assert_eq!(cmd.program, "cmd");
        assert_eq!(
            cmd.args,
            vec![
                OsString::from("/C"),
                OsString::from("start"),
                OsString::from(""),
                OsString::from("page.html"),
            ]
        );
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = launch_command("plan9", Path::new("page.html")).unwrap_err();

        assert!(matches!(err, PreviewError::UnsupportedPlatform(os) if os == "plan9"));
    }

    #[test]
    fn file_path_is_always_the_final_argument() {
        for os in ["linux", "macos", "windows"] {
            let cmd = launch_command(os, Path::new("out.html")).unwrap();
            assert_eq!(cmd.args.last().unwrap(), &OsString::from("out.html"));
        }
    }

    #[cfg(unix)]
    #[test]
    fn finds_program_on_search_path() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("xdg-open");
        fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = fs::metadata(&exe).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&exe, perms).unwrap();

        let path_var = env::join_paths([dir.path().to_path_buf()]).unwrap();

        let found = find_on_path("xdg-open", Some(path_var.as_os_str()));
        assert_eq!(found, Some(exe));
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_file_on_search_path() {
        use std::fs;

        let dir = tempfile::tempdir().unwrap();
        // Regular file without the execute bit shadowing the launcher name.
        fs::write(dir.path().join("xdg-open"), "not a program").unwrap();

        let path_var = env::join_paths([dir.path().to_path_buf()]).unwrap();

        assert_eq!(find_on_path("xdg-open", Some(path_var.as_os_str())), None);
    }

    #[test]
    fn missing_program_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path_var = env::join_paths([dir.path().to_path_buf()]).unwrap();

        assert_eq!(find_on_path("no-such-launcher", Some(path_var.as_os_str())), None);
        assert_eq!(find_on_path("no-such-launcher", None), None);
    }
}
