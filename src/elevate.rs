//! Moving the installed binary into the global bin directory.
//!
//! The happy path is a plain copy + remove, which also works across
//! filesystems. When the directory is only root-writable the move is retried
//! through `sudo mv` with inherited stdio so sudo can prompt for a password.
//! Command execution is injected so tests can observe the sudo invocation
//! without privileges.

use crate::errors::InstallError;
use fs_err as fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Default executor: actually run the command, wired to the terminal.
pub fn run_command(cmd: &mut Command) -> std::io::Result<ExitStatus> {
    cmd.status()
}

pub fn relocate<F>(src: &Path, dest_dir: &Path, exec: &mut F) -> Result<PathBuf, InstallError>
where
    F: FnMut(&mut Command) -> std::io::Result<ExitStatus>,
{
    let file_name = src
        .file_name()
        .ok_or_else(|| InstallError::Elevation(format!("no file name in {}", src.display())))?;
    let dest = dest_dir.join(file_name);
    match fs::copy(src, &dest) {
        Ok(_) => {
            fs::remove_file(src).map_err(|source| InstallError::Move {
                from: src.to_path_buf(),
                to: dest.clone(),
                source,
            })?;
            Ok(dest)
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => sudo_move(src, &dest, exec),
        Err(source) => Err(InstallError::Move {
            from: src.to_path_buf(),
            to: dest,
            source,
        }),
    }
}

fn sudo_move<F>(src: &Path, dest: &Path, exec: &mut F) -> Result<PathBuf, InstallError>
where
    F: FnMut(&mut Command) -> std::io::Result<ExitStatus>,
{
    let sudo = which::which("sudo")
        .map_err(|e| InstallError::Elevation(format!("sudo not available: {e}")))?;
    let mut cmd = sudo_move_command(&sudo, src, dest);
    let status = exec(&mut cmd)
        .map_err(|e| InstallError::Elevation(format!("running sudo mv: {e}")))?;
    if !status.success() {
        return Err(InstallError::Elevation(format!(
            "sudo mv {} {} exited with {status}",
            src.display(),
            dest.display()
        )));
    }
    Ok(dest.to_path_buf())
}

fn sudo_move_command(sudo: &Path, src: &Path, dest: &Path) -> Command {
    let mut cmd = Command::new(sudo);
    cmd.arg("mv").arg(src).arg(dest);
    cmd
}
