use crate::cli::Cli;
use crate::elevate;
use crate::errors::InstallError;
use crate::platform::platform;
use crate::release::{Platform, GLOBAL_BIN_DIR, LOCAL_BIN_NAME};
use anyhow::{Context, Result};
use fs_err as fs;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Detect, download, normalize, chmod, optionally relocate. Strictly
/// sequential; the first failing step aborts the run.
pub fn run(cli: &Cli) -> Result<()> {
    let host = Platform::detect();
    let cwd = std::env::current_dir().context("resolving current directory")?;
    let client = Client::new();

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(120));

    let downloaded = download(&client, &host.artifact_url(), &cwd, Some(&pb))?;
    let local = normalize(&downloaded, &cwd)?;
    platform().make_executable(&local)?;

    if cli.effective_global() {
        pb.set_message(format!("Moving {LOCAL_BIN_NAME} to {GLOBAL_BIN_DIR}"));
        // sudo may need the terminal; get the spinner off the line first
        pb.finish_and_clear();
        let dest = elevate::relocate(&local, Path::new(GLOBAL_BIN_DIR), &mut elevate::run_command)?;
        println!("Installed {}", dest.display());
    } else {
        pb.finish_with_message(format!("Installed {}", local.display()));
    }
    Ok(())
}

/// Fetch `url` (redirects followed) and write the body under its remote
/// filename inside `dir`, overwriting any previous download.
pub fn download(
    client: &Client,
    url: &str,
    dir: &Path,
    pb: Option<&ProgressBar>,
) -> Result<PathBuf, InstallError> {
    if let Some(p) = pb {
        p.set_message(format!("GET {url}"));
    }
    let resp = client.get(url).send().map_err(|source| InstallError::Fetch {
        url: url.to_string(),
        source,
    })?;
    if !resp.status().is_success() {
        return Err(InstallError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let bytes = resp.bytes().map_err(|source| InstallError::Fetch {
        url: url.to_string(),
        source,
    })?;
    let path = dir.join(remote_filename(url));
    fs::write(&path, &bytes).map_err(|source| InstallError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Rename the platform-suffixed download to the fixed local name.
pub fn normalize(downloaded: &Path, dir: &Path) -> Result<PathBuf, InstallError> {
    let target = dir.join(LOCAL_BIN_NAME);
    fs::rename(downloaded, &target).map_err(|source| InstallError::Move {
        from: downloaded.to_path_buf(),
        to: target.clone(),
        source,
    })?;
    Ok(target)
}

fn remote_filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_filename_is_last_path_segment() {
        assert_eq!(
            remote_filename("https://example.com/releases/oinky-linux"),
            "oinky-linux"
        );
        assert_eq!(remote_filename("oinky-macos"), "oinky-macos");
    }

    #[test]
    fn normalize_renames_to_fixed_name() {
        let tmp = tempfile::tempdir().unwrap();
        let downloaded = tmp.path().join("oinky-linux");
        fs::write(&downloaded, b"binary").unwrap();

        let local = normalize(&downloaded, tmp.path()).unwrap();

        assert_eq!(local, tmp.path().join("oinky"));
        assert!(local.exists());
        assert!(!downloaded.exists());
    }

    #[test]
    fn normalize_without_download_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("oinky-linux");
        let err = normalize(&missing, tmp.path()).unwrap_err();
        assert!(matches!(err, InstallError::Move { .. }));
    }
}
