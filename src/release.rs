//! Which prebuilt oinky artifact belongs to this host.
//!
//! The release publishes one binary per platform family, distinguished only
//! by filename suffix. Anything that is not macOS gets the Linux build.

const RELEASE_BASE: &str = "https://github.com/askonomm/oinky/releases/latest/download";

/// Name the binary always ends up with locally, regardless of platform.
pub const LOCAL_BIN_NAME: &str = "oinky";

/// Destination directory for `--global` installs.
pub const GLOBAL_BIN_DIR: &str = "/usr/local/bin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            _ => Platform::Linux,
        }
    }

    pub fn artifact_name(self) -> &'static str {
        match self {
            Platform::MacOs => "oinky-macos",
            Platform::Linux => "oinky-linux",
        }
    }

    pub fn artifact_url(self) -> String {
        format!("{RELEASE_BASE}/{}", self.artifact_name())
    }
}
