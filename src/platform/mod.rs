pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use crate::errors::InstallError;
use std::path::Path;

pub trait PlatformOps: Sync + Send {
    fn make_executable(&self, path: &Path) -> Result<(), InstallError>;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;
