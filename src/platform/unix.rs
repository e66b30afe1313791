use crate::errors::InstallError;
use crate::platform::PlatformOps;
use std::path::Path;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn make_executable(&self, path: &Path) -> Result<(), InstallError> {
        use std::os::unix::fs::PermissionsExt;
        let chmod = |p: &Path| -> std::io::Result<()> {
            let mut perms = std::fs::metadata(p)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(p, perms)
        };
        chmod(path).map_err(|source| InstallError::Permissions {
            path: path.to_path_buf(),
            source,
        })
    }
}
