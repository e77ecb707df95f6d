//! File permission application for downloaded artifacts.

use std::path::Path;

use crate::error::Result;

/// Grant owner-execute permission, `rwxr-xr-x`.
///
/// On platforms without Unix mode bits this is a no-op.
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }

    #[cfg(not(unix))]
    {
        let _ = path;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn make_executable_sets_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tool");
        std::fs::write(&path, b"#!/bin/sh\n").unwrap();

        make_executable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn make_executable_on_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        if cfg!(unix) {
            assert!(make_executable(&missing).is_err());
        } else {
            assert!(make_executable(&missing).is_ok());
        }
    }
}
