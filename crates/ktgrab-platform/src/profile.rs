//! Platform profiles: which artifacts a host needs on disk.

use std::path::{Path, PathBuf};

use crate::os::Os;

/// One downloadable file belonging to a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// File name segment appended to the release base URL.
    pub remote_name: &'static str,

    /// File name under the storage directory.
    pub local_name: &'static str,

    /// Whether this artifact's path is the one handed back to the caller.
    pub entrypoint: bool,

    /// Whether the file needs owner-execute permission once written.
    pub execute_bit: bool,
}

impl ArtifactSpec {
    /// Where this artifact lives under `storage_dir`.
    pub fn local_path(&self, storage_dir: &Path) -> PathBuf {
        storage_dir.join(self.local_name)
    }
}

/// Immutable description of what the host platform needs on disk.
///
/// Computed once at startup from [`Os`] and passed by parameter; the
/// fetch layer never consults global process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    /// True on platforms without execute-bit semantics.
    pub restricted_execution: bool,

    /// Required artifacts, in download order. Exactly one is the entrypoint.
    pub artifacts: Vec<ArtifactSpec>,
}

impl PlatformProfile {
    /// Build the profile for a given operating system.
    ///
    /// Windows has no execute bit, so the release ships a `.bat`
    /// wrapper next to the jar payload; everywhere else the single
    /// self-executing artifact suffices. The wrapper comes first so
    /// progress narration follows the declared order.
    pub fn for_os(os: Os) -> Self {
        if os.restricted_execution() {
            Self {
                restricted_execution: true,
                artifacts: vec![
                    ArtifactSpec {
                        remote_name: "ktlint.bat",
                        local_name: "ktlint.bat",
                        entrypoint: true,
                        execute_bit: false,
                    },
                    ArtifactSpec {
                        remote_name: "ktlint",
                        local_name: "ktlint",
                        entrypoint: false,
                        execute_bit: false,
                    },
                ],
            }
        } else {
            Self {
                restricted_execution: false,
                artifacts: vec![ArtifactSpec {
                    remote_name: "ktlint",
                    local_name: "ktlint",
                    entrypoint: true,
                    execute_bit: true,
                }],
            }
        }
    }

    /// The artifact whose path is returned to the caller.
    pub fn entrypoint(&self) -> &ArtifactSpec {
        self.artifacts
            .iter()
            .find(|a| a.entrypoint)
            .expect("profile declares exactly one entrypoint")
    }

    /// Entrypoint path under `storage_dir`. Depends only on the profile
    /// and the directory, never on whether a download occurred.
    pub fn entrypoint_path(&self, storage_dir: &Path) -> PathBuf {
        self.entrypoint().local_path(storage_dir)
    }
}
