//! Operating system detection.

/// Operating system families relevant to artifact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Macos,
    Linux,
    Unknown,
}

/// Detect the operating system this process runs on.
pub fn detect() -> Os {
    match std::env::consts::OS {
        "windows" => Os::Windows,
        "macos" => Os::Macos,
        "linux" => Os::Linux,
        _ => Os::Unknown,
    }
}

impl Os {
    /// Whether this platform lacks native execute-bit semantics.
    ///
    /// On such platforms the tool ships as a wrapper script plus a
    /// separate payload instead of one self-contained executable.
    pub fn restricted_execution(self) -> bool {
        matches!(self, Os::Windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_matches_compile_target() {
        let os = detect();
        if cfg!(windows) {
            assert_eq!(os, Os::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(os, Os::Macos);
        } else if cfg!(target_os = "linux") {
            assert_eq!(os, Os::Linux);
        }
    }

    #[test]
    fn only_windows_is_restricted() {
        assert!(Os::Windows.restricted_execution());
        assert!(!Os::Macos.restricted_execution());
        assert!(!Os::Linux.restricted_execution());
        assert!(!Os::Unknown.restricted_execution());
    }
}
