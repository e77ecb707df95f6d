/// Per-download configuration.
///
/// # Examples
///
/// ```
/// use ktgrab_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .executable(true)
///     .label("Downloading ktlint");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Grant owner-execute permission once the stream completes.
    ///
    /// Failures to set the bit are logged and swallowed; some
    /// platforms and filesystems have no such concept.
    pub executable: bool,

    /// Narration prefix carried on every progress event.
    pub label: String,
}

impl FetchOptions {
    /// Set whether the destination needs the execute bit.
    #[must_use]
    pub fn executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    /// Set the progress narration label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
