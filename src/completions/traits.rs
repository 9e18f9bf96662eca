//! Completion values independent of `clap_complete`
//!
//! Completers produce [`Candidate`]s; conversion to the engine type happens in
//! one place behind the `dynamic-completions` feature.

/// A value offered to the shell, with an optional description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub help: Option<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), help: None }
    }

    /// Attach a description, e.g. the color of a tag
    #[must_use]
    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self { help: Some(help.into()), ..self }
    }
}

/// Source of candidates for one kind of argument
///
/// `typed` is what the user has entered so far, lossily decoded. A completer
/// that cannot produce anything returns an empty list.
pub trait DynamicCompleter: Send + Sync {
    fn complete(&self, typed: &str) -> Vec<Candidate>;
}

/// Run `completer` for a raw shell argument and convert to engine candidates
#[cfg(feature = "dynamic-completions")]
pub fn run_completer<C: DynamicCompleter>(
    completer: &C,
    current: &std::ffi::OsStr,
) -> Vec<clap_complete::engine::CompletionCandidate> {
    completer
        .complete(&current.to_string_lossy())
        .into_iter()
        .map(|c| clap_complete::engine::CompletionCandidate::new(c.value).help(c.help.map(Into::into)))
        .collect()
}
