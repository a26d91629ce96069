//! Localizers handed to consuming modules.
//!
//! - [`ScopedLocalizer`]: bound to one module's templates, addressed by index
//! - [`ConsumerApi`]: a scoped localizer plus the language configuration accessor
//! - [`RootApi`]: generic formatting for callers that have no bundle of their own

use std::sync::Arc;

use super::format::format;
use super::language::LanguageMap;

/// Index-addressed localizer over one module's message templates.
///
/// For a given `(index, args)` pair the result is always the same, apart from
/// the process-wide pseudo-localization flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedLocalizer {
    messages: Arc<[String]>,
}

impl ScopedLocalizer {
    pub fn new(messages: &[String]) -> Self {
        Self {
            messages: Arc::from(messages),
        }
    }

    /// Render template `index` with `args`.
    ///
    /// `default_value` is the English text at the call site. It documents the
    /// call and is never rendered. An index outside the bundle renders
    /// `"NLS error: unknown index <index>"`.
    pub fn localize<S: AsRef<str>>(
        &self,
        index: usize,
        _default_value: &str,
        args: &[S],
    ) -> String {
        match self.messages.get(index) {
            Some(template) => format(template, args),
            None => format!("NLS error: unknown index {}", index),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// What a module receives when it asks for its own localized strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerApi {
    localizer: ScopedLocalizer,
    languages: Option<LanguageMap>,
}

impl ConsumerApi {
    pub fn new(localizer: ScopedLocalizer, languages: Option<LanguageMap>) -> Self {
        Self {
            localizer,
            languages,
        }
    }

    pub fn localize<S: AsRef<str>>(
        &self,
        index: usize,
        default_value: &str,
        args: &[S],
    ) -> String {
        self.localizer.localize(index, default_value, args)
    }

    pub fn localizer(&self) -> &ScopedLocalizer {
        &self.localizer
    }

    /// Configured available languages, if any were configured.
    pub fn language_configuration(&self) -> Option<&LanguageMap> {
        self.languages.as_ref()
    }
}

/// Generic, unscoped localizer delivered for the root (empty-name) request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootApi {
    languages: Option<LanguageMap>,
}

impl RootApi {
    pub fn new(languages: Option<LanguageMap>) -> Self {
        Self { languages }
    }

    /// Format `message` itself with `args`.
    pub fn localize<S: AsRef<str>>(&self, message: &str, args: &[S]) -> String {
        format(message, args)
    }

    pub fn language_configuration(&self) -> Option<&LanguageMap> {
        self.languages.as_ref()
    }
}
