//! Where the `{language}` value comes from.

use std::env;

/// Supplies the current locale string, e.g. `en-US`. Empty when unknown.
pub trait LocaleProvider {
    fn current_locale(&self) -> String;
}

/// A locale chosen up front (tests, CLI `--locale`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleProvider for FixedLocale {
    fn current_locale(&self) -> String {
        self.0.clone()
    }
}

/// Reads the POSIX locale variables of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocale;

impl LocaleProvider for EnvLocale {
    fn current_locale(&self) -> String {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|v| !v.is_empty())
            .map(|v| normalize_posix_locale(&v))
            .unwrap_or_default()
    }
}

/// `en_US.UTF-8@euro` becomes `en-US`. `C` and `POSIX` have no language.
pub fn normalize_posix_locale(raw: &str) -> String {
    let tag = raw
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default()
        .trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return String::new();
    }
    tag.replace('_', "-")
}
