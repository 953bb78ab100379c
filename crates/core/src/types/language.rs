//! Supported storefront languages.

use serde::{Deserialize, Serialize};

/// A storefront display language.
///
/// The site ships four locales. Mongolian is the default, and any
/// unrecognized code degrades to it rather than erroring, preserving the
/// "always render something" policy of the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Mongolian (default)
    #[default]
    Mn,
    /// Korean
    Ko,
    /// Russian
    Ru,
    /// English
    En,
}

impl Language {
    /// Parse a locale code, falling back to Mongolian for unknown values.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code {
            "ko" => Self::Ko,
            "ru" => Self::Ru,
            "en" => Self::En,
            _ => Self::Mn,
        }
    }

    /// The locale code for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mn => "mn",
            Self::Ko => "ko",
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}
