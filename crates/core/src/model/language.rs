use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language code: {0}")]
pub struct ParseLanguageError(String);

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Tr];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    /// Picks the default from a system locale such as `tr_TR.UTF-8` or `en-US`.
    ///
    /// Turkish locales select Turkish; everything else falls back to English.
    #[must_use]
    pub fn from_system_locale(locale: &str) -> Self {
        let prefix: String = locale
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .collect::<String>()
            .to_ascii_lowercase();
        if prefix == "tr" { Language::Tr } else { Language::En }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "tr" => Ok(Language::Tr),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_locale_selects_turkish_only_for_tr() {
        assert_eq!(Language::from_system_locale("tr_TR.UTF-8"), Language::Tr);
        assert_eq!(Language::from_system_locale("TR"), Language::Tr);
        assert_eq!(Language::from_system_locale("en-US"), Language::En);
        assert_eq!(Language::from_system_locale("de_DE"), Language::En);
        assert_eq!(Language::from_system_locale(""), Language::En);
    }

    #[test]
    fn parses_codes() {
        assert_eq!("tr".parse::<Language>(), Ok(Language::Tr));
        assert!("fr".parse::<Language>().is_err());
    }
}
