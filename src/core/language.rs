//! Supported languages.
//!
//! The set is closed: every table, session and rewrite iterates
//! [`Language::ALL`] in the same order, and [`Language::CANONICAL`] is the
//! language canonical paths are spelled in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// English (canonical).
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

/// Unrecognized language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language `{0}` (expected one of: en, es, fr)")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Language canonical paths are expressed in.
    pub const CANONICAL: Self = Self::En;

    /// Every supported language, canonical first.
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::Fr];

    /// Lowercase ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    #[inline]
    pub const fn is_canonical(self) -> bool {
        matches!(self, Self::En)
    }

    /// Non-canonical languages in iteration order.
    pub fn localized() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|lang| !lang.is_canonical())
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parse a language code. Case-insensitive, region suffix ignored
    /// (`es-MX` -> `Es`, `FR_ca` -> `Fr`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let primary = trimmed.split(['-', '_']).next().unwrap_or(trimmed);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            _ => Err(UnknownLanguage(trimmed.to_string())),
        }
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl clap::ValueEnum for Language {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("ES".parse::<Language>(), Ok(Language::Es));
        assert_eq!(" fr ".parse::<Language>(), Ok(Language::Fr));
    }

    #[test]
    fn test_parse_region_suffix() {
        assert_eq!("es-MX".parse::<Language>(), Ok(Language::Es));
        assert_eq!("fr_CA".parse::<Language>(), Ok(Language::Fr));
        assert_eq!("en-GB".parse::<Language>(), Ok(Language::En));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "de".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("de".to_string()));
        assert!(err.to_string().contains("`de`"));
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_canonical_first() {
        assert_eq!(Language::ALL[0], Language::CANONICAL);
        assert!(Language::CANONICAL.is_canonical());
        let localized: Vec<_> = Language::localized().collect();
        assert_eq!(localized, vec![Language::Es, Language::Fr]);
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&Language::Es).unwrap();
        assert_eq!(json, r#""es""#);
        let parsed: Language = serde_json::from_str(r#""fr""#).unwrap();
        assert_eq!(parsed, Language::Fr);
        assert!(serde_json::from_str::<Language>(r#""xx""#).is_err());
    }
}
