use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);

/// Languages the game data and the config file can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    English,
    German,
    Spanish,
    French,
    Hungarian,
    Italian,
    Polish,
    Portuguese,
    Russian,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::German,
        Language::Spanish,
        Language::French,
        Language::Hungarian,
        Language::Italian,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
    ];

    /// Two-letter code stored in the config registry and emitted into the
    /// synthesized config.lua.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Hungarian => "hu",
            Language::Italian => "it",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
        }
    }

    pub fn parse(code: &str) -> Result<Language, UnknownLanguage> {
        match code {
            "en" => Ok(Language::English),
            "de" => Ok(Language::German),
            "es" => Ok(Language::Spanish),
            "fr" => Ok(Language::French),
            "hu" => Ok(Language::Hungarian),
            "it" => Ok(Language::Italian),
            "pl" => Ok(Language::Polish),
            "pt" => Ok(Language::Portuguese),
            "ru" => Ok(Language::Russian),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
