use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::suggest::closest_match;

use super::tables::{self, Translations};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
    #[serde(rename = "zh-CN")]
    SimplifiedChinese,
    #[serde(rename = "ja")]
    Japanese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::TraditionalChinese,
        Language::SimplifiedChinese,
        Language::Japanese,
    ];

    /// Language tag, e.g. "zh-TW".
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::TraditionalChinese => "zh-TW",
            Language::SimplifiedChinese => "zh-CN",
            Language::Japanese => "ja",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::TraditionalChinese => "繁體中文",
            Language::SimplifiedChinese => "简体中文",
            Language::Japanese => "日本語",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::English => &tables::EN,
            Language::TraditionalChinese => &tables::ZH_TW,
            Language::SimplifiedChinese => &tables::ZH_CN,
            Language::Japanese => &tables::JA,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CalcError;

    /// Accepts the language tag (case-insensitive, `_` or `-`) or the native name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let tag = input.replace('_', "-");

        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(&tag) || l.native_name() == input)
            .ok_or_else(|| CalcError::UnknownLanguage {
                input: input.to_string(),
                suggestion: closest_match(input, Language::ALL.iter().map(|l| l.code())),
            })
    }
}
