use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Locale};

/// Display languages offered by the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Tr,
    #[default]
    En,
    De,
    Fr,
    Ru,
    Ja,
    Zh,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Tr,
        Language::En,
        Language::De,
        Language::Fr,
        Language::Ru,
        Language::Ja,
        Language::Zh,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Ru => "ru",
            Self::Ja => "ja",
            Self::Zh => "zh",
        }
    }

    #[must_use]
    pub fn locale(self) -> &'static str {
        match self {
            Self::Tr => "tr-TR",
            Self::En => "en-US",
            Self::De => "de-DE",
            Self::Fr => "fr-FR",
            Self::Ru => "ru-RU",
            Self::Ja => "ja-JP",
            Self::Zh => "zh-CN",
        }
    }

    /// Name of the language in English, as used in the report instruction.
    #[must_use]
    pub fn english_name(self) -> &'static str {
        match self {
            Self::Tr => "Turkish",
            Self::En => "English",
            Self::De => "German",
            Self::Fr => "French",
            Self::Ru => "Russian",
            Self::Ja => "Japanese",
            Self::Zh => "Chinese",
        }
    }

    /// Resolve a code such as `de` or `de-DE`. Unknown codes fall back to English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
            .unwrap_or(Self::En)
    }

    fn chrono_locale(self) -> Locale {
        match self {
            Self::Tr => Locale::tr_TR,
            Self::En => Locale::en_US,
            Self::De => Locale::de_DE,
            Self::Fr => Locale::fr_FR,
            Self::Ru => Locale::ru_RU,
            Self::Ja => Locale::ja_JP,
            Self::Zh => Locale::zh_CN,
        }
    }

    fn long_date_pattern(self) -> &'static str {
        match self {
            Self::Tr => "%-d %B %Y %A",
            Self::En => "%A, %B %-d, %Y",
            Self::De => "%A, %-d. %B %Y",
            Self::Fr => "%A %-d %B %Y",
            Self::Ru => "%A, %-d %B %Y г.",
            Self::Ja | Self::Zh => "%Y年%-m月%-d日%A",
        }
    }

    /// Weekday, day, month name and year in this language.
    #[must_use]
    pub fn long_date(self, time: &DateTime<FixedOffset>) -> String {
        time.format_localized(self.long_date_pattern(), self.chrono_locale())
            .to_string()
    }

    /// Hours and minutes on a 24-hour clock.
    #[must_use]
    pub fn short_time(self, time: &DateTime<FixedOffset>) -> String {
        time.format("%H:%M").to_string()
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
