//! Label sets for calendar text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported label languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_RU: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const WEEKDAYS_EN: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const WEEKDAYS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

impl Locale {
    /// Name of `month` (1..=12). Out-of-range months yield an empty string.
    pub fn month_name(&self, month: u32) -> &'static str {
        let names = match self {
            Locale::En => &MONTHS_EN,
            Locale::Ru => &MONTHS_RU,
        };
        month
            .checked_sub(1)
            .and_then(|i| names.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Weekday abbreviations, Monday first.
    pub fn weekdays(&self) -> &'static [&'static str; 7] {
        match self {
            Locale::En => &WEEKDAYS_EN,
            Locale::Ru => &WEEKDAYS_RU,
        }
    }

    /// Subtitle line naming the year.
    pub fn subtitle(&self, year: i32) -> String {
        match self {
            Locale::En => format!("Statistics for {year}"),
            Locale::Ru => format!("Статистика за {year} год"),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(ConfigError::InvalidValue {
                key: "locale".into(),
                message: format!("unsupported locale '{other}' (expected en or ru)"),
            }),
        }
    }
}
