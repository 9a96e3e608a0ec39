//! Locale-aware rendering of amounts and goal periods, plus amount parsing for form input.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use networth_domain::PeriodLabel;

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    /// Integer digits beyond the first group required before grouping kicks in.
    pub min_grouping_digits: usize,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_position: SymbolPosition::Prefix,
            min_grouping_digits: 1,
        }
    }
}

static LOCALE_PRESETS: Lazy<HashMap<&'static str, LocaleConfig>> = Lazy::new(|| {
    let mut presets = HashMap::new();
    presets.insert("en", LocaleConfig::default());
    presets.insert(
        "es",
        LocaleConfig {
            language_tag: "es-ES".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_position: SymbolPosition::Suffix,
            min_grouping_digits: 2,
        },
    );
    presets.insert(
        "de",
        LocaleConfig {
            language_tag: "de-DE".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_position: SymbolPosition::Suffix,
            min_grouping_digits: 1,
        },
    );
    presets.insert(
        "fr",
        LocaleConfig {
            language_tag: "fr-FR".into(),
            decimal_separator: ',',
            grouping_separator: ' ',
            symbol_position: SymbolPosition::Suffix,
            min_grouping_digits: 1,
        },
    );
    presets
});

impl LocaleConfig {
    /// Resolves a BCP 47 tag by its language subtag, falling back to `en-US`.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mut locale = LOCALE_PRESETS
            .get(language.as_str())
            .cloned()
            .unwrap_or_default();
        if LOCALE_PRESETS.contains_key(language.as_str()) && !tag.trim().is_empty() {
            locale.language_tag = tag.trim().to_string();
        }
        locale
    }

    pub fn language(&self) -> &str {
        self.language_tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
    }

    fn is_spanish(&self) -> bool {
        self.language().eq_ignore_ascii_case("es")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `value` with the locale's separators and `precision` decimals.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, locale);
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(frac);
    }
    let is_zero = body.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        rendered.insert(0, '-');
    }
    rendered
}

fn group_digits(digits: &str, locale: &LocaleConfig) -> String {
    if digits.len() < 3 + locale.min_grouping_digits.max(1) {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(locale.grouping_separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a monetary amount, e.g. `7500,00 €` and `75.000,00 €` for es-ES or `$7,500.00` for en-US.
pub fn format_currency_value(amount: f64, code: &str, locale: &LocaleConfig) -> String {
    let number = format_number(locale, amount, minor_units_for(code));
    let symbol = symbol_for(code);
    match locale.symbol_position {
        SymbolPosition::Suffix => format!("{number} {symbol}"),
        SymbolPosition::Prefix => match number.strip_prefix('-') {
            Some(unsigned) => format!("-{symbol}{unsigned}"),
            None => format!("{symbol}{number}"),
        },
    }
}

/// Chart y-axis label in thousands, e.g. `€93k`.
pub fn format_axis_thousands(value: f64, code: &str) -> String {
    format!("{}{:.0}k", symbol_for(code), value / 1000.0)
}

/// Label for the goal marker line, e.g. `Objetivo: 100K €`.
pub fn format_goal_marker(locale: &LocaleConfig, goal: f64, code: &str) -> String {
    let thousands = goal / 1000.0;
    let amount = if thousands.fract() == 0.0 {
        format!("{thousands:.0}")
    } else {
        format_number(locale, thousands, 1)
    };
    let symbol = symbol_for(code);
    if locale.is_spanish() {
        format!("Objetivo: {amount}K {symbol}")
    } else {
        format!("Goal: {symbol}{amount}K")
    }
}

/// Localized "month year" label, e.g. `agosto de 2033` or `August 2033`.
pub fn format_period(locale: &LocaleConfig, period: &PeriodLabel) -> String {
    if locale.is_spanish() {
        format!("{} de {}", spanish_month(period.month), period.year)
    } else {
        period.to_string()
    }
}

fn spanish_month(month: u32) -> &'static str {
    match month {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "",
    }
}

/// Parses a typed amount, accepting either `,` or `.` as the decimal separator.
///
/// When both appear, the right-most one is the decimal separator and the other
/// is treated as grouping. Non-numeric or non-finite input yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = match (trimmed.rfind(','), trimmed.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (Some(_), None) => trimmed.replacen(',', ".", 1),
        _ => trimmed.to_string(),
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
