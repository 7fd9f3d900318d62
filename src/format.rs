//! Currency display formatting. Presentation only: aggregators never call
//! into this module; they hand `Decimal` values to whoever renders them.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub code: String,
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub precision: u32,
}

impl CurrencyFormat {
    /// Turkish lira, tr-TR style: `₺1.234,56`.
    pub fn lira() -> Self {
        Self {
            code: "TRY".into(),
            symbol: "₺".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            precision: 2,
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::lira()
    }
}

static DEFAULT_FORMAT: Lazy<CurrencyFormat> = Lazy::new(CurrencyFormat::lira);

pub fn default_format() -> &'static CurrencyFormat {
    &DEFAULT_FORMAT
}

/// Formats a monetary value with the given currency preferences.
pub fn format_currency(value: Decimal, format: &CurrencyFormat) -> String {
    let rounded = value.round_dp(format.precision);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let (int_part, frac_part) = fixed_point(rounded.abs(), format.precision);
    let grouped = group_digits(&int_part, format.grouping_separator);
    let mut body = format!("{}{}", format.symbol, grouped);
    if format.precision > 0 {
        body.push(format.decimal_separator);
        body.push_str(&frac_part);
    }
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

fn fixed_point(value: Decimal, precision: u32) -> (String, String) {
    let text = value.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };
    let mut frac = frac_part;
    frac.truncate(precision as usize);
    while (frac.len() as u32) < precision {
        frac.push('0');
    }
    (int_part, frac)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
