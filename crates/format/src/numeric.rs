//! Currency and percentage formatting.
use crate::error::FormatError;
use crate::value::{group_thousands, stringify, to_number};
use serde_json::Value;
use taxform_annotation::{CurrencyFormat, NegativeFormat, PercentageFormat};

pub(crate) const CURRENCY_FALLBACK: &str = "0.00";
pub(crate) const PERCENTAGE_FALLBACK: &str = "0.00%";

fn number_or_err(value: &Value) -> Result<f64, FormatError> {
    to_number(value).ok_or_else(|| FormatError::NotNumeric(stringify(value)))
}

pub fn format_currency(value: &Value, params: &CurrencyFormat) -> Result<String, FormatError> {
    let amount = number_or_err(value)?;
    let negative = amount < 0.0;
    let magnitude = amount.abs();

    let mut text = if params.show_cents {
        let fixed = format!("{:.*}", params.decimal_places, magnitude);
        match fixed.split_once('.') {
            Some((whole, fraction)) => {
                format!("{}.{}", group_thousands(whole, &params.thousands_separator), fraction)
            }
            None => group_thousands(&fixed, &params.thousands_separator),
        }
    } else {
        let whole = format!("{:.0}", magnitude.trunc());
        group_thousands(&whole, &params.thousands_separator)
    };

    if !params.currency_symbol.is_empty() {
        text.insert_str(0, &params.currency_symbol);
    }

    if negative {
        text = match params.negative_format {
            NegativeFormat::Parentheses => format!("({})", text),
            NegativeFormat::Minus => format!("-{}", text),
        };
    }
    Ok(text)
}

pub fn format_percentage(value: &Value, params: &PercentageFormat) -> Result<String, FormatError> {
    let mut number = number_or_err(value)?;
    if params.multiply_by_100 {
        number *= 100.0;
    }
    let mut text = format!("{:.*}", params.decimal_places, number);
    if params.show_symbol {
        text.push('%');
    }
    Ok(text)
}
