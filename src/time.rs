//! Conversion between time expressions and seconds values.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors produced while converting time expressions.
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid minutes {text:?}")]
    InvalidMinutes {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid seconds {text:?}")]
    InvalidSeconds {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("seconds value must be finite and non-negative, but is {0}")]
    OutOfRange(f64),
}

/// Parse a time expression into a number of seconds.
///
/// Accepts plain seconds (`"4,701"` or `"4.701"`) and `"minutes:seconds"`
/// (`"4:41,67"`). The expression is split at the first colon only.
pub fn parse_time(expr: &str) -> Result<f64, TimeError> {
    match expr.split_once(':') {
        Some((min_str, sec_str)) => {
            let min = parse_mins(min_str)?;
            let sec = parse_secs(sec_str)?;
            Ok(min * 60.0 + sec)
        }
        None => parse_secs(expr),
    }
}

// Integers too wide for i64 keep their nearest f64 value.
fn parse_mins(min_str: &str) -> Result<f64, TimeError> {
    let trimmed = min_str.trim();
    match trimmed.parse::<i64>() {
        Ok(min) => Ok(min as f64),
        Err(source)
            if matches!(
                source.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            trimmed
                .parse::<f64>()
                .map_err(|_| TimeError::InvalidMinutes {
                    text: min_str.to_string(),
                    source,
                })
        }
        Err(source) => Err(TimeError::InvalidMinutes {
            text: min_str.to_string(),
            source,
        }),
    }
}

fn parse_secs(sec_str: &str) -> Result<f64, TimeError> {
    sec_str
        .replace(',', ".")
        .trim()
        .parse()
        .map_err(|source| TimeError::InvalidSeconds {
            text: sec_str.to_string(),
            source,
        })
}

/// Format a number of seconds as `"M:SS.ss"`.
pub fn format_time(secs: f64) -> Result<String, TimeError> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(TimeError::OutOfRange(secs));
    }
    let min = (secs / 60.0).trunc();
    let sec = secs % 60.0;
    Ok(format!("{min:.0}:{sec:05.2}"))
}
