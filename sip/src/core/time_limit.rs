//! The `default_time_limit` Sipfile variable.

use std::time::Duration;

use crate::core::config::SipfileConfig;
use crate::error::SipfileError;

pub const TIME_LIMIT_VAR: &str = "default_time_limit";

/// Default time limit in seconds, rounded to the nearest nanosecond.
///
/// An unset variable is `None`; anything else must be a positive real number
/// that stays positive after rounding.
pub fn load_default_time_limit(config: &SipfileConfig) -> Result<Option<Duration>, SipfileError> {
    match config.var(TIME_LIMIT_VAR)?.expect_scalar(TIME_LIMIT_VAR)? {
        None => Ok(None),
        Some(text) => parse_time_limit(&text).map(Some),
    }
}

fn parse_time_limit(text: &str) -> Result<Duration, SipfileError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SipfileError::MissingTimeLimit);
    }
    let invalid = || SipfileError::InvalidTimeLimit {
        value: text.to_string(),
    };
    let seconds: f64 = text.parse().map_err(|_| invalid())?;
    if !seconds.is_finite() {
        return Err(invalid());
    }
    if seconds <= 0.0 {
        return Err(SipfileError::NonPositiveTimeLimit);
    }

    let nanos = (seconds * 1e9 + 0.5).floor();
    if nanos < 1.0 {
        return Err(SipfileError::TimeLimitTooSmall);
    }
    if nanos >= u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(Duration::from_nanos(nanos as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(contents: &str) -> Result<Option<Duration>, SipfileError> {
        load_default_time_limit(&SipfileConfig::parse(contents).expect("parse"))
    }

    #[test]
    fn unset_is_none() {
        assert_eq!(load("").expect("load"), None);
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let cases = [
            ("default_time_limit = 1.5\n", Duration::from_millis(1500)),
            ("default_time_limit = \"2\"\n", Duration::from_secs(2)),
            ("default_time_limit = 3\n", Duration::from_secs(3)),
        ];
        for (contents, expected) in cases {
            assert_eq!(load(contents).expect("load"), Some(expected), "{contents}");
        }
    }

    #[test]
    fn rounds_to_nearest_nanosecond() {
        let limit = parse_time_limit("0.0000000006").expect("parse");
        assert_eq!(limit, Duration::from_nanos(1));
    }

    #[test]
    fn rejects_bad_values() {
        let check = |value: &str| load(&format!("default_time_limit = {value}\n"));
        assert!(matches!(check("\"\""), Err(SipfileError::MissingTimeLimit)));
        assert!(matches!(check("\"fast\""), Err(SipfileError::InvalidTimeLimit { .. })));
        assert!(matches!(check("\"inf\""), Err(SipfileError::InvalidTimeLimit { .. })));
        assert!(matches!(check("0"), Err(SipfileError::NonPositiveTimeLimit)));
        assert!(matches!(check("-1.0"), Err(SipfileError::NonPositiveTimeLimit)));
        assert!(matches!(check("1e-10"), Err(SipfileError::TimeLimitTooSmall)));
    }

    #[test]
    fn must_not_be_array() {
        assert!(matches!(load("default_time_limit = [1]\n"), Err(SipfileError::Schema { .. })));
    }
}
