use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSellRequest {
    #[validate(range(min = 1, message = "user_id must be a positive id"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "product_id must be a positive id"))]
    pub product_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSellRequest {
    #[validate(range(min = 1, message = "user_id must be a positive id"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "product_id must be a positive id"))]
    pub product_id: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
pub struct IntervalParams {
    /// Lookback window, e.g. `7 days` or `1 hour`.
    pub interval: Option<String>,
}

/// Time units accepted in an interval expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl IntervalUnit {
    fn parse(token: &str) -> Option<Self> {
        let lowered = token.to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(&lowered);

        match singular {
            "second" => Some(Self::Second),
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "seconds",
            Self::Minute => "minutes",
            Self::Hour => "hours",
            Self::Day => "days",
            Self::Week => "weeks",
            Self::Month => "months",
            Self::Year => "years",
        }
    }
}

/// A validated lookback window such as "7 days".
///
/// Only a whole number followed by a unit from the fixed set above is
/// accepted, so the rendered value is safe to hand to the database as a
/// bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalFilter {
    quantity: u32,
    unit: IntervalUnit,
}

impl IntervalFilter {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut tokens = raw.split_whitespace();

        let (Some(quantity), Some(unit), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(format!(
                "interval must look like '<count> <unit>', got '{raw}'"
            ));
        };

        let quantity = quantity
            .parse::<u32>()
            .map_err(|_| format!("interval count '{quantity}' must be a whole number"))?;

        let unit = IntervalUnit::parse(unit).ok_or_else(|| {
            format!(
                "interval unit '{unit}' is not one of seconds, minutes, hours, days, weeks, months or years"
            )
        })?;

        Ok(Self { quantity, unit })
    }
}

impl fmt::Display for IntervalFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plural_unit() {
        let filter = IntervalFilter::parse("7 days").unwrap();
        assert_eq!(filter.to_string(), "7 days");
    }

    #[test]
    fn accepts_singular_unit() {
        let filter = IntervalFilter::parse("1 hour").unwrap();
        assert_eq!(filter.to_string(), "1 hours");
    }

    #[test]
    fn unit_is_case_insensitive() {
        let filter = IntervalFilter::parse("30 MINUTES").unwrap();
        assert_eq!(filter.to_string(), "30 minutes");
    }

    #[test]
    fn rejects_injection_attempt() {
        assert!(IntervalFilter::parse("7; DROP TABLE bargains").is_err());
    }

    #[test]
    fn rejects_swapped_tokens() {
        assert!(IntervalFilter::parse("days 7").is_err());
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = IntervalFilter::parse("7 fortnights").unwrap_err();
        assert!(err.contains("fortnight"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(IntervalFilter::parse("").is_err());
    }

    #[test]
    fn rejects_fractional_count() {
        assert!(IntervalFilter::parse("1.5 days").is_err());
    }
}
