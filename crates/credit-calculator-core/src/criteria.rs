use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{CreditError, Violation};
use crate::types::{CriteriaInput, Money, Percent};
use crate::CreditResult;

/// Smallest principal the calculator will amortize.
pub const MIN_PRINCIPAL: Decimal = dec!(100_000);
/// Largest principal the calculator will amortize.
pub const MAX_PRINCIPAL: Decimal = dec!(5_000_000);
/// Shortest supported loan term in months.
pub const MIN_TERM_MONTHS: u32 = 12;
/// Longest supported loan term in months.
pub const MAX_TERM_MONTHS: u32 = 60;
/// Lowest supported annual rate, in percent.
pub const MIN_ANNUAL_RATE: Decimal = dec!(12.9);
/// Highest supported annual rate, in percent.
pub const MAX_ANNUAL_RATE: Decimal = dec!(23.9);

/// Validated calculation criteria.
///
/// The only public way to obtain one is [`CreditCriteria::new`], so the
/// schedule engine can rely on every field being inside the supported domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCriteria {
    pub(crate) principal: Money,
    pub(crate) term_months: u32,
    pub(crate) annual_rate_percent: Percent,
}

impl CreditCriteria {
    /// Validate raw input into usable criteria.
    ///
    /// Checks every field and collects one violation per failed field rather
    /// than stopping at the first, so a caller can report all problems in a
    /// single response. Violations are listed in field declaration order.
    pub fn new(input: &CriteriaInput) -> CreditResult<Self> {
        let mut violations = Vec::new();

        let principal = check_range(
            &mut violations,
            "principal",
            input.principal,
            MIN_PRINCIPAL,
            MAX_PRINCIPAL,
        );
        let term_months = check_range(
            &mut violations,
            "term_months",
            input.term_months,
            MIN_TERM_MONTHS,
            MAX_TERM_MONTHS,
        );
        let annual_rate_percent = check_range(
            &mut violations,
            "annual_rate_percent",
            input.annual_rate_percent,
            MIN_ANNUAL_RATE,
            MAX_ANNUAL_RATE,
        );

        match (principal, term_months, annual_rate_percent) {
            (Some(principal), Some(term_months), Some(annual_rate_percent)) => Ok(Self {
                principal,
                term_months,
                annual_rate_percent,
            }),
            _ => Err(CreditError::Validation(violations)),
        }
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn annual_rate_percent(&self) -> Percent {
        self.annual_rate_percent
    }
}

/// Check one optional field against its inclusive bounds.
///
/// Returns the value only when it passed; otherwise records exactly one
/// violation for the field (a missing field reports only that it is
/// required).
fn check_range<T>(
    violations: &mut Vec<Violation>,
    field: &'static str,
    value: Option<T>,
    min: T,
    max: T,
) -> Option<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    let violation = |message: String| Violation {
        field: field.into(),
        message,
    };

    match value {
        None => {
            violations.push(violation(format!("{field} is required")));
            None
        }
        Some(v) if v < min => {
            violations.push(violation(format!("{field} cannot be less than {min}")));
            None
        }
        Some(v) if v > max => {
            violations.push(violation(format!("{field} cannot be greater than {max}")));
            None
        }
        Some(v) => Some(v),
    }
}
