use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::criteria::CreditCriteria;
use crate::error::CreditError;
use crate::types::{LoanPayment, Money, Percent, ScheduleSummary};
use crate::CreditResult;

/// Fractional digits kept on rates and discount factors.
const RATE_SCALE: u32 = 9;
/// Fractional digits kept on monetary amounts.
const MONEY_SCALE: u32 = 2;
/// Divisor turning a percent annual rate into a fractional monthly rate
/// (12 months x 100 percent).
const PERCENT_TO_MONTHLY: Decimal = dec!(1200);

/// Build the full annuity amortization schedule for validated criteria.
///
/// The fixed monthly payment is computed once up front; each month's interest
/// is rounded to cents and the principal portion is the remainder, so the two
/// always sum to the fixed payment exactly. The final month repays whatever
/// balance is left, which makes its total differ from the fixed payment by
/// the accumulated rounding and leaves the closing balance at exactly zero.
///
/// `anchor` is the date the schedule is computed against; the payment for
/// month `n` is labelled with the calendar month `anchor + n` months.
pub fn build_payment_schedule(
    criteria: &CreditCriteria,
    anchor: NaiveDate,
) -> CreditResult<Vec<LoanPayment>> {
    let term_months = criteria.term_months;
    if term_months == 0 {
        return Err(CreditError::Internal(
            "term_months must be at least 1".into(),
        ));
    }

    let rate = monthly_rate(criteria.annual_rate_percent);
    if rate <= Decimal::ZERO {
        return Err(CreditError::Internal(
            "monthly rate must be positive".into(),
        ));
    }

    let payment = monthly_payment(criteria.principal, term_months, rate)?;

    let mut payments = Vec::with_capacity(term_months as usize);
    let mut remaining = criteria.principal;

    for month in 1..term_months {
        let interest = round_money(remaining * rate);
        let principal_part = payment - interest;
        remaining -= principal_part;
        payments.push(LoanPayment {
            month_number: month,
            period_label: period_label(anchor, month)?,
            principal_component: principal_part,
            interest_component: interest,
            remaining_balance: remaining,
            total_payment: payment,
        });
    }

    // Final month: repay the remaining balance in full.
    let interest = round_money(remaining * rate);
    payments.push(LoanPayment {
        month_number: term_months,
        period_label: period_label(anchor, term_months)?,
        principal_component: remaining,
        interest_component: interest,
        remaining_balance: Decimal::ZERO,
        total_payment: interest + remaining,
    });

    Ok(payments)
}

/// Aggregate totals for a finished schedule.
pub fn summarize_schedule(payments: &[LoanPayment]) -> ScheduleSummary {
    let mut total_principal_paid = Decimal::ZERO;
    let mut total_interest_paid = Decimal::ZERO;
    let mut total_amount_paid = Decimal::ZERO;

    for payment in payments {
        total_principal_paid += payment.principal_component;
        total_interest_paid += payment.interest_component;
        total_amount_paid += payment.total_payment;
    }

    ScheduleSummary {
        months: payments.len() as u32,
        total_principal_paid,
        total_interest_paid,
        total_amount_paid,
    }
}

/// Fractional monthly rate for a percent annual rate: P = Pg / 1200.
fn monthly_rate(annual_rate_percent: Percent) -> Decimal {
    round_rate(annual_rate_percent / PERCENT_TO_MONTHLY)
}

/// Fixed annuity payment: X = S * P / (1 - (1 + P)^-N).
fn monthly_payment(principal: Money, term_months: u32, rate: Decimal) -> CreditResult<Money> {
    let growth = (Decimal::ONE + rate)
        .checked_powi(i64::from(term_months))
        .ok_or_else(|| CreditError::Internal("growth factor overflow in annuity payment".into()))?;
    if growth.is_zero() {
        return Err(CreditError::Internal(
            "zero growth factor in annuity payment".into(),
        ));
    }

    let annuity_factor = Decimal::ONE - round_rate(Decimal::ONE / growth);
    if annuity_factor.is_zero() {
        return Err(CreditError::Internal(
            "annuity factor is zero".into(),
        ));
    }

    Ok(round_money(principal * rate / annuity_factor))
}

/// Calendar month the payment for `month_number` falls due, as MM/yyyy.
fn period_label(anchor: NaiveDate, month_number: u32) -> CreditResult<String> {
    let due = anchor
        .checked_add_months(Months::new(month_number))
        .ok_or_else(|| {
            CreditError::Internal(format!("payment date out of range for month {month_number}"))
        })?;
    Ok(due.format("%m/%Y").to_string())
}

fn round_money(value: Decimal) -> Money {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
