use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Interest rates quoted in percent per annum (12.9 = 12.9%).
pub type Percent = Decimal;

/// Raw calculation criteria as received from a caller, before validation.
///
/// Every field is optional so a transport can bind an incomplete request and
/// still report all missing or out-of-range fields in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriteriaInput {
    pub principal: Option<Money>,
    pub term_months: Option<u32>,
    pub annual_rate_percent: Option<Percent>,
}

/// One month's installment in an amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPayment {
    /// 1-based month index, counted from the schedule start.
    pub month_number: u32,
    /// Calendar month the payment falls due, formatted MM/yyyy.
    pub period_label: String,
    /// Portion of the payment that reduces outstanding principal.
    pub principal_component: Money,
    /// Interest accrued on the balance carried into this month.
    pub interest_component: Money,
    /// Principal still outstanding after this payment is applied.
    pub remaining_balance: Money,
    /// Total amount due this month.
    pub total_payment: Money,
}

/// Aggregate totals over a completed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months: u32,
    pub total_principal_paid: Money,
    pub total_interest_paid: Money,
    pub total_amount_paid: Money,
}
