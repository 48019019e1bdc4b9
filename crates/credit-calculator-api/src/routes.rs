//! Route handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use chrono::Local;
use credit_calculator_core::schedule::{build_payment_schedule, summarize_schedule};
use credit_calculator_core::{CreditCriteria, CriteriaInput, LoanPayment};
use tracing::info;

use crate::error::ApiError;

/// GET /calculator - amortization schedule for the criteria in the query.
pub async fn get_payment_schedule(
    query: Result<Query<CriteriaInput>, QueryRejection>,
) -> Result<Json<Vec<LoanPayment>>, ApiError> {
    let Query(input) = query?;
    let criteria = CreditCriteria::new(&input)?;

    // One clock sample per request; every period label derives from it
    let today = Local::now().date_naive();
    let schedule = build_payment_schedule(&criteria, today)?;

    let summary = summarize_schedule(&schedule);
    info!(
        principal = %criteria.principal(),
        term_months = criteria.term_months(),
        annual_rate_percent = %criteria.annual_rate_percent(),
        total_interest_paid = %summary.total_interest_paid,
        total_amount_paid = %summary.total_amount_paid,
        "computed payment schedule"
    );

    Ok(Json(schedule))
}
