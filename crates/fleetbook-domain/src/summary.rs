//! Aggregated reporting types for the fleet dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One point in the bounded trend series, oldest first.
pub struct TrendPoint {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One row of the recent-activity view.
pub struct RecentTrip {
    pub customer_name: String,
    pub date: NaiveDate,
    pub net_profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Dashboard summary over the caller-ordered trip collection.
///
/// Monthly totals cover trips dated in the reference month; pending driver
/// pay covers the entire collection regardless of month.
pub struct FleetSummary {
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub monthly_net_profit: f64,
    pub pending_driver_pay: f64,
    pub trend: Vec<TrendPoint>,
    pub recent: Vec<RecentTrip>,
}
