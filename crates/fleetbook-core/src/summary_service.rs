//! Aggregation of the trip collection into dashboard summaries.

use chrono::{Datelike, NaiveDate};

use fleetbook_domain::{FleetSummary, PaymentStatus, RecentTrip, TrendPoint, Trip};

/// Number of trips feeding the trend series.
pub const TREND_WINDOW: usize = 7;
/// Number of trips shown in the recent-activity view.
pub const RECENT_WINDOW: usize = 5;

/// Folds the caller-ordered trip collection into time-windowed summaries.
///
/// Precondition: callers keep the collection most-recent-first; the trend
/// and recent views are taken from the head of the slice. [`summarize`]
/// never reorders or mutates its input.
///
/// [`summarize`]: SummaryService::summarize
pub struct SummaryService;

impl SummaryService {
    pub fn summarize(trips: &[Trip], today: NaiveDate) -> FleetSummary {
        let monthly: Vec<&Trip> = trips
            .iter()
            .filter(|trip| {
                trip.date.month() == today.month() && trip.date.year() == today.year()
            })
            .collect();

        let monthly_income: f64 = monthly.iter().map(|trip| trip.total_amount).sum();
        let monthly_expense: f64 = monthly.iter().map(|trip| trip.total_expense).sum();

        let pending_driver_pay: f64 = trips
            .iter()
            .filter(|trip| trip.driver_payment.payment_status == PaymentStatus::Pending)
            .map(|trip| trip.driver_payment.balance_payable)
            .sum();

        let mut trend: Vec<TrendPoint> = trips
            .iter()
            .take(TREND_WINDOW)
            .map(|trip| TrendPoint {
                date: trip.date,
                income: trip.total_amount,
                expense: trip.total_expense,
                profit: trip.net_profit,
            })
            .collect();
        trend.reverse();

        let recent: Vec<RecentTrip> = trips
            .iter()
            .take(RECENT_WINDOW)
            .map(|trip| RecentTrip {
                customer_name: trip.customer_name.clone(),
                date: trip.date,
                net_profit: trip.net_profit,
            })
            .collect();

        FleetSummary {
            monthly_income,
            monthly_expense,
            monthly_net_profit: monthly_income - monthly_expense,
            pending_driver_pay,
            trend,
            recent,
        }
    }
}
