//! Domain models for logged trips and their financial derivations.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates how a driver settlement was (or will be) paid out.
#[derive(Default)]
pub enum PaymentMode {
    #[default]
    Cash,
    Upi,
    BankTransfer,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::BankTransfer => "Bank Transfer",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Indicates whether the driver balance for a trip has been settled.
#[derive(Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
/// Itemized trip expenses. `fuel_qty` is liters and never enters totals.
pub struct ExpenseBreakdown {
    #[serde(default)]
    pub fuel_cost: f64,
    #[serde(default)]
    pub fuel_qty: f64,
    #[serde(default)]
    pub toll_charges: f64,
    #[serde(default)]
    pub parking_charges: f64,
    #[serde(default)]
    pub other_expenses: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
/// Raw driver pay terms as entered on the trip form.
pub struct DriverPayTerms {
    #[serde(default)]
    pub total_driver_pay: f64,
    #[serde(default)]
    pub advance_paid: f64,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Driver settlement as stored on a trip: raw terms plus derived balance
/// and status. `balance_payable` and `payment_status` are recomputed on
/// every save and never edited independently.
pub struct DriverSettlement {
    #[serde(default)]
    pub total_driver_pay: f64,
    #[serde(default)]
    pub advance_paid: f64,
    #[serde(default)]
    pub balance_payable: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

impl Default for DriverSettlement {
    fn default() -> Self {
        Self {
            total_driver_pay: 0.0,
            advance_paid: 0.0,
            balance_payable: 0.0,
            payment_status: PaymentStatus::Pending,
            payment_mode: PaymentMode::Cash,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Raw trip form input: every editable field, none of the derived ones.
/// Defaults are filled here, once, so downstream code never coalesces.
pub struct TripDraft {
    pub date: NaiveDate,
    pub vehicle_id: Option<Uuid>,
    pub driver_name: String,
    pub driver_contact: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub start_time: String,
    pub end_time: String,
    pub total_amount: f64,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub expenses: ExpenseBreakdown,
    pub driver_pay: DriverPayTerms,
    pub notes: String,
}

impl TripDraft {
    /// Creates an empty draft for the given trip date. Numeric fields start
    /// at zero and text fields empty, matching a blank trip form.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            vehicle_id: None,
            driver_name: String::new(),
            driver_contact: String::new(),
            customer_name: String::new(),
            customer_contact: String::new(),
            pickup_location: String::new(),
            drop_location: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            total_amount: 0.0,
            start_odometer: 0.0,
            end_odometer: 0.0,
            expenses: ExpenseBreakdown::default(),
            driver_pay: DriverPayTerms::default(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Financial fields derived from a [`TripDraft`].
pub struct TripFinancials {
    pub total_distance: f64,
    pub total_expense: f64,
    pub net_profit: f64,
    pub balance_payable: f64,
    pub payment_status: PaymentStatus,
}

impl TripFinancials {
    /// Derives every computed trip field from raw form input.
    ///
    /// Pure and total: inputs are taken as given, signs included. A negative
    /// distance (end odometer below start) passes through unchanged; a zero
    /// or negative driver balance maps to [`PaymentStatus::Paid`].
    pub fn derive(draft: &TripDraft) -> Self {
        let expenses = &draft.expenses;
        let pay = &draft.driver_pay;

        let total_expense = expenses.fuel_cost
            + expenses.toll_charges
            + expenses.parking_charges
            + expenses.other_expenses
            + pay.total_driver_pay;
        let net_profit = draft.total_amount - total_expense;
        let total_distance = draft.end_odometer - draft.start_odometer;
        let balance_payable = pay.total_driver_pay - pay.advance_paid;
        let payment_status = if balance_payable <= 0.0 {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        };

        Self {
            total_distance,
            total_expense,
            net_profit,
            balance_payable,
            payment_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One logged journey with its derived financial fields.
pub struct Trip {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub vehicle_id: Option<Uuid>,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub driver_contact: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub drop_location: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub expenses: ExpenseBreakdown,
    #[serde(default)]
    pub driver_payment: DriverSettlement,
    #[serde(default)]
    pub start_odometer: f64,
    #[serde(default)]
    pub end_odometer: f64,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub total_expense: f64,
    #[serde(default)]
    pub net_profit: f64,
    #[serde(default)]
    pub notes: String,
}

impl Trip {
    /// Builds a trip from form input with a freshly generated id.
    pub fn from_draft(draft: TripDraft) -> Self {
        Self::assemble(Uuid::new_v4(), draft)
    }

    /// Replaces every raw field from the draft and re-derives the computed
    /// ones from scratch. The id is preserved; nothing else survives.
    pub fn apply_draft(&mut self, draft: TripDraft) {
        *self = Self::assemble(self.id, draft);
    }

    fn assemble(id: Uuid, draft: TripDraft) -> Self {
        let financials = TripFinancials::derive(&draft);
        Self {
            id,
            date: draft.date,
            vehicle_id: draft.vehicle_id,
            driver_name: draft.driver_name,
            driver_contact: draft.driver_contact,
            customer_name: draft.customer_name,
            customer_contact: draft.customer_contact,
            pickup_location: draft.pickup_location,
            drop_location: draft.drop_location,
            start_time: draft.start_time,
            end_time: draft.end_time,
            total_amount: draft.total_amount,
            expenses: draft.expenses,
            driver_payment: DriverSettlement {
                total_driver_pay: draft.driver_pay.total_driver_pay,
                advance_paid: draft.driver_pay.advance_paid,
                balance_payable: financials.balance_payable,
                payment_status: financials.payment_status,
                payment_mode: draft.driver_pay.payment_mode,
            },
            start_odometer: draft.start_odometer,
            end_odometer: draft.end_odometer,
            total_distance: financials.total_distance,
            total_expense: financials.total_expense,
            net_profit: financials.net_profit,
            notes: draft.notes,
        }
    }
}

impl Identifiable for Trip {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Trip {
    fn display_label(&self) -> String {
        format!("trip:{} [{}]", self.id, self.driver_payment.payment_status)
    }
}
