//! Maintenance alert data surfaced for vehicles with imminent deadlines.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// The due-date fields that participate in urgency scans. Historical
/// service dates are records, not deadlines, and are never flagged.
pub enum MaintenanceField {
    NextServiceDue,
    InsuranceExpiry,
    PollutionExpiry,
}

impl fmt::Display for MaintenanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaintenanceField::NextServiceDue => "Next Service Due",
            MaintenanceField::InsuranceExpiry => "Insurance Expiry",
            MaintenanceField::PollutionExpiry => "Pollution Expiry",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One urgent deadline on one vehicle. `days_remaining` is negative for
/// overdue dates.
pub struct MaintenanceAlert {
    pub vehicle_id: Uuid,
    pub registration_number: String,
    pub field: MaintenanceField,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
}
