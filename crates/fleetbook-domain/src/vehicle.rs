//! Domain model for fleet vehicles and their maintenance dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One fleet asset. Pure data record: nothing on it is derived or
/// recomputed. Maintenance dates are `None` until the caller supplies them.
pub struct Vehicle {
    pub id: Uuid,
    pub registration_number: String,
    pub make_model: String,
    #[serde(default)]
    pub last_service_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_service_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub oil_change_date: Option<NaiveDate>,
    #[serde(default)]
    pub tyre_change_date: Option<NaiveDate>,
    #[serde(default)]
    pub brake_service_date: Option<NaiveDate>,
    #[serde(default)]
    pub battery_replacement_date: Option<NaiveDate>,
    #[serde(default)]
    pub insurance_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub pollution_expiry_date: Option<NaiveDate>,
}

impl Vehicle {
    pub fn new(registration_number: impl Into<String>, make_model: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            registration_number: registration_number.into(),
            make_model: make_model.into(),
            last_service_date: None,
            next_service_due_date: None,
            oil_change_date: None,
            tyre_change_date: None,
            brake_service_date: None,
            battery_replacement_date: None,
            insurance_expiry_date: None,
            pollution_expiry_date: None,
        }
    }
}

impl Identifiable for Vehicle {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Vehicle {
    fn display_label(&self) -> String {
        format!("{} ({})", self.registration_number, self.make_model)
    }
}
