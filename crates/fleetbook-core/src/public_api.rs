//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! This module exposes a simplified API that frontends (CLI, GUI, FFI) can
//! rely on without depending on the entire service surface area.

use chrono::NaiveDate;
use uuid::Uuid;

use fleetbook_domain::{Fleet, FleetSummary, MaintenanceAlert, TripDraft, Vehicle};

use crate::{
    maintenance_service::MaintenanceService, summary_service::SummaryService,
    trip_service::TripService, vehicle_service::VehicleService, CoreError,
};

/// Records a trip from form input and returns its identifier.
pub fn api_record_trip(fleet: &mut Fleet, draft: TripDraft) -> Uuid {
    TripService::record(fleet, draft)
}

/// Replaces the trip identified by `trip_id` with the supplied draft.
pub fn api_update_trip(fleet: &mut Fleet, trip_id: Uuid, draft: TripDraft) -> Result<(), CoreError> {
    TripService::update(fleet, trip_id, draft)
}

/// Adds a vehicle to the fleet and returns its identifier.
pub fn api_add_vehicle(
    fleet: &mut Fleet,
    registration_number: impl Into<String>,
    make_model: impl Into<String>,
) -> Result<Uuid, CoreError> {
    VehicleService::add(fleet, Vehicle::new(registration_number, make_model))
}

/// Removes the vehicle identified by `vehicle_id`.
pub fn api_remove_vehicle(fleet: &mut Fleet, vehicle_id: Uuid) -> Result<(), CoreError> {
    VehicleService::remove(fleet, vehicle_id)
}

/// Summarizes the fleet's trips for the dashboard.
pub fn api_fleet_summary(fleet: &Fleet, today: NaiveDate) -> FleetSummary {
    SummaryService::summarize(&fleet.trips, today)
}

/// Lists every urgent maintenance deadline across the fleet.
pub fn api_maintenance_alerts(fleet: &Fleet, today: NaiveDate) -> Vec<MaintenanceAlert> {
    MaintenanceService::fleet_alerts(fleet, today)
}
