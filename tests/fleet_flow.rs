use chrono::NaiveDate;
use tempfile::tempdir;

use fleetbook::config::{Config, ConfigManager};
use fleetbook::domain::{MaintenanceField, PaymentStatus, TripDraft, Vehicle};
use fleetbook::services::{
    api_add_vehicle, api_fleet_summary, api_maintenance_alerts, api_record_trip, api_update_trip,
    fleet_warnings, FleetStorage, VehicleService,
};
use fleetbook::storage::JsonFleetStorage;

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()
}

fn trip_draft(day: u32, advance_paid: f64) -> TripDraft {
    let mut draft = TripDraft::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap());
    draft.customer_name = format!("Customer {day}");
    draft.total_amount = 500.0;
    draft.start_odometer = 1000.0;
    draft.end_odometer = 1120.0;
    draft.expenses.fuel_cost = 50.0;
    draft.expenses.toll_charges = 10.0;
    draft.expenses.parking_charges = 5.0;
    draft.driver_pay.total_driver_pay = 100.0;
    draft.driver_pay.advance_paid = advance_paid;
    draft
}

#[test]
fn bookkeeping_flow_from_config_to_reload() {
    let dir = tempdir().expect("tempdir");

    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("config manager");
    let mut config = Config::default();
    config.data_root = Some(dir.path().join("data"));
    manager.save(&config).expect("save config");
    let config = manager.load().expect("load config");

    let storage = JsonFleetStorage::new(config.resolve_data_root()).expect("create storage");
    let mut fleet = storage.load_fleet().expect("load fleet");

    // Fresh installation: no trips yet, one starter vehicle.
    assert!(fleet.trips.is_empty());
    assert_eq!(fleet.vehicles.len(), 1);

    let van_id = api_add_vehicle(&mut fleet, "KA-01-1234", "Tata Winger").expect("add vehicle");

    let mut settled = trip_draft(12, 100.0);
    settled.vehicle_id = Some(van_id);
    let settled_id = api_record_trip(&mut fleet, settled);

    let mut owing = trip_draft(20, 60.0);
    owing.vehicle_id = Some(van_id);
    api_record_trip(&mut fleet, owing);

    let trip = fleet.trip(settled_id).expect("trip stored");
    assert_eq!(trip.total_distance, 120.0);
    assert_eq!(trip.total_expense, 165.0);
    assert_eq!(trip.net_profit, 335.0);
    assert_eq!(trip.driver_payment.payment_status, PaymentStatus::Paid);

    let summary = api_fleet_summary(&fleet, reference_day());
    assert_eq!(summary.monthly_income, 1000.0);
    assert_eq!(summary.monthly_expense, 330.0);
    assert_eq!(summary.monthly_net_profit, 670.0);
    assert_eq!(summary.pending_driver_pay, 40.0);
    assert_eq!(summary.trend.len(), 2);
    assert_eq!(summary.recent[0].customer_name, "Customer 20");

    // Settling the outstanding advance clears the pending balance.
    let mut paid_off = trip_draft(20, 100.0);
    paid_off.vehicle_id = Some(van_id);
    let owing_id = fleet.trips[0].id;
    api_update_trip(&mut fleet, owing_id, paid_off).expect("update trip");
    let summary = api_fleet_summary(&fleet, reference_day());
    assert_eq!(summary.pending_driver_pay, 0.0);

    // The starter vehicle's service date falls inside the urgency horizon.
    let alerts = api_maintenance_alerts(&fleet, reference_day());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].field, MaintenanceField::NextServiceDue);
    assert_eq!(alerts[0].days_remaining, 4);

    assert!(fleet_warnings(&fleet).is_empty());

    storage.save_fleet(&fleet).expect("save fleet");
    let reloaded = storage.load_fleet().expect("reload fleet");
    assert_eq!(reloaded.trips, fleet.trips);
    assert_eq!(reloaded.vehicles, fleet.vehicles);

    // Deleting the vehicle leaves its trips behind with a dangling
    // reference that the warning scan surfaces.
    let mut fleet = reloaded;
    VehicleService::remove(&mut fleet, van_id).expect("remove vehicle");
    let warnings = fleet_warnings(&fleet);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|warning| warning.contains("unknown vehicle")));
}

#[test]
fn starter_vehicle_is_replaced_once_real_assets_exist() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonFleetStorage::new(dir.path().join("data")).expect("create storage");

    let mut fleet = storage.load_fleet().expect("load fleet");
    let starter_id = fleet.vehicles[0].id;
    VehicleService::remove(&mut fleet, starter_id).expect("remove starter");
    VehicleService::add(&mut fleet, Vehicle::new("MH-12-4321", "Force Traveller"))
        .expect("add real vehicle");
    storage.save_fleet(&fleet).expect("save fleet");

    let reloaded = storage.load_fleet().expect("reload fleet");
    assert_eq!(reloaded.vehicles.len(), 1);
    assert_eq!(reloaded.vehicles[0].registration_number, "MH-12-4321");
}
