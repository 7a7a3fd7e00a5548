//! Business logic helpers for validated vehicle mutations.

use uuid::Uuid;

use crate::CoreError;
use fleetbook_domain::{Fleet, Vehicle};

/// Provides validated mutations for [`Vehicle`] entities.
pub struct VehicleService;

impl VehicleService {
    /// Adds a new vehicle after validating identification fields and
    /// registration uniqueness. Returns the vehicle identifier.
    pub fn add(fleet: &mut Fleet, vehicle: Vehicle) -> Result<Uuid, CoreError> {
        if vehicle.registration_number.trim().is_empty() {
            return Err(CoreError::Validation(
                "Registration number is required".into(),
            ));
        }
        if vehicle.make_model.trim().is_empty() {
            return Err(CoreError::Validation("Make and model are required".into()));
        }
        Self::validate_registration(fleet, &vehicle.registration_number)?;
        Ok(fleet.add_vehicle(vehicle))
    }

    /// Removes a vehicle by id. Trips referencing it are left in place;
    /// the dangling reference is surfaced by [`crate::fleet_warnings`].
    pub fn remove(fleet: &mut Fleet, id: Uuid) -> Result<(), CoreError> {
        let before = fleet.vehicles.len();
        fleet.vehicles.retain(|vehicle| vehicle.id != id);
        if fleet.vehicles.len() == before {
            return Err(CoreError::VehicleNotFound(id));
        }
        Ok(())
    }

    /// Returns a snapshot of the vehicles currently tracked in the fleet.
    pub fn list(fleet: &Fleet) -> &[Vehicle] {
        &fleet.vehicles
    }

    fn validate_registration(fleet: &Fleet, candidate: &str) -> Result<(), CoreError> {
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = fleet
            .vehicles
            .iter()
            .any(|vehicle| vehicle.registration_number.trim().to_ascii_lowercase() == normalized);
        if duplicate {
            Err(CoreError::Validation(format!(
                "Vehicle `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_registrations() {
        let mut fleet = Fleet::new();
        VehicleService::add(&mut fleet, Vehicle::new("KA-01-1234", "Tata Winger"))
            .expect("first add succeeds");

        let err = VehicleService::add(&mut fleet, Vehicle::new("ka-01-1234", "Force Traveller"))
            .expect_err("duplicate must fail");
        assert!(
            matches!(err, CoreError::Validation(ref message) if message.contains("already exists")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn add_rejects_blank_identification() {
        let mut fleet = Fleet::new();

        let err = VehicleService::add(&mut fleet, Vehicle::new("  ", "Tata Winger"))
            .expect_err("blank registration must fail");
        assert!(matches!(err, CoreError::Validation(_)));

        let err = VehicleService::add(&mut fleet, Vehicle::new("KA-01-1234", ""))
            .expect_err("blank make/model must fail");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut fleet = Fleet::new();
        let id = VehicleService::add(&mut fleet, Vehicle::new("KA-01-1234", "Tata Winger"))
            .expect("add succeeds");

        VehicleService::remove(&mut fleet, id).expect("remove succeeds");
        assert!(fleet.vehicles.is_empty());

        let err = VehicleService::remove(&mut fleet, id).expect_err("second remove fails");
        assert!(matches!(err, CoreError::VehicleNotFound(missing) if missing == id));
    }
}
