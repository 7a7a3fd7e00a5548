use std::collections::HashSet;

use fleetbook_domain::{Fleet, Trip, Vehicle};

use crate::CoreError;

/// Abstraction over persistence backends for the two fleet collections.
///
/// Collections are rewritten in full on every save. Implementations are
/// expected to fall back on load rather than fail: a missing or unreadable
/// trip blob yields an empty collection, a missing or unreadable vehicle
/// blob yields a single starter record.
pub trait FleetStorage: Send + Sync {
    fn save_trips(&self, trips: &[Trip]) -> Result<(), CoreError>;
    fn load_trips(&self) -> Result<Vec<Trip>, CoreError>;
    fn save_vehicles(&self, vehicles: &[Vehicle]) -> Result<(), CoreError>;
    fn load_vehicles(&self) -> Result<Vec<Vehicle>, CoreError>;

    /// Loads both collections into a fresh in-memory aggregate.
    fn load_fleet(&self) -> Result<Fleet, CoreError> {
        Ok(Fleet {
            trips: self.load_trips()?,
            vehicles: self.load_vehicles()?,
        })
    }

    /// Mirrors both collections to storage.
    fn save_fleet(&self, fleet: &Fleet) -> Result<(), CoreError> {
        self.save_trips(&fleet.trips)?;
        self.save_vehicles(&fleet.vehicles)
    }
}

/// Detects dangling references and odometer anomalies within a fleet
/// snapshot. Warnings inform the caller; they never fail a save.
pub fn fleet_warnings(fleet: &Fleet) -> Vec<String> {
    let vehicle_ids: HashSet<_> = fleet.vehicles.iter().map(|v| v.id).collect();
    let mut warnings = Vec::new();

    for trip in &fleet.trips {
        if let Some(vehicle_id) = trip.vehicle_id {
            if !vehicle_ids.contains(&vehicle_id) {
                warnings.push(format!(
                    "trip {} references unknown vehicle {}",
                    trip.id, vehicle_id
                ));
            }
        }
        if trip.total_distance < 0.0 {
            warnings.push(format!(
                "trip {} has end odometer below start odometer",
                trip.id
            ));
        }
    }
    warnings
}
