//! In-memory aggregate of the caller-owned trip and vehicle collections.

use uuid::Uuid;

use crate::{trip::Trip, vehicle::Vehicle};

#[derive(Debug, Clone, Default)]
/// The working set a frontend holds between renders. Persistence mirrors
/// the two collections to storage after every mutation.
pub struct Fleet {
    /// Trips, kept most-recent-first. The summary trend and recent-activity
    /// views take their windows from the head of this list.
    pub trips: Vec<Trip>,
    pub vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front so the most recent trip stays first.
    pub fn add_trip(&mut self, trip: Trip) -> Uuid {
        let id = trip.id;
        self.trips.insert(0, trip);
        id
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Uuid {
        let id = vehicle.id;
        self.vehicles.push(vehicle);
        id
    }

    pub fn trip(&self, id: Uuid) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    pub fn trip_mut(&mut self, id: Uuid) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|trip| trip.id == id)
    }

    pub fn vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}
