//! Business logic for recording and revising trips.

use uuid::Uuid;

use crate::CoreError;
use fleetbook_domain::{Fleet, Trip, TripDraft};

/// Provides validated mutations for [`Trip`] entities.
///
/// Every mutation derives the financial fields before the trip lands in the
/// fleet, so stored records always satisfy the derivation invariants. There
/// is no lazy recomputation anywhere downstream.
pub struct TripService;

impl TripService {
    /// Records a new trip from form input and returns its identifier.
    pub fn record(fleet: &mut Fleet, draft: TripDraft) -> Uuid {
        fleet.add_trip(Trip::from_draft(draft))
    }

    /// Replaces an existing trip with the draft, re-deriving from scratch.
    pub fn update(fleet: &mut Fleet, trip_id: Uuid, draft: TripDraft) -> Result<(), CoreError> {
        let trip = fleet
            .trip_mut(trip_id)
            .ok_or(CoreError::TripNotFound(trip_id))?;
        trip.apply_draft(draft);
        Ok(())
    }

    /// Returns the trips currently tracked in the fleet, most recent first.
    pub fn list(fleet: &Fleet) -> &[Trip] {
        &fleet.trips
    }
}
