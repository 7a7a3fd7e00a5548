//! Shared traits for fleet bookkeeping entities.

use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the fleet.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
