//! fleetbook-domain
//!
//! Pure domain models (Trip, Vehicle, Fleet, summaries, maintenance alerts).
//! No I/O, no services, no storage. Only data types and derivations.

pub mod common;
pub mod fleet;
pub mod maintenance;
pub mod summary;
pub mod trip;
pub mod vehicle;

pub use common::*;
pub use fleet::*;
pub use maintenance::*;
pub use summary::*;
pub use trip::*;
pub use vehicle::*;
