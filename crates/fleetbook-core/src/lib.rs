//! fleetbook-core
//!
//! Business logic and services for Fleetbook.
//! Depends on fleetbook-domain. No terminal I/O, no network, no direct
//! storage interactions; persistence goes through the [`storage`] trait.

pub mod error;
pub mod maintenance_service;
pub mod public_api;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod trip_service;
pub mod vehicle_service;

pub use error::CoreError;
pub use maintenance_service::*;
pub use public_api::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use trip_service::*;
pub use vehicle_service::*;
