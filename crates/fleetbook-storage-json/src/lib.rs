//! Filesystem-backed JSON persistence for the two fleet collections.
//!
//! Each collection lives in its own named blob and is rewritten in full on
//! every save. Loads never fail: a missing or unreadable trip blob falls
//! back to an empty collection, a missing or unreadable vehicle blob to a
//! single starter record.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

use fleetbook_core::{CoreError, FleetStorage};
use fleetbook_domain::{Trip, Vehicle};

const TRIPS_FILE: &str = "trips.json";
const VEHICLES_FILE: &str = "vehicles.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence rooted at a single data directory.
#[derive(Debug, Clone)]
pub struct JsonFleetStorage {
    data_dir: PathBuf,
}

impl JsonFleetStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn trips_path(&self) -> PathBuf {
        self.data_dir.join(TRIPS_FILE)
    }

    pub fn vehicles_path(&self) -> PathBuf {
        self.data_dir.join(VEHICLES_FILE)
    }
}

impl FleetStorage for JsonFleetStorage {
    fn save_trips(&self, trips: &[Trip]) -> Result<(), CoreError> {
        save_collection(&self.trips_path(), trips)
    }

    fn load_trips(&self) -> Result<Vec<Trip>, CoreError> {
        Ok(load_collection(&self.trips_path(), Vec::new))
    }

    fn save_vehicles(&self, vehicles: &[Vehicle]) -> Result<(), CoreError> {
        save_collection(&self.vehicles_path(), vehicles)
    }

    fn load_vehicles(&self) -> Result<Vec<Vehicle>, CoreError> {
        Ok(load_collection(&self.vehicles_path(), || {
            vec![starter_vehicle()]
        }))
    }
}

/// The record a fresh installation starts with, so the vehicle views are
/// never empty on first launch.
pub fn starter_vehicle() -> Vehicle {
    let mut vehicle = Vehicle::new("AB-123-CD", "Toyota Sienna 2022");
    vehicle.last_service_date = NaiveDate::from_ymd_opt(2023, 10, 1);
    vehicle.next_service_due_date = NaiveDate::from_ymd_opt(2024, 4, 1);
    vehicle.oil_change_date = NaiveDate::from_ymd_opt(2023, 10, 1);
    vehicle.insurance_expiry_date = NaiveDate::from_ymd_opt(2024, 8, 15);
    vehicle
}

fn save_collection<T: Serialize>(path: &Path, collection: &[T]) -> Result<(), CoreError> {
    let json = serde_json::to_string_pretty(collection)
        .map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn load_collection<T: DeserializeOwned>(path: &Path, fallback: impl FnOnce() -> T) -> T {
    if !path.exists() {
        return fallback();
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!("failed to read {}: {err}", path.display());
            return fallback();
        }
    };
    match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}", path.display());
            fallback()
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
