//! Urgency evaluation for vehicle maintenance and insurance deadlines.

use chrono::NaiveDate;

use fleetbook_domain::{Fleet, MaintenanceAlert, MaintenanceField, Vehicle};

/// A deadline is urgent when it falls within this many days, exclusive.
pub const URGENCY_HORIZON_DAYS: i64 = 7;

/// Classifies maintenance due dates against a reference day.
pub struct MaintenanceService;

impl MaintenanceService {
    /// Returns whether a due date needs attention: due today through six
    /// days out, or already overdue. A missing date is never urgent.
    pub fn is_urgent(due: Option<NaiveDate>, today: NaiveDate) -> bool {
        match due {
            Some(date) => (date - today).num_days() < URGENCY_HORIZON_DAYS,
            None => false,
        }
    }

    /// Parses a raw form value into a due date. Blank and unparseable input
    /// both become `None`, which downstream treats as not due.
    pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }

    /// Scans one vehicle's due-date fields and returns an alert per urgent
    /// deadline, in field order.
    pub fn vehicle_alerts(vehicle: &Vehicle, today: NaiveDate) -> Vec<MaintenanceAlert> {
        let deadlines = [
            (MaintenanceField::NextServiceDue, vehicle.next_service_due_date),
            (MaintenanceField::InsuranceExpiry, vehicle.insurance_expiry_date),
            (MaintenanceField::PollutionExpiry, vehicle.pollution_expiry_date),
        ];
        deadlines
            .into_iter()
            .filter_map(|(field, due)| {
                let due_date = due?;
                if !Self::is_urgent(Some(due_date), today) {
                    return None;
                }
                Some(MaintenanceAlert {
                    vehicle_id: vehicle.id,
                    registration_number: vehicle.registration_number.clone(),
                    field,
                    due_date,
                    days_remaining: (due_date - today).num_days(),
                })
            })
            .collect()
    }

    /// Scans every vehicle in the fleet.
    pub fn fleet_alerts(fleet: &Fleet, today: NaiveDate) -> Vec<MaintenanceAlert> {
        fleet
            .vehicles
            .iter()
            .flat_map(|vehicle| Self::vehicle_alerts(vehicle, today))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn missing_date_is_never_urgent() {
        assert!(!MaintenanceService::is_urgent(None, today()));
    }

    #[test]
    fn urgency_boundaries_follow_seven_day_horizon() {
        let reference = today();
        assert!(MaintenanceService::is_urgent(Some(reference), reference));
        assert!(MaintenanceService::is_urgent(
            Some(reference + Duration::days(6)),
            reference
        ));
        assert!(!MaintenanceService::is_urgent(
            Some(reference + Duration::days(7)),
            reference
        ));
        assert!(MaintenanceService::is_urgent(
            Some(reference - Duration::days(1)),
            reference
        ));
    }

    #[test]
    fn parse_treats_blank_and_garbage_as_unset() {
        assert_eq!(MaintenanceService::parse_due_date(""), None);
        assert_eq!(MaintenanceService::parse_due_date("   "), None);
        assert_eq!(MaintenanceService::parse_due_date("soonish"), None);
        assert_eq!(
            MaintenanceService::parse_due_date("2024-08-15"),
            NaiveDate::from_ymd_opt(2024, 8, 15)
        );
    }

    #[test]
    fn vehicle_alerts_cover_only_urgent_deadlines() {
        let mut vehicle = Vehicle::new("KA-01-1234", "Tata Winger");
        vehicle.next_service_due_date = Some(today() + Duration::days(3));
        vehicle.insurance_expiry_date = None;
        vehicle.pollution_expiry_date = Some(today() + Duration::days(30));

        let alerts = MaintenanceService::vehicle_alerts(&vehicle, today());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].field, MaintenanceField::NextServiceDue);
        assert_eq!(alerts[0].days_remaining, 3);
    }

    #[test]
    fn fleet_alerts_flag_overdue_dates() {
        let mut fleet = Fleet::new();
        let mut vehicle = Vehicle::new("KA-01-1234", "Tata Winger");
        vehicle.insurance_expiry_date = Some(today() - Duration::days(2));
        fleet.add_vehicle(vehicle);

        let alerts = MaintenanceService::fleet_alerts(&fleet, today());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].field, MaintenanceField::InsuranceExpiry);
        assert_eq!(alerts[0].days_remaining, -2);
    }
}
