//! fleetbook-insights
//!
//! Outbound generative-AI integration: summarizes recent fleet activity
//! into prose business insights through a single best-effort call. Every
//! failure degrades to a fixed user-facing string; nothing here ever
//! propagates an error into the bookkeeping data path.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use fleetbook_domain::{Trip, Vehicle};

/// Model identifier sent to the generation endpoint.
pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-3-flash-preview";
/// Number of trips from the head of the collection fed to the model.
pub const ANALYSIS_WINDOW: usize = 10;

/// Returned when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "API key not configured. Add a Gemini API key to enable insights.";
/// Returned when the request fails for any reason.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to generate insights at this time.";
/// Returned when the endpoint answers with no candidate text.
pub const EMPTY_MESSAGE: &str = "No insights generated.";

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
enum InsightError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the insight endpoint. Construct once and reuse; the
/// underlying HTTP client pools connections.
pub struct InsightClient {
    api_key: Option<String>,
    model: String,
    http: reqwest::blocking::Client,
}

impl InsightClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Produces prose insights over recent fleet activity.
    ///
    /// One request, no retry. A missing key, a transport failure, or an
    /// empty answer each map to their fixed fallback string, so the caller
    /// always gets something to render.
    pub fn generate_business_insight(&self, trips: &[Trip], vehicles: &[Vehicle]) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        let prompt = build_prompt(&data_summary(trips, vehicles));
        match self.request_insight(key, &prompt) {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_MESSAGE.to_string(),
            Err(err) => {
                tracing::warn!("insight request failed: {err}");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    fn request_insight(&self, key: &str, prompt: &str) -> Result<Option<String>, InsightError> {
        let url = format!("{}/{}:generateContent", GEMINI_ENDPOINT, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        let response = self
            .http
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()?
            .error_for_status()?;
        let decoded: GenerateContentResponse = response.json()?;
        Ok(decoded.first_text())
    }
}

/// Condenses the fleet into the compact JSON document sent to the model:
/// total trip count, per-vehicle service deadlines, and the head of the
/// trip collection with profit and fuel cost per km.
pub fn data_summary(trips: &[Trip], vehicles: &[Vehicle]) -> serde_json::Value {
    let recent: Vec<serde_json::Value> = trips
        .iter()
        .take(ANALYSIS_WINDOW)
        .map(|trip| {
            let efficiency = if trip.total_distance > 0.0 {
                format!("{:.2}", trip.expenses.fuel_cost / trip.total_distance)
            } else {
                "0".to_string()
            };
            json!({
                "date": trip.date,
                "profit": trip.net_profit,
                "efficiency": efficiency,
                "notes": trip.notes,
            })
        })
        .collect();

    json!({
        "totalTrips": trips.len(),
        "vehicles": vehicles
            .iter()
            .map(|vehicle| json!({
                "reg": vehicle.registration_number,
                "nextService": vehicle.next_service_due_date,
            }))
            .collect::<Vec<_>>(),
        "recentTripPerformance": recent,
    })
}

fn build_prompt(summary: &serde_json::Value) -> String {
    format!(
        "Act as a business consultant for a fleet operator. Analyze the \
         following operational data (JSON).\n\
         Provide 3 brief, bulleted, actionable insights regarding:\n\
         1. Profitability trends or anomalies.\n\
         2. Vehicle maintenance urgency.\n\
         3. Operational efficiency (fuel cost per km).\n\n\
         Keep it professional and concise.\n\
         Data: {summary}"
    )
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fleetbook_domain::TripDraft;

    fn trip_with(fuel_cost: f64, distance: f64) -> Trip {
        let mut draft = TripDraft::new(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
        draft.expenses.fuel_cost = fuel_cost;
        draft.end_odometer = distance;
        Trip::from_draft(draft)
    }

    #[test]
    fn missing_key_short_circuits_without_network() {
        let client = InsightClient::new(None, DEFAULT_INSIGHT_MODEL);
        assert_eq!(
            client.generate_business_insight(&[], &[]),
            MISSING_KEY_MESSAGE
        );
    }

    #[test]
    fn summary_reports_fuel_cost_per_km() {
        let summary = data_summary(&[trip_with(50.0, 120.0)], &[]);
        let recent = &summary["recentTripPerformance"];
        assert_eq!(recent[0]["efficiency"], "0.42");
    }

    #[test]
    fn summary_guards_against_zero_distance() {
        let summary = data_summary(&[trip_with(50.0, 0.0)], &[]);
        assert_eq!(summary["recentTripPerformance"][0]["efficiency"], "0");
    }

    #[test]
    fn summary_caps_the_analysis_window() {
        let trips: Vec<Trip> = (0..15).map(|_| trip_with(10.0, 100.0)).collect();
        let summary = data_summary(&trips, &[]);

        assert_eq!(summary["totalTrips"], 15);
        assert_eq!(
            summary["recentTripPerformance"]
                .as_array()
                .expect("array")
                .len(),
            ANALYSIS_WINDOW
        );
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let decoded: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).expect("decode");
        assert_eq!(decoded.first_text(), None);

        let decoded: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Insight."}]}}]}"#,
        )
        .expect("decode");
        assert_eq!(decoded.first_text().as_deref(), Some("Insight."));
    }
}
