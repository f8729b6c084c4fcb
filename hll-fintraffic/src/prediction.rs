//! Predicted availability series.

use serde::Deserialize;

use crate::error::FetchError;

/// Predicted free-space counts, positionally associated with ascending
/// minute offsets from now.
pub type PredictionSeries = Vec<u32>;

/// Number of points in the morning chart series.
pub const MORNING_POINTS: u32 = 7;

/// Minutes between consecutive points of the morning chart series.
pub const MORNING_STEP_MINUTES: u32 = 30;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictionRow {
    spaces_available: u32,
}

/// Decode a `prediction` response body into the predicted free-space count.
///
/// Same array-with-first-element shape as the utilization endpoint.
pub fn spaces_from_json(body: &str, url: &str) -> Result<u32, FetchError> {
    let rows: Vec<PredictionRow> =
        serde_json::from_str(body).map_err(|e| FetchError::malformed(url, e.to_string()))?;
    rows.into_iter()
        .next()
        .map(|row| row.spaces_available)
        .ok_or_else(|| FetchError::malformed(url, "empty prediction array"))
}

/// Evenly stepped minute offsets: `step, 2*step, ..., count*step`.
pub fn step_offsets(step_minutes: u32, count: u32) -> Vec<u32> {
    (1..=count).map(|n| n * step_minutes).collect()
}

/// Offsets for the morning chart: 7 points at 30-minute increments from
/// `base_minutes` (the distance to the next 06:00 boundary).
pub fn morning_offsets(base_minutes: u32) -> Vec<u32> {
    (0..MORNING_POINTS)
        .map(|n| base_minutes + n * MORNING_STEP_MINUTES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://example.invalid/facilities/619/prediction?after=10";

    #[test]
    fn test_decodes_first_element() {
        let body = r#"[{"spacesAvailable": 48}, {"spacesAvailable": 3}]"#;
        assert_eq!(spaces_from_json(body, URL).unwrap(), 48);
    }

    #[test]
    fn test_empty_array_is_malformed() {
        let err = spaces_from_json("[]", URL).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_step_offsets() {
        assert_eq!(step_offsets(10, 6), vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(step_offsets(5, 6), vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_morning_offsets() {
        assert_eq!(
            morning_offsets(60),
            vec![60, 90, 120, 150, 180, 210, 240]
        );
    }
}
