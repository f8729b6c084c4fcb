//! Current utilization snapshot for a parking facility.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A point-in-time reading of facility occupancy, as returned by the
/// Fintraffic `utilization` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationSnapshot {
    pub capacity: u32,
    pub spaces_available: u32,
    pub open_now: bool,
}

impl UtilizationSnapshot {
    /// Decode a `utilization` response body.
    ///
    /// The API returns a JSON array with one entry per capacity class;
    /// only the first entry applies to this facility. An empty array or
    /// an availability count above capacity is treated as malformed.
    pub fn from_json(body: &str, url: &str) -> Result<Self, FetchError> {
        let rows: Vec<UtilizationSnapshot> =
            serde_json::from_str(body).map_err(|e| FetchError::malformed(url, e.to_string()))?;
        let first = rows
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::malformed(url, "empty utilization array"))?;
        if first.spaces_available > first.capacity {
            return Err(FetchError::malformed(
                url,
                format!(
                    "spacesAvailable {} exceeds capacity {}",
                    first.spaces_available, first.capacity
                ),
            ));
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://example.invalid/facilities/619/utilization";

    #[test]
    fn test_decodes_first_element() {
        let body = r#"[
            {"capacity": 141, "spacesAvailable": 52, "openNow": true},
            {"capacity": 10, "spacesAvailable": 1, "openNow": true}
        ]"#;
        let snapshot = UtilizationSnapshot::from_json(body, URL).unwrap();
        assert_eq!(
            snapshot,
            UtilizationSnapshot {
                capacity: 141,
                spaces_available: 52,
                open_now: true,
            }
        );
    }

    #[test]
    fn test_empty_array_is_malformed() {
        let err = UtilizationSnapshot::from_json("[]", URL).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_count_above_capacity_is_malformed() {
        let body = r#"[{"capacity": 141, "spacesAvailable": 150, "openNow": true}]"#;
        let err = UtilizationSnapshot::from_json(body, URL).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = UtilizationSnapshot::from_json("<html>Bad Gateway</html>", URL).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }
}
