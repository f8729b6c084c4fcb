//! Application state for the web server.

use std::sync::Arc;

use hll_fintraffic::client::ParkingClient;
use hll_fintraffic::facility::Facility;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API client for the one facility this site reports on
    pub client: Arc<ParkingClient>,
    /// Metadata for that facility, from the embedded fixture
    pub facility: Facility,
}

impl AppState {
    pub fn new(client: Arc<ParkingClient>, facility: Facility) -> Self {
        Self { client, facility }
    }
}
