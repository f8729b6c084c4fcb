//! Request handlers: fetch, transform, render.
//!
//! All upstream fetches for one render are issued together and awaited
//! jointly; the first failure aborts the render.

use axum::extract::State;
use axum::response::Html;

use hll_fintraffic::prediction;
use hll_utils::helsinki;

use crate::error::PageError;
use crate::page::{self, CompactPage, MainPage};
use crate::state::AppState;

/// GET `/` — the full page with the hour chart and, outside the morning
/// window, the morning chart.
pub async fn main_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let client = &state.client;
    let now = helsinki::now();
    let morning_window = helsinki::morning_window(&now).ok_or(PageError::LocalTime)?;

    let offsets = prediction::step_offsets(10, 6);
    let morning_series = async {
        match helsinki::morning_base_offset(&now) {
            Some(base) => client
                .predictions(&prediction::morning_offsets(base))
                .await
                .map(Some),
            None => Ok(None),
        }
    };
    let (utilization, predictions, morning) = tokio::try_join!(
        client.utilization(),
        client.predictions(&offsets),
        morning_series
    )?;

    Ok(Html(page::render_main(&MainPage {
        facility: state.facility.clone(),
        utilization,
        predictions,
        morning,
        morning_window,
        fetched_at: now,
    })))
}

/// GET `/compact` — graded status plus a half-hour chart at 5-minute
/// steps.
pub async fn compact_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let client = &state.client;
    let now = helsinki::now();

    let offsets = prediction::step_offsets(5, 6);
    let (utilization, predictions) =
        tokio::try_join!(client.utilization(), client.predictions(&offsets))?;

    Ok(Html(page::render_compact(&CompactPage {
        utilization,
        predictions,
        fetched_at: now,
    })))
}

/// GET `/health` — liveness probe; does not touch the upstream API.
pub async fn health() -> &'static str {
    "ok"
}
