//! HTTP helpers for the two external reads the dashboard makes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs that fail immediately, since both endpoints are
//! only fetched from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The landmass helper goes
//! one step further and resolves to an empty polygon set on any failure, so
//! the globe always gets to start rotating.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use globe::topo::Polygon;
#[cfg(any(test, feature = "hydrate"))]
use globe::topo::{TopoError, decode_land};
use metrics::summary::{DashboardSummary, SummaryError};

/// Public world-atlas landmass, 1:110m.
pub const LAND_URL: &str = "https://unpkg.com/world-atlas@2.0.2/land-110m.json";

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE_ON_SERVER: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn land_status_message(status: u16) -> String {
    format!("land request failed: HTTP {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn land_decode_message(err: &TopoError) -> String {
    format!("invalid land data: {err}")
}

/// Decode a landmass payload, describing the failure for the log.
#[cfg(any(test, feature = "hydrate"))]
fn decode_land_body(body: &str) -> Result<Vec<Polygon>, String> {
    decode_land(body).map_err(|e| land_decode_message(&e))
}

/// Fetch the dashboard summary from the configured endpoint.
///
/// # Errors
///
/// Returns [`SummaryError`] on transport failure, a non-2xx status, or a body
/// that is not a summary.
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, SummaryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(metrics::summary::DASHBOARD_ENDPOINT)
            .send()
            .await
            .map_err(|e| SummaryError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(SummaryError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| SummaryError::Network(e.to_string()))?;
        DashboardSummary::parse(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SummaryError::Network(UNAVAILABLE_ON_SERVER.to_owned()))
    }
}

/// Fetch and decode the landmass.
///
/// # Errors
///
/// Returns a description of the transport, status or decode failure.
pub async fn fetch_land() -> Result<Vec<Polygon>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(LAND_URL)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(land_status_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        decode_land_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNAVAILABLE_ON_SERVER.to_owned())
    }
}

/// Fetch the landmass, logging and substituting no land on failure.
pub async fn fetch_land_or_empty() -> Vec<Polygon> {
    match fetch_land().await {
        Ok(land) => land,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("error fetching land data: {e}");
            #[cfg(not(feature = "hydrate"))]
            drop(e);
            Vec::new()
        }
    }
}
