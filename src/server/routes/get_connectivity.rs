use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use tracing::{debug, info_span, Instrument};

use crate::{
    bridges::Bridge,
    server::{
        api::connectivity_report::ConnectivityReport, client, config::AppState,
        error::ServerError,
    },
};

static CONNECTIVITY_PAGE: &str = include_str!("../templates/connectivity.html");

#[derive(Debug, Deserialize)]
pub struct ConnectivityParams {
    bridge: Option<String>,
}

/// Checks whether the source site of a bridge is reachable.
///
/// Only served in debug mode. With a `bridge` parameter the report for that
/// bridge is returned as json; without one, a page that checks every
/// whitelisted bridge from the browser.
#[axum_macros::debug_handler]
pub async fn get_connectivity(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ConnectivityParams>, ServerError>,
) -> Result<Response, ServerError> {
    if !state.config.debug {
        return Err(ServerError::DebugModeDisabled);
    }

    let bridge_name = match params.bridge {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(Html(render_checker_page(&state)?).into_response()),
    };

    let bridge = state
        .registry
        .resolve(&bridge_name)
        .ok_or_else(|| ServerError::BridgeNotFound(bridge_name.clone()))?;

    if !state.registry.is_enabled(bridge) {
        return Err(ServerError::BridgeNotWhitelisted(bridge.name.clone()));
    }

    let report = report_bridge_connectivity(&state.http, bridge)
        .instrument(info_span!("report_bridge_connectivity"))
        .await;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/json")],
        serde_json::to_string(&report)?,
    )
        .into_response())
}

/// Probe the bridge's source site once and fold the outcome into a report.
///
/// A transport failure is a reportable outcome, not an error: the report keeps
/// `successful: false` and the default status classification.
async fn report_bridge_connectivity(http: &reqwest::Client, bridge: &Bridge) -> ConnectivityReport {
    let mut report = ConnectivityReport {
        bridge: bridge.name.clone(),
        successful: false,
        http_code: 200,
    };

    match client::fetch_with_status_lines(http, &bridge.uri).await {
        Ok(reply) => {
            if reply.code == 200 {
                report.successful = true;
                // Matches the literal text anywhere in the status line history,
                // not the status code of any particular hop.
                if reply.status_lines.concat().contains("301 Moved Permanently") {
                    report.http_code = 301;
                }
            }
        }
        Err(err) => {
            debug!("connectivity probe for {} failed: {}", bridge.name, err);
        }
    }

    report
}

fn render_checker_page(state: &AppState) -> Result<String, serde_json::Error> {
    let names: Vec<&str> = state
        .registry
        .enabled()
        .map(|bridge| bridge.name.as_str())
        .collect();
    Ok(CONNECTIVITY_PAGE.replace("/*BRIDGES*/[]", &serde_json::to_string(&names)?))
}
