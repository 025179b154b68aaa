// UI layer: runs the login -> query -> average flow, showing an
// `indicatif` spinner on stderr while each request is in flight.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::api::ApiClient;
use crate::config::Credentials;
use crate::rpo::average_rpo;

/// Spinner with a message, or a hidden bar when progress is disabled.
fn spinner(msg: &'static str, show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Log in with `creds`, list VPGs and return their average RPO.
///
/// A failed login stops the flow before any query is sent.
pub fn report_average_rpo(api: &mut ApiClient, creds: &Credentials, show_progress: bool) -> Result<i64> {
    let pb = spinner("Logging in...", show_progress);
    let login = api.login(creds);
    pb.finish_and_clear();
    login.with_context(|| format!("logging in to {}", api.base_url()))?;

    let pb = spinner("Querying VPGs...", show_progress);
    let vpgs = api.list_vpgs();
    pb.finish_and_clear();
    let vpgs = vpgs.context("querying VPGs")?;

    let avg = average_rpo(&vpgs);
    info!(vpgs = vpgs.len(), average_rpo = avg, "computed average RPO");
    Ok(avg)
}
