// Reset orchestration
//
// A straight-line controller conversation, one per incoming request:
// login, enumerate sites, enumerate clients per site, match the target
// MAC against wired clients, power-cycle the discovered switch port.
// The first error ends the request; so does the first successful match
// — at most one power-cycle command is ever issued.

use std::time::Duration;

use portreset_api::{ControllerSession, Error as ApiError};
use secrecy::SecretString;
use tracing::{debug, info};
use url::Url;

use crate::error::ResetError;

/// How to reach and authenticate with the controller.
///
/// Built once at startup from the environment; every request borrows it
/// to spin up a fresh [`ControllerSession`].
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Controller root URL, no trailing slash (e.g. `https://demo.ui.com`).
    pub base_url: Url,
    pub username: String,
    pub password: SecretString,
    /// Per-call outbound timeout.
    pub timeout: Duration,
}

/// Locate the wired client with `search_mac` and power-cycle its switch
/// port. Returns the operator-facing success message.
///
/// MAC comparison is case-insensitive; a client whose MAC matches but
/// which is not wired is skipped (wireless clients have no switch
/// port). Sites and clients are probed in controller order.
pub async fn reset(
    settings: &ControllerSettings,
    search_mac: &str,
) -> Result<String, ResetError> {
    let mac = search_mac.to_lowercase();
    debug!(mac, "starting port reset");

    let session = ControllerSession::new(settings.base_url.clone(), settings.timeout)
        .map_err(ResetError::Login)?;

    session
        .login(&settings.username, &settings.password)
        .await
        .map_err(ResetError::Login)?;

    let sites = session.list_sites().await.map_err(ResetError::Sites)?;
    debug!(site_count = sites.len(), "sites enumerated");

    for site in &sites {
        let clients = session
            .list_clients(&site.name)
            .await
            .map_err(ResetError::Clients)?;

        for client in &clients {
            if !client.mac.eq_ignore_ascii_case(&mac) || !client.is_wired {
                continue;
            }

            // The controller reported a wired client without its switch
            // attachment: that record is unusable, not "no match".
            let sw_mac = client
                .sw_mac
                .as_deref()
                .ok_or_else(|| missing_field(&client.mac, "sw_mac"))?;
            let sw_port = client
                .sw_port
                .ok_or_else(|| missing_field(&client.mac, "sw_port"))?;

            info!(
                mac,
                site = %site.name,
                sw_mac,
                sw_port,
                "matched wired client, issuing power-cycle"
            );

            session
                .power_cycle_port(&site.name, sw_mac, sw_port)
                .await
                .map_err(ResetError::Command)?;

            return Ok(format!(
                "Successfully reset power to switch port connected to mac address {mac}"
            ));
        }
    }

    Err(ResetError::NoMatch { mac })
}

fn missing_field(client_mac: &str, field: &str) -> ResetError {
    ResetError::Clients(ApiError::Schema {
        message: format!("wired client {client_mac} has no {field}"),
        body: String::new(),
    })
}
