// Controller session
//
// Wraps `reqwest::Client` with UniFi-specific URL construction and a
// per-session cookie jar. The login endpoint sets a session cookie in
// the jar; subsequent requests send it automatically. A session is
// meant to live for exactly one reset attempt and then be dropped —
// cookies never outlive it.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::header::ORIGIN;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ClientEntry, ClientsResponse, PowerCycleRequest, SiteEntry, SitesResponse};

/// A cookie-bearing HTTP session against one UniFi controller.
pub struct ControllerSession {
    http: reqwest::Client,
    base_url: Url,
    /// `Origin` header value. The login endpoint is CSRF-sensitive and
    /// rejects POSTs without an origin.
    origin: String,
}

impl ControllerSession {
    /// Create a fresh session with its own cookie jar.
    ///
    /// The `base_url` is the controller root (e.g. `https://controller:8443`).
    /// Controllers typically run self-signed certificates, so invalid
    /// certs are accepted; certificate pinning is out of scope.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("portreset/0.1.0")
            .danger_accept_invalid_certs(true)
            .cookie_provider(jar)
            .build()
            .map_err(Error::Transport)?;

        let origin = base_url.as_str().trim_end_matches('/').to_owned();
        Ok(Self {
            http,
            base_url,
            origin,
        })
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Controller-level API path: `{base}/api/{path}`
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/api/{path}")).map_err(Error::InvalidUrl)
    }

    /// Site-scoped API path: `{base}/api/s/{site}/{path}`
    fn site_url(&self, site: &str, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/api/s/{site}/{path}")).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::decode(resp).await
    }

    /// Send a JSON POST, checking only the response status.
    ///
    /// `Content-Type: application/json` comes from the body builder;
    /// the `Origin` header is attached explicitly.
    async fn post_json(&self, url: Url, body: &(impl Serialize + Sync)) -> Result<(), Error> {
        debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .header(ORIGIN, &self.origin)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// Surface non-2xx responses as `Error::Status` with the raw body.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(Error::Status { status, body })
    }

    /// Decode a response body into `T`, surfacing schema mismatches.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Schema {
            message: e.to_string(),
            body,
        })
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Authenticate with the controller.
    ///
    /// `POST /api/login` — on success the session cookie lands in the
    /// jar and rides along on every later call in this session.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url("login")?;
        debug!("logging in at {}", url);

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });
        self.post_json(url, &body).await?;

        debug!("login successful");
        Ok(())
    }

    /// List all sites visible to the authenticated user.
    ///
    /// `GET /api/self/sites` (controller-level, not site-scoped)
    pub async fn list_sites(&self) -> Result<Vec<SiteEntry>, Error> {
        let url = self.api_url("self/sites")?;
        debug!("listing sites");
        let resp: SitesResponse = self.get_json(url).await?;
        Ok(resp.data)
    }

    /// List all currently connected clients (stations) on a site.
    ///
    /// `GET /api/s/{site}/stat/sta`
    pub async fn list_clients(&self, site: &str) -> Result<Vec<ClientEntry>, Error> {
        let url = self.site_url(site, "stat/sta")?;
        debug!(site, "listing connected clients");
        let resp: ClientsResponse = self.get_json(url).await?;
        Ok(resp.data)
    }

    /// Power-cycle a single switch port (PoE off/on).
    ///
    /// `POST /api/s/{site}/cmd/devmgr` with
    /// `{"mac": sw_mac, "port_idx": N, "cmd": "power-cycle"}`
    pub async fn power_cycle_port(
        &self,
        site: &str,
        sw_mac: &str,
        port_idx: i64,
    ) -> Result<(), Error> {
        let url = self.site_url(site, "cmd/devmgr")?;
        debug!(site, sw_mac, port_idx, "power-cycling switch port");
        self.post_json(url, &PowerCycleRequest::new(sw_mac, port_idx))
            .await
    }
}
