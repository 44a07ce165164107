// Legacy API wire types
//
// The controller wraps list payloads as `{ "data": [...] }`. Fields use
// `#[serde(default)]` liberally because the API is inconsistent about
// field presence across firmware versions; everything unmodelled lands
// in `extra`.

use serde::{Deserialize, Serialize};

/// List envelope for `/api/self/sites`.
#[derive(Debug, Deserialize)]
pub struct SitesResponse {
    pub data: Vec<SiteEntry>,
}

/// Site object from `/api/self/sites`.
///
/// `name` is the opaque short key used in site-scoped URL paths
/// (`/api/s/{name}/...`), not the human-friendly description.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// List envelope for `stat/sta`.
#[derive(Debug, Deserialize)]
pub struct ClientsResponse {
    pub data: Vec<ClientEntry>,
}

/// Connected client (station) from `stat/sta`.
///
/// `sw_mac`/`sw_port` identify the switch port a wired client hangs off;
/// wireless clients report neither.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientEntry {
    pub mac: String,
    #[serde(default)]
    pub is_wired: bool,
    #[serde(default)]
    pub sw_mac: Option<String>,
    #[serde(default)]
    pub sw_port: Option<i64>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for the `cmd/devmgr` power-cycle command.
///
/// `mac` is the *switch* MAC, not the client's.
#[derive(Debug, Clone, Serialize)]
pub struct PowerCycleRequest {
    pub mac: String,
    pub port_idx: i64,
    pub cmd: &'static str,
}

impl PowerCycleRequest {
    pub fn new(sw_mac: &str, port_idx: i64) -> Self {
        Self {
            mac: sw_mac.to_owned(),
            port_idx,
            cmd: "power-cycle",
        }
    }
}
