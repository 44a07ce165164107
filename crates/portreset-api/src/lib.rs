// portreset-api: async client for the UniFi controller's legacy JSON API.
//
// Covers the four endpoints the reset flow needs: login, site listing,
// station listing, and the devmgr power-cycle command.

pub mod error;
pub mod models;
pub mod session;

pub use error::Error;
pub use models::{ClientEntry, PowerCycleRequest, SiteEntry};
pub use session::ControllerSession;
