//! HTTP facade over a UniFi-style controller: `GET /reset/{mac}` finds
//! the wired client with that MAC and power-cycles its switch port.
//!
//! Exposed as a library so the router and configuration can be driven
//! directly from integration tests; `main.rs` is a thin wrapper.

pub mod config;
pub mod http;
