//! Async client for the Cisco Meraki Dashboard API.
//!
//! The [`Dashboard`] trait is the read-only surface the MCP server is built
//! on. [`MerakiClient`] implements it over HTTP; tests substitute their own
//! implementation.

pub mod client;
pub mod dashboard;
pub mod error;
pub mod models;

pub use client::{ClientConfig, DEFAULT_BASE_URL, MerakiClient};
pub use dashboard::Dashboard;
pub use error::Error;
pub use models::{Client, ClientUsage, Device, Network, Organization, Ssid, Vlan, VlanId};
