//! HTTP inbound adapter exposing the listing endpoint and health probes.

pub mod auth;
pub mod cors;
pub mod error;
pub mod experiences;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
