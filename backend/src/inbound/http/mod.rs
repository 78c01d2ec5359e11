//! HTTP inbound adapter exposing the administration endpoints.

pub mod assignments;
pub mod error;
pub mod health;
pub mod modules;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
