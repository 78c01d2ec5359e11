//! Academic records backend.
//!
//! Hexagonal layout: [`domain`] holds records, validation, and the record
//! service behind ports; [`inbound::http`] exposes them over REST;
//! [`outbound`] provides MongoDB and in-memory document stores; [`server`]
//! wires the pieces together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
