//! Outbound adapters implementing the document store ports.
//!
//! - **mongo**: MongoDB collections via the official driver.
//! - **memory**: process-local collections for tests and local runs.
//!
//! Adapters translate between domain records and store documents. They
//! contain no business logic.

pub mod memory;
pub mod mongo;
