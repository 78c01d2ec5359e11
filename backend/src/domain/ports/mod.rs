//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod record_admin;
mod record_store;
mod store_health;

#[cfg(test)]
pub use record_admin::MockRecordAdmin;
pub use record_admin::RecordAdmin;
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{RecordStore, RecordStoreError};
#[cfg(test)]
pub use store_health::MockStoreHealth;
pub use store_health::StoreHealth;
