//! `forgecrm-infra` — in-memory persistence and seed data.
//!
//! The stores here back the repository traits from the domain crates. They
//! are process-local and fully synchronized; a future database-backed
//! implementation would slot in behind the same traits.

pub mod seed;
pub mod stores;

pub use seed::{seed_stores, SeedConfig};
pub use stores::{InMemoryCustomerStore, InMemoryProductStore};
