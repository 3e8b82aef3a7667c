//! In-memory repository implementations.
//!
//! Each store is a `RwLock<HashMap<Id, Entity>>` handing out owned clones so
//! callers never observe a partially applied write or hold a store lock. A
//! poisoned lock degrades to "no data" for reads and drops the write, which
//! is acceptable for a process-local store whose writers hold the lock only
//! for a map operation.

mod customer_store;
mod product_store;

pub use customer_store::InMemoryCustomerStore;
pub use product_store::InMemoryProductStore;
