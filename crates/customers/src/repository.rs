use forgecrm_core::CustomerId;

use crate::customer::Customer;

/// Persistence seam for customers.
///
/// Implementations are internally synchronized; methods take `&self` and
/// return owned snapshots so callers never hold store locks.
pub trait CustomerRepository: Send + Sync {
    fn get(&self, id: &CustomerId) -> Option<Customer>;

    /// All customers in a stable order (insertion time, then id) so that
    /// pagination over repeated calls is consistent.
    fn list(&self) -> Vec<Customer>;

    fn add(&self, customer: Customer);

    /// Upsert by id.
    fn save(&self, customer: Customer);

    /// Remove by id; returns whether a record existed.
    fn remove(&self, id: &CustomerId) -> bool;

    fn is_empty(&self) -> bool;
}
