use forgecrm_core::{CustomerId, ProductId};

use crate::product::ProductDetail;

/// Persistence seam for products.
pub trait ProductRepository: Send + Sync {
    fn get(&self, id: &ProductId) -> Option<ProductDetail>;

    /// All products in a stable order (insertion time, then id).
    fn list(&self) -> Vec<ProductDetail>;

    /// Products currently owned by the given customer, in stable order.
    fn list_for_customer(&self, customer_id: &CustomerId) -> Vec<ProductDetail>;

    fn add(&self, product: ProductDetail);

    /// Upsert by id.
    fn save(&self, product: ProductDetail);

    /// Remove by id; returns whether a record existed.
    fn remove(&self, id: &ProductId) -> bool;

    fn is_empty(&self) -> bool;
}
