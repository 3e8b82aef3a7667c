use std::collections::HashMap;
use std::sync::RwLock;

use forgecrm_core::{CustomerId, ProductId};
use forgecrm_products::{ProductDetail, ProductRepository};

/// In-memory product store.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, ProductDetail>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut products: Vec<ProductDetail>) -> Vec<ProductDetail> {
        products.sort_by_key(|p| (p.created_at(), p.id_typed()));
        products
    }
}

impl ProductRepository for InMemoryProductStore {
    fn get(&self, id: &ProductId) -> Option<ProductDetail> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<ProductDetail> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        Self::sorted(map.values().cloned().collect())
    }

    fn list_for_customer(&self, customer_id: &CustomerId) -> Vec<ProductDetail> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        Self::sorted(
            map.values()
                .filter(|p| p.customer_id() == Some(*customer_id))
                .cloned()
                .collect(),
        )
    }

    fn add(&self, product: ProductDetail) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id_typed(), product);
        }
    }

    fn save(&self, product: ProductDetail) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id_typed(), product);
        }
    }

    fn remove(&self, id: &ProductId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }

    fn is_empty(&self) -> bool {
        self.inner.read().map(|m| m.is_empty()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn product(name: &str, owner: Option<CustomerId>, offset_secs: i64) -> ProductDetail {
        let mut p = ProductDetail::new(
            ProductId::new(),
            name,
            "",
            100,
            1,
            None,
            Utc::now() + Duration::seconds(offset_secs),
        )
        .unwrap();
        if let Some(owner) = owner {
            p.assign_to_customer(owner, Utc::now());
        }
        p
    }

    #[test]
    fn list_for_customer_filters_by_ownership_in_stable_order() {
        let store = InMemoryProductStore::new();
        let owner = CustomerId::new();

        store.add(product("B", Some(owner), 10));
        store.add(product("A", Some(owner), -10));
        store.add(product("Other", Some(CustomerId::new()), 0));
        store.add(product("Loose", None, 0));

        let names: Vec<_> = store
            .list_for_customer(&owner)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(store.list().len(), 4);
    }

    #[test]
    fn save_replaces_the_stored_product() {
        let store = InMemoryProductStore::new();
        let mut widget = product("Widget", None, 0);
        let id = widget.id_typed();
        store.add(widget.clone());

        widget.update("Widget v2", "", 200, 2, Utc::now()).unwrap();
        store.save(widget);
        assert_eq!(store.get(&id).unwrap().name(), "Widget v2");
    }
}
