use std::collections::HashMap;
use std::sync::RwLock;

use forgecrm_core::CustomerId;
use forgecrm_customers::{Customer, CustomerRepository};

/// In-memory customer store.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerStore {
    fn get(&self, id: &CustomerId) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn list(&self) -> Vec<Customer> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut customers: Vec<Customer> = map.values().cloned().collect();
        // Stable listing order: insertion time, then id as the tiebreaker.
        customers.sort_by_key(|c| (c.created_at(), c.id_typed()));
        customers
    }

    fn add(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.id_typed(), customer);
        }
    }

    fn save(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.id_typed(), customer);
        }
    }

    fn remove(&self, id: &CustomerId) -> bool {
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

    fn customer(name: &str, offset_secs: i64) -> Customer {
        Customer::new(
            CustomerId::new(),
            name,
            &format!("{}@x.com", name.to_lowercase()),
            "555",
            Utc::now() + Duration::seconds(offset_secs),
        )
        .unwrap()
    }

    #[test]
    fn list_orders_by_creation_time() {
        let store = InMemoryCustomerStore::new();
        let late = customer("Late", 100);
        let early = customer("Early", -100);
        store.add(late);
        store.add(early);

        let names: Vec<_> = store.list().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[test]
    fn save_upserts_by_id() {
        let store = InMemoryCustomerStore::new();
        let mut ada = customer("Ada", 0);
        let id = ada.id_typed();
        store.add(ada.clone());

        ada.update("Ada L", "ada@x.com", "555", Utc::now()).unwrap();
        store.save(ada);
        assert_eq!(store.get(&id).unwrap().name(), "Ada L");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn remove_reports_whether_a_record_existed() {
        let store = InMemoryCustomerStore::new();
        let ada = customer("Ada", 0);
        let id = ada.id_typed();
        store.add(ada);

        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }
}
