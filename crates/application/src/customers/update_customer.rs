use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use forgecrm_core::CustomerId;
use forgecrm_customers::CustomerRepository;
use forgecrm_products::ProductRepository;

use crate::customers::validate_contact;
use crate::dto::CustomerDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Replace a customer's contact fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Request for UpdateCustomer {
    type Response = Response<CustomerDto>;
    const NAME: &'static str = "customers.update";
}

pub struct UpdateRules;

impl Validator<UpdateCustomer> for UpdateRules {
    fn validate(&self, request: &UpdateCustomer, errors: &mut FieldErrors) {
        if request.id.is_nil() {
            rules::fail(errors, "id", "Customer ID is required");
        }
        validate_contact(&request.name, &request.email, &request.phone, errors);
    }
}

pub struct UpdateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl UpdateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: UpdateCustomer) -> Result<Response<CustomerDto>, AppError> {
        let mut customer = self.customers.get(&request.id).ok_or_else(|| {
            AppError::not_found(format!("Customer with ID {} was not found", request.id))
        })?;
        customer.update(&request.name, &request.email, &request.phone, Utc::now())?;

        let owned = self.products.list_for_customer(&request.id);
        let dto = CustomerDto::from_parts(&customer, owned);
        self.customers.save(customer);
        Ok(Response::succeed(dto, "Customer updated successfully"))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<UpdateCustomer> {
    let handler = UpdateCustomerHandler::new(customers, products);
    Pipeline::new(move |request: UpdateCustomer| handler.handle(request)).with_validator(UpdateRules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgecrm_customers::Customer;
    use forgecrm_infra::{InMemoryCustomerStore, InMemoryProductStore};

    fn seeded_store() -> (Arc<InMemoryCustomerStore>, CustomerId) {
        let store = Arc::new(InMemoryCustomerStore::new());
        let customer =
            Customer::new(CustomerId::new(), "Ada", "ada@x.com", "555", Utc::now()).unwrap();
        let id = customer.id_typed();
        store.add(customer);
        (store, id)
    }

    #[test]
    fn update_persists_normalized_fields() {
        let (store, id) = seeded_store();
        let pipeline = pipeline(store.clone(), Arc::new(InMemoryProductStore::new()));

        let resp = pipeline
            .send(UpdateCustomer {
                id,
                name: "Grace Hopper".into(),
                email: "Grace@Navy.MIL".into(),
                phone: "555-0101".into(),
            })
            .unwrap();

        assert!(resp.success);
        assert_eq!(resp.message, "Customer updated successfully");
        assert_eq!(store.get(&id).unwrap().email(), "grace@navy.mil");
    }

    #[test]
    fn unknown_id_maps_to_not_found() {
        let (store, _) = seeded_store();
        let pipeline = pipeline(store, Arc::new(InMemoryProductStore::new()));

        let err = pipeline
            .send(UpdateCustomer {
                id: CustomerId::new(),
                name: "Grace".into(),
                email: "g@x.com".into(),
                phone: "555".into(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn invalid_fields_leave_the_stored_customer_untouched() {
        let (store, id) = seeded_store();
        let pipeline = pipeline(store.clone(), Arc::new(InMemoryProductStore::new()));

        let resp = pipeline
            .send(UpdateCustomer {
                id,
                name: "".into(),
                email: "bad".into(),
                phone: "".into(),
            })
            .unwrap();
        assert!(!resp.success);
        assert_eq!(store.get(&id).unwrap().name(), "Ada");
    }
}
