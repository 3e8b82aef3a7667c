use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use forgecrm_core::{CustomerId, DetailId};
use forgecrm_customers::{CustomerDetail, CustomerRepository};
use forgecrm_products::ProductRepository;

use crate::dto::CustomerDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Attach or replace the detail record of a customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDetail {
    pub customer_id: CustomerId,
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl Request for UpdateCustomerDetail {
    type Response = Response<CustomerDto>;
    const NAME: &'static str = "customers.update_detail";
}

pub struct DetailRules;

impl Validator<UpdateCustomerDetail> for DetailRules {
    fn validate(&self, request: &UpdateCustomerDetail, errors: &mut FieldErrors) {
        if request.customer_id.is_nil() {
            rules::fail(errors, "customerId", "Customer ID is required");
        }
        rules::required(errors, "address", &request.address, "Address is required");
        rules::max_length(
            errors,
            "address",
            &request.address,
            200,
            "Address cannot exceed 200 characters",
        );
        rules::max_length(
            errors,
            "notes",
            &request.notes,
            500,
            "Notes cannot exceed 500 characters",
        );
    }
}

pub struct UpdateCustomerDetailHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl UpdateCustomerDetailHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: UpdateCustomerDetail) -> Result<Response<CustomerDto>, AppError> {
        let mut customer = self.customers.get(&request.customer_id).ok_or_else(|| {
            AppError::not_found(format!(
                "Customer with ID {} was not found",
                request.customer_id
            ))
        })?;

        let now = Utc::now();
        match customer.detail().cloned() {
            // Keep the existing detail id on replacement.
            Some(mut detail) => {
                detail.update(&request.address, &request.notes, now)?;
                customer.set_detail(detail, now);
            }
            None => {
                let detail = CustomerDetail::new(
                    DetailId::new(),
                    &request.address,
                    &request.notes,
                    request.customer_id,
                    now,
                )?;
                customer.set_detail(detail, now);
            }
        }

        let owned = self.products.list_for_customer(&request.customer_id);
        let dto = CustomerDto::from_parts(&customer, owned);
        self.customers.save(customer);
        Ok(Response::succeed(dto, "Customer detail updated successfully"))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<UpdateCustomerDetail> {
    let handler = UpdateCustomerDetailHandler::new(customers, products);
    Pipeline::new(move |request: UpdateCustomerDetail| handler.handle(request)).with_validator(DetailRules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgecrm_customers::Customer;
    use forgecrm_infra::{InMemoryCustomerStore, InMemoryProductStore};

    fn seeded() -> (Arc<InMemoryCustomerStore>, CustomerId) {
        let store = Arc::new(InMemoryCustomerStore::new());
        let customer =
            Customer::new(CustomerId::new(), "Ada", "ada@x.com", "555", Utc::now()).unwrap();
        let id = customer.id_typed();
        store.add(customer);
        (store, id)
    }

    #[test]
    fn first_update_attaches_a_detail_record() {
        let (store, id) = seeded();
        let pipeline = pipeline(store.clone(), Arc::new(InMemoryProductStore::new()));

        let resp = pipeline
            .send(UpdateCustomerDetail {
                customer_id: id,
                address: " 1 Main St ".into(),
                notes: "vip".into(),
            })
            .unwrap();

        assert!(resp.success);
        assert_eq!(resp.message, "Customer detail updated successfully");
        let detail = resp.data.unwrap().detail.unwrap();
        assert_eq!(detail.address, "1 Main St");
        assert_eq!(detail.customer_id, id);
    }

    #[test]
    fn second_update_replaces_content_but_keeps_the_detail_id() {
        let (store, id) = seeded();
        let pipeline = pipeline(store.clone(), Arc::new(InMemoryProductStore::new()));

        let first = pipeline
            .send(UpdateCustomerDetail {
                customer_id: id,
                address: "1 Main St".into(),
                notes: "".into(),
            })
            .unwrap();
        let first_detail_id = first.data.unwrap().detail.unwrap().id;

        let second = pipeline
            .send(UpdateCustomerDetail {
                customer_id: id,
                address: "2 Side Ave".into(),
                notes: "moved".into(),
            })
            .unwrap();
        let detail = second.data.unwrap().detail.unwrap();
        assert_eq!(detail.id, first_detail_id);
        assert_eq!(detail.address, "2 Side Ave");
    }

    #[test]
    fn blank_address_is_rejected() {
        let (store, id) = seeded();
        let pipeline = pipeline(store, Arc::new(InMemoryProductStore::new()));

        let resp = pipeline
            .send(UpdateCustomerDetail {
                customer_id: id,
                address: "   ".into(),
                notes: "".into(),
            })
            .unwrap();
        assert!(!resp.success);
        assert_eq!(
            resp.validation_errors.unwrap()["address"],
            vec!["Address is required"]
        );
    }
}
