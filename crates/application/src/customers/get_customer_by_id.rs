use std::sync::Arc;

use forgecrm_core::CustomerId;
use forgecrm_customers::CustomerRepository;
use forgecrm_products::ProductRepository;

use crate::dto::CustomerDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Fetch one customer by id, with its detail record and owned products.
#[derive(Debug, Clone, Copy)]
pub struct GetCustomerById {
    pub id: CustomerId,
}

impl Request for GetCustomerById {
    type Response = Response<CustomerDto>;
    const NAME: &'static str = "customers.get_by_id";
}

pub struct RequireId;

impl Validator<GetCustomerById> for RequireId {
    fn validate(&self, request: &GetCustomerById, errors: &mut FieldErrors) {
        if request.id.is_nil() {
            rules::fail(errors, "id", "Customer ID is required");
        }
    }
}

pub struct GetCustomerByIdHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl GetCustomerByIdHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: GetCustomerById) -> Result<Response<CustomerDto>, AppError> {
        let customer = self.customers.get(&request.id).ok_or_else(|| {
            AppError::not_found(format!("Customer with ID {} was not found", request.id))
        })?;
        let owned = self.products.list_for_customer(&request.id);
        Ok(Response::succeed(
            CustomerDto::from_parts(&customer, owned),
            "Customer retrieved successfully",
        ))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<GetCustomerById> {
    let handler = GetCustomerByIdHandler::new(customers, products);
    Pipeline::new(move |request: GetCustomerById| handler.handle(request)).with_validator(RequireId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forgecrm_customers::Customer;
    use forgecrm_infra::{InMemoryCustomerStore, InMemoryProductStore};

    #[test]
    fn missing_customer_maps_to_not_found() {
        let pipeline = pipeline(
            Arc::new(InMemoryCustomerStore::new()),
            Arc::new(InMemoryProductStore::new()),
        );

        let err = pipeline.send(GetCustomerById { id: CustomerId::new() }).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn nil_id_is_rejected_before_the_store_is_consulted() {
        let pipeline = pipeline(
            Arc::new(InMemoryCustomerStore::new()),
            Arc::new(InMemoryProductStore::new()),
        );

        let resp = pipeline
            .send(GetCustomerById { id: CustomerId::from_uuid(uuid::Uuid::nil()) })
            .unwrap();
        assert!(!resp.success);
        assert!(resp.validation_errors.unwrap().contains_key("id"));
    }

    #[test]
    fn existing_customer_is_returned_with_products() {
        let customers = Arc::new(InMemoryCustomerStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        let ada = Customer::new(CustomerId::new(), "Ada", "ada@x.com", "555", Utc::now()).unwrap();
        let id = ada.id_typed();
        customers.add(ada);

        let resp = pipeline(customers, products)
            .send(GetCustomerById { id })
            .unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Customer retrieved successfully");
        assert_eq!(resp.data.unwrap().id, id);
    }
}
