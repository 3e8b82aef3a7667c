use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use forgecrm_core::CustomerId;
use forgecrm_customers::{Customer, CustomerRepository};

use crate::customers::validate_contact;
use crate::dto::CustomerDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{FieldErrors, Validator};

/// Create a customer from contact fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Request for CreateCustomer {
    type Response = Response<CustomerDto>;
    const NAME: &'static str = "customers.create";
}

pub struct ContactRules;

impl Validator<CreateCustomer> for ContactRules {
    fn validate(&self, request: &CreateCustomer, errors: &mut FieldErrors) {
        validate_contact(&request.name, &request.email, &request.phone, errors);
    }
}

pub struct CreateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl CreateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    fn handle(&self, request: CreateCustomer) -> Result<Response<CustomerDto>, AppError> {
        let customer = Customer::new(
            CustomerId::new(),
            &request.name,
            &request.email,
            &request.phone,
            Utc::now(),
        )?;
        let dto = CustomerDto::from_parts(&customer, Vec::new());
        self.customers.add(customer);
        Ok(Response::succeed(dto, "Customer created successfully"))
    }
}

pub fn pipeline(customers: Arc<dyn CustomerRepository>) -> Pipeline<CreateCustomer> {
    let handler = CreateCustomerHandler::new(customers);
    Pipeline::new(move |request: CreateCustomer| handler.handle(request)).with_validator(ContactRules)
}
