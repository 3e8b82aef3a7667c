use std::sync::Arc;

use chrono::Utc;

use forgecrm_core::CustomerId;
use forgecrm_customers::CustomerRepository;
use forgecrm_products::ProductRepository;

use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Delete a customer. Products it owned survive as unassigned.
#[derive(Debug, Clone, Copy)]
pub struct DeleteCustomer {
    pub id: CustomerId,
}

impl Request for DeleteCustomer {
    type Response = Response<()>;
    const NAME: &'static str = "customers.delete";
}

pub struct RequireId;

impl Validator<DeleteCustomer> for RequireId {
    fn validate(&self, request: &DeleteCustomer, errors: &mut FieldErrors) {
        if request.id.is_nil() {
            rules::fail(errors, "id", "Customer ID is required");
        }
    }
}

pub struct DeleteCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl DeleteCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: DeleteCustomer) -> Result<Response<()>, AppError> {
        if !self.customers.remove(&request.id) {
            return Err(AppError::not_found(format!(
                "Customer with ID {} was not found",
                request.id
            )));
        }

        // Orphan the owned products rather than cascading the delete.
        for mut product in self.products.list_for_customer(&request.id) {
            product.unassign_from_customer(Utc::now());
            self.products.save(product);
        }

        Ok(Response::succeed_empty("Customer deleted successfully"))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<DeleteCustomer> {
    let handler = DeleteCustomerHandler::new(customers, products);
    Pipeline::new(move |request: DeleteCustomer| handler.handle(request)).with_validator(RequireId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgecrm_core::ProductId;
    use forgecrm_customers::Customer;
    use forgecrm_infra::{InMemoryCustomerStore, InMemoryProductStore};
    use forgecrm_products::ProductDetail;

    #[test]
    fn delete_removes_customer_and_orphans_its_products() {
        let customers = Arc::new(InMemoryCustomerStore::new());
        let products = Arc::new(InMemoryProductStore::new());

        let ada = Customer::new(CustomerId::new(), "Ada", "ada@x.com", "555", Utc::now()).unwrap();
        let id = ada.id_typed();
        customers.add(ada);

        let mut widget =
            ProductDetail::new(ProductId::new(), "Widget", "", 100, 1, None, Utc::now()).unwrap();
        widget.assign_to_customer(id, Utc::now());
        let product_id = widget.id_typed();
        products.add(widget);

        let resp = pipeline(customers.clone(), products.clone())
            .send(DeleteCustomer { id })
            .unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Customer deleted successfully");

        assert!(customers.get(&id).is_none());
        let orphan = products.get(&product_id).unwrap();
        assert_eq!(orphan.customer_id(), None);
    }

    #[test]
    fn deleting_a_missing_customer_is_not_found() {
        let pipeline = pipeline(
            Arc::new(InMemoryCustomerStore::new()),
            Arc::new(InMemoryProductStore::new()),
        );

        let err = pipeline.send(DeleteCustomer { id: CustomerId::new() }).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
