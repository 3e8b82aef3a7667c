use std::sync::Arc;

use chrono::Utc;

use forgecrm_core::{CustomerId, ProductId};
use forgecrm_customers::CustomerRepository;
use forgecrm_products::ProductRepository;

use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Unassign a product from a customer. The product itself survives.
#[derive(Debug, Clone, Copy)]
pub struct RemoveProductFromCustomer {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
}

impl Request for RemoveProductFromCustomer {
    type Response = Response<()>;
    const NAME: &'static str = "customers.remove_product";
}

pub struct RequireIds;

impl Validator<RemoveProductFromCustomer> for RequireIds {
    fn validate(&self, request: &RemoveProductFromCustomer, errors: &mut FieldErrors) {
        if request.customer_id.is_nil() {
            rules::fail(errors, "customerId", "Customer ID is required");
        }
        if request.product_id.is_nil() {
            rules::fail(errors, "productId", "Product ID is required");
        }
    }
}

pub struct RemoveProductFromCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl RemoveProductFromCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: RemoveProductFromCustomer) -> Result<Response<()>, AppError> {
        if self.customers.get(&request.customer_id).is_none() {
            return Err(AppError::not_found(format!(
                "Customer with ID {} was not found",
                request.customer_id
            )));
        }
        let mut product = self.products.get(&request.product_id).ok_or_else(|| {
            AppError::not_found(format!(
                "Product with ID {} was not found",
                request.product_id
            ))
        })?;

        // Only an actual link can be removed.
        if product.customer_id() != Some(request.customer_id) {
            return Err(AppError::not_found(format!(
                "Product with ID {} is not assigned to customer {}",
                request.product_id, request.customer_id
            )));
        }

        product.unassign_from_customer(Utc::now());
        self.products.save(product);
        Ok(Response::succeed_empty(
            "Product removed from customer successfully",
        ))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<RemoveProductFromCustomer> {
    let handler = RemoveProductFromCustomerHandler::new(customers, products);
    Pipeline::new(move |request: RemoveProductFromCustomer| handler.handle(request)).with_validator(RequireIds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgecrm_customers::Customer;
    use forgecrm_infra::{InMemoryCustomerStore, InMemoryProductStore};
    use forgecrm_products::ProductDetail;

    fn linked_fixture() -> (
        Arc<InMemoryCustomerStore>,
        Arc<InMemoryProductStore>,
        CustomerId,
        ProductId,
    ) {
        let customers = Arc::new(InMemoryCustomerStore::new());
        let products = Arc::new(InMemoryProductStore::new());

        let ada = Customer::new(CustomerId::new(), "Ada", "ada@x.com", "555", Utc::now()).unwrap();
        let customer_id = ada.id_typed();
        customers.add(ada);

        let mut widget =
            ProductDetail::new(ProductId::new(), "Widget", "", 100, 1, None, Utc::now()).unwrap();
        widget.assign_to_customer(customer_id, Utc::now());
        let product_id = widget.id_typed();
        products.add(widget);

        (customers, products, customer_id, product_id)
    }

    #[test]
    fn removal_clears_ownership_but_keeps_the_product() {
        let (customers, products, customer_id, product_id) = linked_fixture();

        let resp = pipeline(customers, products.clone())
            .send(RemoveProductFromCustomer { customer_id, product_id })
            .unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Product removed from customer successfully");

        let survivor = products.get(&product_id).unwrap();
        assert_eq!(survivor.customer_id(), None);
    }

    #[test]
    fn removing_an_unlinked_product_is_not_found() {
        let (customers, products, customer_id, _) = linked_fixture();
        let loose =
            ProductDetail::new(ProductId::new(), "Loose", "", 50, 1, None, Utc::now()).unwrap();
        let loose_id = loose.id_typed();
        products.add(loose);

        let err = pipeline(customers, products)
            .send(RemoveProductFromCustomer { customer_id, product_id: loose_id })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
