use std::sync::Arc;

use chrono::Utc;

use forgecrm_core::{CustomerId, ProductId};
use forgecrm_customers::CustomerRepository;
use forgecrm_products::ProductRepository;

use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Assign a product to a customer.
///
/// Assignment is idempotent, and a product already owned by another customer
/// is reassigned rather than rejected.
#[derive(Debug, Clone, Copy)]
pub struct AddProductToCustomer {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
}

impl Request for AddProductToCustomer {
    type Response = Response<()>;
    const NAME: &'static str = "customers.add_product";
}

pub struct RequireIds;

impl Validator<AddProductToCustomer> for RequireIds {
    fn validate(&self, request: &AddProductToCustomer, errors: &mut FieldErrors) {
        if request.customer_id.is_nil() {
            rules::fail(errors, "customerId", "Customer ID is required");
        }
        if request.product_id.is_nil() {
            rules::fail(errors, "productId", "Product ID is required");
        }
    }
}

pub struct AddProductToCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl AddProductToCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: AddProductToCustomer) -> Result<Response<()>, AppError> {
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

        product.assign_to_customer(request.customer_id, Utc::now());
        self.products.save(product);
        Ok(Response::succeed_empty("Product added to customer successfully"))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<AddProductToCustomer> {
    let handler = AddProductToCustomerHandler::new(customers, products);
    Pipeline::new(move |request: AddProductToCustomer| handler.handle(request)).with_validator(RequireIds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgecrm_customers::Customer;
    use forgecrm_infra::{InMemoryCustomerStore, InMemoryProductStore};
    use forgecrm_products::ProductDetail;

    struct Fixture {
        customers: Arc<InMemoryCustomerStore>,
        products: Arc<InMemoryProductStore>,
        customer_id: CustomerId,
        product_id: ProductId,
    }

    fn fixture() -> Fixture {
        let customers = Arc::new(InMemoryCustomerStore::new());
        let products = Arc::new(InMemoryProductStore::new());

        let ada = Customer::new(CustomerId::new(), "Ada", "ada@x.com", "555", Utc::now()).unwrap();
        let customer_id = ada.id_typed();
        customers.add(ada);

        let widget =
            ProductDetail::new(ProductId::new(), "Widget", "", 100, 1, None, Utc::now()).unwrap();
        let product_id = widget.id_typed();
        products.add(widget);

        Fixture { customers, products, customer_id, product_id }
    }

    #[test]
    fn assignment_links_the_product_to_the_customer() {
        let f = fixture();
        let pipeline = pipeline(f.customers, f.products.clone());

        let resp = pipeline
            .send(AddProductToCustomer {
                customer_id: f.customer_id,
                product_id: f.product_id,
            })
            .unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "Product added to customer successfully");
        assert_eq!(
            f.products.get(&f.product_id).unwrap().customer_id(),
            Some(f.customer_id)
        );
    }

    #[test]
    fn reassignment_moves_ownership_to_the_new_customer() {
        let f = fixture();
        let other =
            Customer::new(CustomerId::new(), "Grace", "g@x.com", "556", Utc::now()).unwrap();
        let other_id = other.id_typed();
        f.customers.add(other);

        let pipeline = pipeline(f.customers, f.products.clone());
        pipeline
            .send(AddProductToCustomer {
                customer_id: f.customer_id,
                product_id: f.product_id,
            })
            .unwrap();
        pipeline
            .send(AddProductToCustomer {
                customer_id: other_id,
                product_id: f.product_id,
            })
            .unwrap();

        assert_eq!(
            f.products.get(&f.product_id).unwrap().customer_id(),
            Some(other_id)
        );
    }

    #[test]
    fn missing_customer_or_product_maps_to_not_found() {
        let f = fixture();
        let pipeline = pipeline(f.customers, f.products);

        let err = pipeline
            .send(AddProductToCustomer {
                customer_id: CustomerId::new(),
                product_id: f.product_id,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = pipeline
            .send(AddProductToCustomer {
                customer_id: f.customer_id,
                product_id: ProductId::new(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
