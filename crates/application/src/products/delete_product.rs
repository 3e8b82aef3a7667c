use std::sync::Arc;

use forgecrm_core::ProductId;
use forgecrm_products::ProductRepository;

use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Delete a product, assigned or not.
#[derive(Debug, Clone, Copy)]
pub struct DeleteProduct {
    pub id: ProductId,
}

impl Request for DeleteProduct {
    type Response = Response<()>;
    const NAME: &'static str = "products.delete";
}

pub struct RequireId;

impl Validator<DeleteProduct> for RequireId {
    fn validate(&self, request: &DeleteProduct, errors: &mut FieldErrors) {
        if request.id.is_nil() {
            rules::fail(errors, "id", "Product ID is required");
        }
    }
}

pub struct DeleteProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl DeleteProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    fn handle(&self, request: DeleteProduct) -> Result<Response<()>, AppError> {
        if !self.products.remove(&request.id) {
            return Err(AppError::not_found(format!(
                "Product with ID {} was not found",
                request.id
            )));
        }
        Ok(Response::succeed_empty("Product deleted successfully"))
    }
}

pub fn pipeline(products: Arc<dyn ProductRepository>) -> Pipeline<DeleteProduct> {
    let handler = DeleteProductHandler::new(products);
    Pipeline::new(move |request: DeleteProduct| handler.handle(request)).with_validator(RequireId)
}
