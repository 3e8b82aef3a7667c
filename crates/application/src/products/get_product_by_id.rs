use std::sync::Arc;

use forgecrm_core::ProductId;
use forgecrm_products::ProductRepository;

use crate::dto::ProductDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Fetch one product by id.
#[derive(Debug, Clone, Copy)]
pub struct GetProductById {
    pub id: ProductId,
}

impl Request for GetProductById {
    type Response = Response<ProductDto>;
    const NAME: &'static str = "products.get_by_id";
}

pub struct RequireId;

impl Validator<GetProductById> for RequireId {
    fn validate(&self, request: &GetProductById, errors: &mut FieldErrors) {
        if request.id.is_nil() {
            rules::fail(errors, "id", "Product ID is required");
        }
    }
}

pub struct GetProductByIdHandler {
    products: Arc<dyn ProductRepository>,
}

impl GetProductByIdHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    fn handle(&self, request: GetProductById) -> Result<Response<ProductDto>, AppError> {
        let product = self.products.get(&request.id).ok_or_else(|| {
            AppError::not_found(format!("Product with ID {} was not found", request.id))
        })?;
        Ok(Response::succeed(
            ProductDto::from(&product),
            "Product retrieved successfully",
        ))
    }
}

pub fn pipeline(products: Arc<dyn ProductRepository>) -> Pipeline<GetProductById> {
    let handler = GetProductByIdHandler::new(products);
    Pipeline::new(move |request: GetProductById| handler.handle(request)).with_validator(RequireId)
}
