use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use forgecrm_core::ProductId;
use forgecrm_products::ProductRepository;

use crate::dto::ProductDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::products::validate_product_fields;
use crate::response::Response;
use crate::validation::{rules, FieldErrors, Validator};

/// Replace a product's mutable fields. Ownership is not touched here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl Request for UpdateProduct {
    type Response = Response<ProductDto>;
    const NAME: &'static str = "products.update";
}

pub struct UpdateRules;

impl Validator<UpdateProduct> for UpdateRules {
    fn validate(&self, request: &UpdateProduct, errors: &mut FieldErrors) {
        if request.id.is_nil() {
            rules::fail(errors, "id", "Product ID is required");
        }
        validate_product_fields(
            &request.name,
            &request.description,
            request.price_cents,
            request.stock,
            errors,
        );
    }
}

pub struct UpdateProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl UpdateProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    fn handle(&self, request: UpdateProduct) -> Result<Response<ProductDto>, AppError> {
        let mut product = self.products.get(&request.id).ok_or_else(|| {
            AppError::not_found(format!("Product with ID {} was not found", request.id))
        })?;
        product.update(
            &request.name,
            &request.description,
            request.price_cents,
            request.stock,
            Utc::now(),
        )?;

        let dto = ProductDto::from(&product);
        self.products.save(product);
        Ok(Response::succeed(dto, "Product updated successfully"))
    }
}

pub fn pipeline(products: Arc<dyn ProductRepository>) -> Pipeline<UpdateProduct> {
    let handler = UpdateProductHandler::new(products);
    Pipeline::new(move |request: UpdateProduct| handler.handle(request)).with_validator(UpdateRules)
}
