use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use forgecrm_core::ProductId;
use forgecrm_products::{ProductDetail, ProductRepository};

use crate::dto::ProductDto;
use crate::error::AppError;
use crate::pipeline::{Pipeline, Request};
use crate::products::validate_product_fields;
use crate::response::Response;
use crate::validation::{FieldErrors, Validator};

/// Create an unassigned product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl Request for CreateProduct {
    type Response = Response<ProductDto>;
    const NAME: &'static str = "products.create";
}

pub struct ProductRules;

impl Validator<CreateProduct> for ProductRules {
    fn validate(&self, request: &CreateProduct, errors: &mut FieldErrors) {
        validate_product_fields(
            &request.name,
            &request.description,
            request.price_cents,
            request.stock,
            errors,
        );
    }
}

pub struct CreateProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    fn handle(&self, request: CreateProduct) -> Result<Response<ProductDto>, AppError> {
        let product = ProductDetail::new(
            ProductId::new(),
            &request.name,
            &request.description,
            request.price_cents,
            request.stock,
            None,
            Utc::now(),
        )?;
        let dto = ProductDto::from(&product);
        self.products.add(product);
        Ok(Response::succeed(dto, "Product created successfully"))
    }
}

pub fn pipeline(products: Arc<dyn ProductRepository>) -> Pipeline<CreateProduct> {
    let handler = CreateProductHandler::new(products);
    Pipeline::new(move |request: CreateProduct| handler.handle(request)).with_validator(ProductRules)
}
