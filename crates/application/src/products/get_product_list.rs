use std::sync::Arc;

use forgecrm_products::ProductRepository;

use crate::dto::ProductDto;
use crate::error::AppError;
use crate::paging::{validate, PageParams, PagedList};
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{FieldErrors, Validator};

/// List products one page at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetProductList {
    pub paging: PageParams,
}

impl Request for GetProductList {
    type Response = Response<PagedList<ProductDto>>;
    const NAME: &'static str = "products.get_list";
}

pub struct PageBounds;

impl Validator<GetProductList> for PageBounds {
    fn validate(&self, request: &GetProductList, errors: &mut FieldErrors) {
        validate::page_params(&request.paging, errors);
    }
}

pub struct GetProductListHandler {
    products: Arc<dyn ProductRepository>,
}

impl GetProductListHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    fn handle(&self, request: GetProductList) -> Result<Response<PagedList<ProductDto>>, AppError> {
        let items: Vec<ProductDto> = self.products.list().iter().map(ProductDto::from).collect();
        let page = PagedList::from_items(items, request.paging);
        Ok(Response::succeed(page, "Products retrieved successfully"))
    }
}

pub fn pipeline(products: Arc<dyn ProductRepository>) -> Pipeline<GetProductList> {
    let handler = GetProductListHandler::new(products);
    Pipeline::new(move |request: GetProductList| handler.handle(request)).with_validator(PageBounds)
}
