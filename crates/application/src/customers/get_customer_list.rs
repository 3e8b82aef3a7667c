use std::collections::HashMap;
use std::sync::Arc;

use forgecrm_core::CustomerId;
use forgecrm_customers::CustomerRepository;
use forgecrm_products::{ProductDetail, ProductRepository};

use crate::dto::CustomerDto;
use crate::error::AppError;
use crate::paging::{validate, PageParams, PagedList};
use crate::pipeline::{Pipeline, Request};
use crate::response::Response;
use crate::validation::{FieldErrors, Validator};

/// List customers one page at a time, each with its owned products.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCustomerList {
    pub paging: PageParams,
}

impl Request for GetCustomerList {
    type Response = Response<PagedList<CustomerDto>>;
    const NAME: &'static str = "customers.get_list";
}

pub struct PageBounds;

impl Validator<GetCustomerList> for PageBounds {
    fn validate(&self, request: &GetCustomerList, errors: &mut FieldErrors) {
        validate::page_params(&request.paging, errors);
    }
}

pub struct GetCustomerListHandler {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl GetCustomerListHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { customers, products }
    }

    fn handle(&self, request: GetCustomerList) -> Result<Response<PagedList<CustomerDto>>, AppError> {
        // One pass over the product store instead of a lookup per customer.
        let mut by_owner: HashMap<CustomerId, Vec<ProductDetail>> = HashMap::new();
        for product in self.products.list() {
            if let Some(owner) = product.customer_id() {
                by_owner.entry(owner).or_default().push(product);
            }
        }

        let customers: Vec<CustomerDto> = self
            .customers
            .list()
            .iter()
            .map(|customer| {
                let owned = by_owner.remove(&customer.id_typed()).unwrap_or_default();
                CustomerDto::from_parts(customer, owned)
            })
            .collect();

        let page = PagedList::from_items(customers, request.paging);
        Ok(Response::succeed(page, "Customers retrieved successfully"))
    }
}

pub fn pipeline(
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
) -> Pipeline<GetCustomerList> {
    let handler = GetCustomerListHandler::new(customers, products);
    Pipeline::new(move |request: GetCustomerList| handler.handle(request)).with_validator(PageBounds)
}
