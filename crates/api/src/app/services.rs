//! Store wiring and the pre-built request pipelines.
//!
//! Every pipeline is constructed once at startup and shared behind the
//! `AppServices` extension; handlers only call `send`.

use std::sync::Arc;

use forgecrm_application::customers::{
    add_product_to_customer, create_customer, delete_customer, get_customer_by_id,
    get_customer_list, remove_product_from_customer, update_customer, update_customer_detail,
    AddProductToCustomer, CreateCustomer, DeleteCustomer, GetCustomerById, GetCustomerList,
    RemoveProductFromCustomer, UpdateCustomer, UpdateCustomerDetail,
};
use forgecrm_application::products::{
    create_product, delete_product, get_product_by_id, get_product_list, update_product,
    CreateProduct, DeleteProduct, GetProductById, GetProductList, UpdateProduct,
};
use forgecrm_application::Pipeline;
use forgecrm_customers::CustomerRepository;
use forgecrm_infra::{seed_stores, InMemoryCustomerStore, InMemoryProductStore, SeedConfig};
use forgecrm_products::ProductRepository;

pub struct CustomerPipelines {
    pub get_list: Pipeline<GetCustomerList>,
    pub get_by_id: Pipeline<GetCustomerById>,
    pub create: Pipeline<CreateCustomer>,
    pub update: Pipeline<UpdateCustomer>,
    pub delete: Pipeline<DeleteCustomer>,
    pub update_detail: Pipeline<UpdateCustomerDetail>,
    pub add_product: Pipeline<AddProductToCustomer>,
    pub remove_product: Pipeline<RemoveProductFromCustomer>,
}

pub struct ProductPipelines {
    pub get_list: Pipeline<GetProductList>,
    pub get_by_id: Pipeline<GetProductById>,
    pub create: Pipeline<CreateProduct>,
    pub update: Pipeline<UpdateProduct>,
    pub delete: Pipeline<DeleteProduct>,
}

pub struct AppServices {
    pub customers: CustomerPipelines,
    pub products: ProductPipelines,
}

impl AppServices {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            customers: CustomerPipelines {
                get_list: get_customer_list::pipeline(customers.clone(), products.clone()),
                get_by_id: get_customer_by_id::pipeline(customers.clone(), products.clone()),
                create: create_customer::pipeline(customers.clone()),
                update: update_customer::pipeline(customers.clone(), products.clone()),
                delete: delete_customer::pipeline(customers.clone(), products.clone()),
                update_detail: update_customer_detail::pipeline(
                    customers.clone(),
                    products.clone(),
                ),
                add_product: add_product_to_customer::pipeline(
                    customers.clone(),
                    products.clone(),
                ),
                remove_product: remove_product_from_customer::pipeline(customers, products.clone()),
            },
            products: ProductPipelines {
                get_list: get_product_list::pipeline(products.clone()),
                get_by_id: get_product_by_id::pipeline(products.clone()),
                create: create_product::pipeline(products.clone()),
                update: update_product::pipeline(products.clone()),
                delete: delete_product::pipeline(products),
            },
        }
    }
}

/// Wire fresh stores, seed them, and build the pipelines.
///
/// `SEED_COUNT` controls how many customers get generated; `0` disables
/// seeding entirely.
pub fn build_services() -> AppServices {
    let customers = Arc::new(InMemoryCustomerStore::new());
    let products = Arc::new(InMemoryProductStore::new());

    let seed_count = std::env::var("SEED_COUNT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(SeedConfig::default().customers);
    if seed_count > 0 {
        let config = SeedConfig {
            customers: seed_count,
            ..SeedConfig::default()
        };
        seed_stores(customers.as_ref(), products.as_ref(), config);
    }

    AppServices::new(customers, products)
}

/// Pipelines over empty stores, for tests that need a known-clean state.
pub fn build_unseeded_services() -> AppServices {
    AppServices::new(
        Arc::new(InMemoryCustomerStore::new()),
        Arc::new(InMemoryProductStore::new()),
    )
}
