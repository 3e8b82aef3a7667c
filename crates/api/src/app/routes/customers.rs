use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use forgecrm_application::customers::{
    AddProductToCustomer, CreateCustomer, DeleteCustomer, GetCustomerById, GetCustomerList,
    RemoveProductFromCustomer, UpdateCustomer, UpdateCustomerDetail,
};
use forgecrm_application::PageParams;
use forgecrm_core::{CustomerId, ProductId};

use crate::app::dto::UpdateCustomerDetailBody;
use crate::app::errors;
use crate::app::routes::common::{parse_path_id, respond, respond_no_content};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_customer).get(list_customers))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/:id/detail", put(update_customer_detail))
        .route(
            "/:id/products/:product_id",
            post(add_product).delete(remove_product),
        )
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(paging): Query<PageParams>,
) -> axum::response::Response {
    respond(
        services.customers.get_list.send(GetCustomerList { paging }),
        StatusCode::OK,
    )
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_path_id::<CustomerId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(
        services.customers.get_by_id.send(GetCustomerById { id }),
        StatusCode::OK,
    )
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CreateCustomer>,
) -> axum::response::Response {
    respond(services.customers.create.send(body), StatusCode::CREATED)
}

pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCustomer>,
) -> axum::response::Response {
    let id = match parse_path_id::<CustomerId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if body.id != id {
        return errors::bad_request("ID in the path does not match ID in the body");
    }
    respond(services.customers.update.send(body), StatusCode::OK)
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_path_id::<CustomerId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond_no_content(services.customers.delete.send(DeleteCustomer { id }))
}

pub async fn update_customer_detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCustomerDetailBody>,
) -> axum::response::Response {
    let id = match parse_path_id::<CustomerId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(
        services.customers.update_detail.send(UpdateCustomerDetail {
            customer_id: id,
            address: body.address,
            notes: body.notes,
        }),
        StatusCode::OK,
    )
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (customer_id, product_id) = match parse_link_ids(&id, &product_id) {
        Ok(ids) => ids,
        Err(resp) => return resp,
    };
    respond_no_content(services.customers.add_product.send(AddProductToCustomer {
        customer_id,
        product_id,
    }))
}

pub async fn remove_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (customer_id, product_id) = match parse_link_ids(&id, &product_id) {
        Ok(ids) => ids,
        Err(resp) => return resp,
    };
    respond_no_content(
        services
            .customers
            .remove_product
            .send(RemoveProductFromCustomer {
                customer_id,
                product_id,
            }),
    )
}

fn parse_link_ids(
    customer_id: &str,
    product_id: &str,
) -> Result<(CustomerId, ProductId), axum::response::Response> {
    Ok((parse_path_id(customer_id)?, parse_path_id(product_id)?))
}
