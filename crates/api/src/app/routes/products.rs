use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use forgecrm_application::products::{
    CreateProduct, DeleteProduct, GetProductById, GetProductList, UpdateProduct,
};
use forgecrm_application::PageParams;
use forgecrm_core::ProductId;

use crate::app::errors;
use crate::app::routes::common::{parse_path_id, respond, respond_no_content};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(paging): Query<PageParams>,
) -> axum::response::Response {
    respond(
        services.products.get_list.send(GetProductList { paging }),
        StatusCode::OK,
    )
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_path_id::<ProductId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond(
        services.products.get_by_id.send(GetProductById { id }),
        StatusCode::OK,
    )
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CreateProduct>,
) -> axum::response::Response {
    respond(services.products.create.send(body), StatusCode::CREATED)
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateProduct>,
) -> axum::response::Response {
    let id = match parse_path_id::<ProductId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if body.id != id {
        return errors::bad_request("ID in the path does not match ID in the body");
    }
    respond(services.products.update.send(body), StatusCode::OK)
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_path_id::<ProductId>(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    respond_no_content(services.products.delete.send(DeleteProduct { id }))
}
