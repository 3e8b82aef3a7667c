//! Product operations, mirroring the customer module layout.

pub mod create_product;
pub mod delete_product;
pub mod get_product_by_id;
pub mod get_product_list;
pub mod update_product;

pub use create_product::CreateProduct;
pub use delete_product::DeleteProduct;
pub use get_product_by_id::GetProductById;
pub use get_product_list::GetProductList;
pub use update_product::UpdateProduct;

use crate::validation::{rules, FieldErrors};

/// Field rules shared by create and update.
fn validate_product_fields(
    name: &str,
    description: &str,
    price_cents: i64,
    stock: i64,
    errors: &mut FieldErrors,
) {
    rules::required(errors, "name", name, "Name is required");
    rules::max_length(errors, "name", name, 100, "Name cannot exceed 100 characters");
    rules::max_length(
        errors,
        "description",
        description,
        500,
        "Description cannot exceed 500 characters",
    );
    rules::non_negative(errors, "priceCents", price_cents, "Price cannot be negative");
    rules::non_negative(errors, "stock", stock, "Stock cannot be negative");
}
