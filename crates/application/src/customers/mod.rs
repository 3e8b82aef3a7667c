//! Customer operations: one module per request, each bundling the request
//! type, its validator set, its handler, and a `pipeline` constructor.

pub mod add_product_to_customer;
pub mod create_customer;
pub mod delete_customer;
pub mod get_customer_by_id;
pub mod get_customer_list;
pub mod remove_product_from_customer;
pub mod update_customer;
pub mod update_customer_detail;

pub use add_product_to_customer::AddProductToCustomer;
pub use create_customer::CreateCustomer;
pub use delete_customer::DeleteCustomer;
pub use get_customer_by_id::GetCustomerById;
pub use get_customer_list::GetCustomerList;
pub use remove_product_from_customer::RemoveProductFromCustomer;
pub use update_customer::UpdateCustomer;
pub use update_customer_detail::UpdateCustomerDetail;

use crate::validation::{rules, FieldErrors};

/// Contact-field rules shared by create and update.
fn validate_contact(name: &str, email: &str, phone: &str, errors: &mut FieldErrors) {
    rules::required(errors, "name", name, "Name is required");
    rules::max_length(errors, "name", name, 100, "Name cannot exceed 100 characters");

    rules::required(errors, "email", email, "Email is required");
    rules::email(errors, "email", email, "Invalid email format");
    rules::max_length(errors, "email", email, 150, "Email cannot exceed 150 characters");

    rules::required(errors, "phone", phone, "Phone is required");
    rules::phone(errors, "phone", phone, "Invalid phone number format");
    rules::max_length(errors, "phone", phone, 20, "Phone cannot exceed 20 characters");
}
