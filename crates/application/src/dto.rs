//! Read-side DTOs returned inside response envelopes.

use serde::Serialize;

use forgecrm_core::{CustomerId, DetailId, ProductId};
use forgecrm_customers::{Customer, CustomerDetail};
use forgecrm_products::ProductDetail;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<CustomerDetailDto>,
    pub products: Vec<ProductDto>,
}

impl CustomerDto {
    /// Combine a customer with its owned products (joined by the caller).
    pub fn from_parts(customer: &Customer, products: Vec<ProductDetail>) -> Self {
        Self {
            id: customer.id_typed(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            phone: customer.phone().to_string(),
            detail: customer.detail().map(CustomerDetailDto::from),
            products: products.iter().map(ProductDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailDto {
    pub id: DetailId,
    pub address: String,
    pub notes: String,
    pub customer_id: CustomerId,
}

impl From<&CustomerDetail> for CustomerDetailDto {
    fn from(detail: &CustomerDetail) -> Self {
        Self {
            id: detail.id_typed(),
            address: detail.address().to_string(),
            notes: detail.notes().to_string(),
            customer_id: detail.customer_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
}

impl From<&ProductDetail> for ProductDto {
    fn from(product: &ProductDetail) -> Self {
        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price_cents: product.price_cents(),
            stock: product.stock(),
            customer_id: product.customer_id(),
        }
    }
}
