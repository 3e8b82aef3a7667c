//! Request body DTOs where the HTTP shape differs from the pipeline request
//! (ids arriving via the path instead of the body).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDetailBody {
    pub address: String,
    #[serde(default)]
    pub notes: String,
}
