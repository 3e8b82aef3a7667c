//! `forgecrm-application` — the request execution layer.
//!
//! Every API operation is modeled as a `Request` with a dedicated handler and
//! a (possibly empty) validator set, executed through a shared `Pipeline`:
//!
//! ```text
//! Request
//!   ↓
//! 1. VALIDATE — run all validators, aggregating failures per field
//!   ↓            (on failure: fabricate a failure response, skip the handler)
//! 2. EXECUTE  — invoke the handler exactly once
//!   ↓            (domain / not-found errors propagate to the caller)
//! 3. LOG      — always record request name + elapsed time
//! ```
//!
//! This keeps domain code pure (entities validate invariants, handlers
//! orchestrate repositories) and gives every operation identical validation,
//! logging, and error semantics.

pub mod dto;
pub mod error;
pub mod paging;
pub mod pipeline;
pub mod response;
pub mod validation;

pub mod customers;
pub mod products;

pub use error::AppError;
pub use paging::{PageParams, PagedList};
pub use pipeline::{Handler, Pipeline, Request};
pub use response::{FromRejection, Response};
pub use validation::{FieldErrors, Validator};
