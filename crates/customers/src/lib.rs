//! Customer domain: the `Customer` entity, its optional detail record, and
//! the repository seam the infrastructure layer implements.

pub mod customer;
pub mod detail;
pub mod repository;

pub use customer::Customer;
pub use detail::CustomerDetail;
pub use repository::CustomerRepository;
