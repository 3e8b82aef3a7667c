//! Product domain: the `ProductDetail` entity and its repository seam.

pub mod product;
pub mod repository;

pub use product::ProductDetail;
pub use repository::ProductRepository;
