//! Product module: repository abstraction, SeaORM backend, and service.

pub mod repository;
pub mod repo;
pub mod service;

pub use repository::ProductRepository;
pub use service::ProductService;
