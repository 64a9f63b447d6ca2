pub mod form;
pub mod repository;
pub mod service;

pub use form::CafeForm;
pub use repository::{CafeStore, SeaOrmCafeStore};
pub use service::CafeService;
