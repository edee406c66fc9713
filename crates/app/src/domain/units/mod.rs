//! Units

pub mod data;
pub mod errors;
pub mod memory;
pub mod records;
pub mod repository;
pub mod service;
pub mod types;

pub use errors::{ErrorKind, UnitsRepositoryError, UnitsServiceError};
pub use memory::MemoryUnitsRepository;
pub use repository::{PgUnitsRepository, UnitsRepository};
pub use service::*;
