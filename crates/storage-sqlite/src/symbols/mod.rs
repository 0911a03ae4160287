mod model;
mod repository;

pub use model::{NewSymbolMappingDB, SymbolMappingDB};
pub use repository::SymbolRepository;
