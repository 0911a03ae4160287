mod model;
mod repository;

pub use model::{CandleDB, NewCandleDB};
pub use repository::CandleRepository;
