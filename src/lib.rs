pub mod analytics;
pub mod cell;
pub mod config;
pub mod error;
pub mod launch;
pub mod loader;
pub mod report;
pub mod store;

pub use cell::Cell;
pub use error::{CellError, Result};
pub use store::CellStore;
