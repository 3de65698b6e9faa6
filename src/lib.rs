pub mod config;
pub mod console;
pub mod error;
pub mod generator;
pub mod models;
pub mod search;
pub mod session;

pub use error::{Error, Result};
pub use generator::{generate, DatasetGenerator};
pub use models::{Category, CategorySettings, QueryState, Record, RecordKind};
pub use session::{SearchSession, SearchSnapshot};
