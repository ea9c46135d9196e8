pub mod engine;
pub mod marks;
pub mod order;
pub mod registry;
pub mod results;
pub mod text;

pub use crate::domain::model::{DisplayReport, DisplayRow, ResultRecord, ResultsBySeason};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
