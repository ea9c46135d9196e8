pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::ResultsPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::engine::ReportEngine;
pub use self::core::marks::{format_performance, track_dist, track_time, xc_time};
pub use self::core::order::{order_object_by, order_object_by_key};
pub use self::core::registry::{apply_filter, Filter};
pub use self::core::results::group_results;
pub use self::core::text::{nl2br, relay_names};
pub use domain::model::{Athlete, DisplayReport, DisplayRow, Event, ResultRecord, ResultsBySeason};
pub use utils::error::{FilterError, Result};
