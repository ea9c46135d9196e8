pub mod results_pipeline;

pub use results_pipeline::ResultsPipeline;
