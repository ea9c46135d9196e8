use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting report build...");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("📥 Extracted {} result records", records.len());

        // Transform
        let report = self.pipeline.transform(records)?;
        tracing::info!(
            "🔄 Formatted {} rows across {} seasons",
            report.record_count(),
            report.grouped.len()
        );

        // Load
        let output_path = self.pipeline.load(report)?;
        tracing::info!("💾 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
