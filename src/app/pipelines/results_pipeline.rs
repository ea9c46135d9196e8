use crate::core::marks::format_performance;
use crate::core::results::group_results;
use crate::core::text::relay_names;
use crate::core::{
    ConfigProvider, DisplayReport, DisplayRow, Pipeline, ResultRecord, ResultsBySeason, Storage,
};
use crate::domain::model::parse_records;
use crate::utils::error::{FilterError, Result};

pub const JSON_OUTPUT: &str = "results.json";
pub const CSV_OUTPUT: &str = "results.csv";

/// 讀取成績 JSON，分組排序後輸出顯示用的 JSON 與 CSV
pub struct ResultsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ResultsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn display_rows(&self, grouped: &ResultsBySeason) -> Result<Vec<DisplayRow>> {
        let mut rows = Vec::new();

        for (season, events) in grouped {
            for (event, records) in events {
                for (index, record) in records.iter().enumerate() {
                    rows.push(DisplayRow {
                        season: season.clone(),
                        event: event.clone(),
                        place: index + 1,
                        athletes: relay_names(&record.athletes).join(""),
                        mark: format_performance(record, self.config.cross_country_seasons())?,
                    });
                }
            }
        }

        Ok(rows)
    }

    fn render_csv(rows: &[DisplayRow]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        // 空資料時也要輸出標頭
        writer.write_record(["season", "event", "place", "athletes", "mark"])?;
        for row in rows {
            let place = row.place.to_string();
            writer.write_record([
                row.season.as_str(),
                row.event.as_str(),
                place.as_str(),
                row.athletes.as_str(),
                row.mark.as_str(),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| FilterError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| FilterError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ResultsPipeline<S, C> {
    fn extract(&self) -> Result<Vec<ResultRecord>> {
        tracing::debug!("Reading result records from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;

        let records = parse_records(&data)?;
        if records.is_empty() {
            tracing::warn!("⚠️ No result records in {}", self.config.input_path());
        }

        Ok(records)
    }

    fn transform(&self, records: Vec<ResultRecord>) -> Result<DisplayReport> {
        let grouped = group_results(&records)?;
        let rows = self.display_rows(&grouped)?;
        let csv_output = Self::render_csv(&rows)?;

        tracing::debug!(
            "Grouped {} records into {} events",
            rows.len(),
            grouped.values().map(|events| events.len()).sum::<usize>()
        );

        Ok(DisplayReport {
            grouped,
            rows,
            csv_output,
        })
    }

    fn load(&self, report: DisplayReport) -> Result<String> {
        let output_path = self.config.output_path();

        for format in self.config.output_formats() {
            match format.as_str() {
                "json" => {
                    let json_data = serde_json::to_string_pretty(&report.grouped)?;
                    self.storage
                        .write_file(&format!("{}/{}", output_path, JSON_OUTPUT), json_data.as_bytes())?;
                }
                "csv" => {
                    self.storage.write_file(
                        &format!("{}/{}", output_path, CSV_OUTPUT),
                        report.csv_output.as_bytes(),
                    )?;
                }
                other => {
                    return Err(FilterError::invalid_value(
                        "output_formats",
                        other,
                        "Unsupported output format",
                    ))
                }
            }
            tracing::debug!("Wrote {} output", format);
        }

        Ok(output_path.to_string())
    }
}
