use crate::domain::model::{DisplayReport, ResultRecord};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn cross_country_seasons(&self) -> &[String];
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<ResultRecord>>;
    fn transform(&self, records: Vec<ResultRecord>) -> Result<DisplayReport>;
    fn load(&self, report: DisplayReport) -> Result<String>;
}
