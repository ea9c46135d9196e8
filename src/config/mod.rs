pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::marks::DEFAULT_CROSS_COUNTRY_SEASON;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::logger::LogFormat;
    use crate::utils::validation::{validate_output_formats, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "itc-filters")]
    #[command(about = "Formats athletic results into display-ready tables")]
    pub struct CliConfig {
        #[arg(long, default_value = "results.json")]
        pub input: String,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_delimiter = ',', default_value = "json,csv")]
        pub formats: Vec<String>,

        #[arg(long, value_delimiter = ',', default_value = DEFAULT_CROSS_COUNTRY_SEASON)]
        pub cross_country_seasons: Vec<String>,

        #[arg(long, help = "TOML config file; its settings replace the flag defaults")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Log line format on stderr")]
        pub log_format: LogFormat,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn cross_country_seasons(&self) -> &[String] {
            &self.cross_country_seasons
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            validate_path("output_path", &self.output_path)?;
            validate_output_formats("formats", &self.formats)
        }
    }

}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;
