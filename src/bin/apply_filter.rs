use anyhow::Context;
use clap::Parser;
use itc_filters::utils::logger::{self, LogFormat};
use itc_filters::Filter;

#[derive(Parser)]
#[command(name = "apply-filter")]
#[command(about = "Applies one display filter to a JSON value")]
struct Args {
    /// Filter name, e.g. trackTime or relayNames
    filter: String,

    /// Input value as JSON, e.g. 115.05 or '[{"name":"Tyler Splitt"}]'
    input: String,

    /// Extra filter arguments as JSON, e.g. '"date"' true
    args: Vec<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    /// Log filter progress at debug level
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_format, args.verbose)?;

    let filter: Filter = args.filter.parse()?;
    let input: serde_json::Value =
        serde_json::from_str(&args.input).context("input is not valid JSON")?;
    let extra = args
        .args
        .iter()
        .map(|raw| serde_json::from_str(raw).with_context(|| format!("argument {} is not valid JSON", raw)))
        .collect::<anyhow::Result<Vec<serde_json::Value>>>()?;

    tracing::debug!(filter = %filter, "applying filter from command line");
    let output = filter.apply(&input, &extra)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}
