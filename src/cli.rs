//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::analysis::analyze;
use crate::domain::config_validation::{
    read_days, read_enum, read_number, require_enum, validate_analysis_config,
};
use crate::domain::error::TradelabError;
use crate::domain::input::AnalysisInput;
use crate::domain::market::{
    Direction, GrowthTrend, InsiderActivity, MarginTrend, Valuation, VixLevel, YieldTrend,
};
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "tradelab", about = "Multi-horizon trade analysis")]
pub struct Cli {
    /// Log engine internals (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a ticker assessment file
    Analyze {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a ticker assessment file without analyzing it
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);
    match cli.command {
        Command::Analyze {
            input,
            format,
            output,
        } => run_analyze(&input, format, output.as_deref()),
        Command::Validate { input } => run_validate(&input),
    }
}

/// Logs go to stderr so reports written to stdout stay clean.
fn init_logging(verbose: bool) {
    let default = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(cfg!(debug_assertions))
        .try_init();
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TradelabError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Build a validated [`AnalysisInput`] from an assessment file. Optional
/// qualitative fields default to their neutral member; a numeric `vix` or
/// `spy_change_pct` stands in for a missing `vix_level` or `market_trend`.
pub fn build_analysis_input(config: &dyn ConfigPort) -> Result<AnalysisInput, TradelabError> {
    validate_analysis_config(config)?;

    let ticker = config
        .get_string("analysis", "ticker")
        .map(|t| t.trim().to_uppercase())
        .unwrap_or_default();
    let current_price = read_number(config, "analysis", "current_price")?.ok_or_else(|| {
        TradelabError::ConfigMissing {
            section: "analysis".into(),
            key: "current_price".into(),
        }
    })?;

    let vix_level = match read_enum::<VixLevel>(config, "macro", "vix_level")? {
        Some(level) => level,
        None => read_number(config, "macro", "vix")?
            .map(VixLevel::from_index)
            .unwrap_or(VixLevel::Elevated),
    };
    let market_trend = match read_enum::<Direction>(config, "macro", "market_trend")? {
        Some(trend) => trend,
        None => read_number(config, "macro", "spy_change_pct")?
            .map(Direction::from_change_pct)
            .unwrap_or(Direction::Neutral),
    };

    Ok(AnalysisInput {
        ticker,
        strategy: require_enum(config, "analysis", "strategy")?,
        technical_signal: require_enum(config, "analysis", "technical_signal")?,
        current_price,
        sector_rotation: read_enum(config, "macro", "sector_rotation")?
            .unwrap_or(Direction::Neutral),
        bond_yields: read_enum(config, "macro", "bond_yields")?.unwrap_or(YieldTrend::Stable),
        vix_level,
        market_trend,
        earnings_growth: read_enum(config, "fundamentals", "earnings_growth")?
            .unwrap_or(GrowthTrend::Stable),
        revenue_growth: read_enum(config, "fundamentals", "revenue_growth")?
            .unwrap_or(GrowthTrend::Stable),
        margin_trend: read_enum(config, "fundamentals", "margin_trend")?
            .unwrap_or(MarginTrend::Stable),
        insider_activity: read_enum(config, "fundamentals", "insider_activity")?
            .unwrap_or(InsiderActivity::Neutral),
        pe_vs_historical: read_enum(config, "valuation", "pe_vs_historical")?
            .unwrap_or(Valuation::At),
        ps_vs_historical: read_enum(config, "valuation", "ps_vs_historical")?
            .unwrap_or(Valuation::At),
        days_to_earnings: read_days(config, "events", "days_to_earnings")?,
        days_to_fomc: read_days(config, "events", "days_to_fomc")?,
        other_catalysts: config
            .get_string("events", "other_catalysts")
            .unwrap_or_default(),
    })
}

/// The command-line format wins over `[report] format`; text is the default.
pub fn resolve_format(cli_format: Option<ReportFormat>, config: &dyn ConfigPort) -> ReportFormat {
    if let Some(f) = cli_format {
        return f;
    }
    match config.get_string("report", "format") {
        Some(f) if f.trim().eq_ignore_ascii_case("json") => ReportFormat::Json,
        _ => ReportFormat::Text,
    }
}

pub fn report_adapter(format: ReportFormat, config: &dyn ConfigPort) -> Box<dyn ReportPort> {
    match format {
        ReportFormat::Text => Box::new(TextReportAdapter::new()),
        ReportFormat::Json => {
            let pretty = config.get_bool("report", "pretty", true);
            Box::new(JsonReportAdapter::new(pretty))
        }
    }
}

fn run_analyze(
    input_path: &Path,
    format: Option<ReportFormat>,
    output_path: Option<&Path>,
) -> ExitCode {
    eprintln!("Loading assessment from {}", input_path.display());
    let config = match load_config(input_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let input = match build_analysis_input(&config) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    info!(ticker = %input.ticker, strategy = %input.strategy, "running analysis");
    debug!(?input, "analysis input");

    let analysis = analyze(&input);

    let configured_output = config.get_string("report", "output").map(PathBuf::from);
    let output = output_path.or(configured_output.as_deref());
    let adapter = report_adapter(resolve_format(format, &config), &config);

    match adapter.write(&analysis, output) {
        Ok(()) => {
            if let Some(path) = output {
                eprintln!("Report written to: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write report: {e}");
            (&e).into()
        }
    }
}

fn run_validate(input_path: &Path) -> ExitCode {
    eprintln!("Validating assessment: {}", input_path.display());
    let config = match load_config(input_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match build_analysis_input(&config) {
        Ok(input) => {
            eprintln!("\nTicker:           {}", input.ticker);
            eprintln!("Strategy:         {}", input.strategy.display_name());
            eprintln!("Technical signal: {}", input.technical_signal);
            eprintln!("Current price:    {:.2}", input.current_price);
            eprintln!("VIX regime:       {}", input.vix_level);
            eprintln!("Market trend:     {}", input.market_trend);
            eprintln!("\nAssessment is valid.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
