mod cli;
mod config;
mod error;
mod metrics;
mod report;
mod rubric;
mod source;
mod suggest;
mod telemetry;
mod types;
mod validate;

use crate::error::RankerError;
use crate::rubric::Rubric;
use crate::types::config::{OutputFormat, RankerConfig};
use clap::Parser;
use std::path::Path;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, RankerError> {
    dotenvy::dotenv().ok();
    let cli = cli::Cli::parse();
    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;
    let verbose = cli.verbose.max(u8::from(loaded.output.verbose));
    telemetry::init(verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Analyze(cmd) => analyze(cmd, &loaded),
        cli::Commands::Validate(cmd) => {
            let readme = source::load(&cmd.target)?;
            let issues = validate::validate_structure(&readme.content, cmd.strict);
            if issues.is_empty() {
                println!("README structure looks good");
                return Ok(exit_code::SUCCESS);
            }
            println!("README validation found {} issue(s):", issues.len());
            for issue in &issues {
                println!("  - {issue}");
            }
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Config(cli::ConfigCommand::Init) => {
            let path = config::init_config(Path::new("."))?;
            println!("wrote {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Config(cli::ConfigCommand::Show) => {
            print!("{}", config::render_config(&loaded)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn analyze(cmd: cli::AnalyzeCommand, loaded: &RankerConfig) -> Result<i32, RankerError> {
    let rubric = Rubric::standard()?.with_weight_overrides(&loaded.scoring.weights);
    let readme = source::load(&cmd.target)?;
    let mut analysis = rubric.analyze(&readme.content);

    if cmd.ai || loaded.ai.enabled {
        let enhancer = suggest::select_enhancer(&loaded.ai);
        info!(enhancer = enhancer.name(), "enhancing suggestions");
        let suggestions =
            suggest::enhance_suggestions(enhancer.as_ref(), &analysis, &readme.content);
        analysis = analysis.with_suggestions(suggestions);
    }

    let format = if cmd.json {
        OutputFormat::Json
    } else {
        match cmd.format {
            Some(cli::ReportFormat::Json) => OutputFormat::Json,
            Some(cli::ReportFormat::Text) => OutputFormat::Text,
            None => loaded.output.format,
        }
    };
    println!("{}", report::render(&analysis, &readme.source, format)?);

    match cmd.fail_under {
        Some(threshold) if analysis.percentage < threshold => {
            eprintln!(
                "score {:.1}% is below the required {:.1}%",
                analysis.percentage, threshold
            );
            Ok(exit_code::BELOW_THRESHOLD)
        }
        _ => Ok(exit_code::SUCCESS),
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
