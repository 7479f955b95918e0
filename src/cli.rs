use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readme-ranker",
    version,
    about = "Score a README against a weighted documentation rubric"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file merged over the global and project files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a README and print the report
    Analyze(AnalyzeCommand),
    /// Check README structure without scoring
    Validate(ValidateCommand),
    /// Manage the project config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Local path, `owner/repo`, or a github.com URL
    #[arg(default_value = ".")]
    pub target: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Shorthand for `--format json`
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
    /// Replace rule-based suggestions with enhanced ones
    #[arg(long)]
    pub ai: bool,
    /// Exit with status 2 when the percentage is below this value
    #[arg(long, value_name = "PERCENT")]
    pub fail_under: Option<f64>,
}

#[derive(Args)]
pub struct ValidateCommand {
    #[arg(default_value = ".")]
    pub target: String,
    /// Also require a main title, section headings and a code block
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write `.readme-ranker.toml` with the built-in defaults
    Init,
    /// Print the merged configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["readme-ranker", "analyze"]).expect("should parse");
        match cli.command {
            Commands::Analyze(cmd) => {
                assert_eq!(cmd.target, ".");
                assert!(cmd.format.is_none());
                assert!(!cmd.json);
                assert!(cmd.fail_under.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn json_conflicts_with_format() {
        let result =
            Cli::try_parse_from(["readme-ranker", "analyze", "--json", "--format", "text"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["readme-ranker", "-v", "-q", "validate"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_subcommands_parse() {
        let cli = Cli::try_parse_from(["readme-ranker", "config", "show"]).expect("should parse");
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
    }
}
