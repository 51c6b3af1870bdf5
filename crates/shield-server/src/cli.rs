//! Command-line interface for the `shield` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shield_core::enums::InputType;

/// Top-level CLI parser for the `shield` binary.
#[derive(Debug, Parser)]
#[command(name = "shield", version, about = "JobShield - job offer fraud analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Analyze a file (or stdin) and print the normalized result as JSON
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overrides `server.bind`
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input category: text, email, chat, job_desc
    #[arg(short = 't', long, default_value = "text", value_parser = parse_input_type)]
    pub input_type: InputType,

    /// File to analyze; reads stdin when omitted
    pub file: Option<PathBuf>,
}

fn parse_input_type(s: &str) -> Result<InputType, String> {
    InputType::parse(s).ok_or_else(|| {
        let allowed = InputType::ALL.map(InputType::as_str).join(", ");
        format!("unknown input type '{s}' (expected one of: {allowed})")
    })
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    use super::{Cli, Commands};
    use shield_core::enums::InputType;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_accepts_bind_override() {
        let cli = Cli::try_parse_from(["shield", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
    }

    #[test]
    fn analyze_defaults_to_text_and_stdin() {
        let cli = Cli::try_parse_from(["shield", "analyze"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input_type, InputType::Text);
        assert!(args.file.is_none());
    }

    #[test]
    fn analyze_parses_input_type_and_file() {
        let cli =
            Cli::try_parse_from(["shield", "-v", "analyze", "-t", "job_desc", "posting.txt"]).unwrap();
        assert!(cli.verbose);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input_type, InputType::JobDesc);
        assert_eq!(args.file, Some(PathBuf::from("posting.txt")));
    }

    #[test]
    fn unknown_input_type_is_rejected() {
        assert!(Cli::try_parse_from(["shield", "analyze", "--input-type", "sms"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["shield", "serve", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }
}
