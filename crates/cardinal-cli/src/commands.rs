//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Cardinal: a left-to-right calculator driven by key presses
#[derive(Parser, Debug)]
#[command(name = "cardinal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format
    #[arg(long, default_value = "text", env = "CARDINAL_FORMAT", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the display
    ///
    /// Numbers type digits, `C` clears, anything else is an operation symbol.
    /// Typing continues across tokens until an operation is pressed, so
    /// `2 3 + 1 =` enters 23. ASCII aliases: * / - ^ sqrt cbrt pi neg sq inv.
    /// Without keys, reads one line of keys at a time from stdin.
    Run(RunArgs),

    /// List the available operations
    Ops,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Key tokens, e.g. `5 '*' 4 + 2 =`
    #[arg(allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum FormatArg {
    /// Display and description lines
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use crate::output::OutputFormat;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::parse_from(["cardinal", "run", "5", "+", "3", "="]);
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.keys, vec!["5", "+", "3", "="]);
        } else {
            panic!("expected Run command");
        }
    }

    #[test]
    fn test_parse_run_with_minus_key() {
        let cli = Cli::parse_from(["cardinal", "run", "5", "-", "3", "="]);
        if let Commands::Run(args) = cli.command {
            assert_eq!(args.keys[1], "-");
        } else {
            panic!("expected Run command");
        }
    }

    #[test]
    fn test_parse_run_without_keys() {
        let cli = Cli::parse_from(["cardinal", "run"]);
        assert!(matches!(cli.command, Commands::Run(ref args) if args.keys.is_empty()));
    }

    #[test]
    fn test_parse_ops_command() {
        let cli = Cli::parse_from(["cardinal", "ops"]);
        assert!(matches!(cli.command, Commands::Ops));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["cardinal", "-vv", "--color", "never", "run", "1"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorArg::Never));
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["cardinal", "ops", "--format", "json"]);
        assert!(matches!(cli.format, FormatArg::Json));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["cardinal"]).is_err());
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }
}
