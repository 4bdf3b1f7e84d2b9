use clap::{Parser, ValueEnum};
use roster::config::ColorMode;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Interactive in-memory student roster", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Require ages to be whole numbers (rejects input like "20abc")
    #[arg(long)]
    pub strict_age: bool,

    /// When to use colored output
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.strict_age);
        assert!(cli.color.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "roster",
            "--config",
            "/tmp/roster.json",
            "--strict-age",
            "--color",
            "never",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/roster.json")));
        assert!(cli.strict_age);
        assert_eq!(cli.color, Some(ColorArg::Never));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Cli::try_parse_from(["roster", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
