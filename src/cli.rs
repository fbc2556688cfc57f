// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealArg {
    /// Prop pops in at full size
    Instant,
    /// Prop grows over the reveal phase
    Ramped,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-navigator")]
#[command(about = "Fly-through scene viewer with a scripted presentation", long_about = None)]
pub struct Cli {
    /// JSON viewer configuration (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the prop reveal variant
    #[arg(long, value_enum)]
    pub reveal: Option<RevealArg>,

    /// Replay the presentation without opening a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frame cap for headless replay
    #[arg(long, default_value_t = 100_000)]
    pub max_frames: u64,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["scene-navigator"]);
        assert!(cli.config.is_none());
        assert!(cli.reveal.is_none());
        assert!(!cli.headless);
        assert_eq!(cli.max_frames, 100_000);
    }

    #[test]
    fn parses_reveal_and_headless() {
        let cli = Cli::parse_from(["scene-navigator", "--headless", "--reveal", "instant"]);
        assert!(cli.headless);
        assert_eq!(cli.reveal, Some(RevealArg::Instant));
    }
}
