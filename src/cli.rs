use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "clasy-deck", version, about = "Clasy investor deck in the terminal")]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Override the slide transition delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub transition_ms: Option<u64>,
    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Print the slide titles and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Flags win over the config file. A shorter transition also shortens the
    /// exit animation so it still fits.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ms) = self.transition_ms {
            config.deck.transition_ms = ms;
            config.deck.animation_ms = config.deck.animation_ms.min(ms);
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_override_clamps_animation() {
        let cli = Cli::parse_from(["clasy-deck", "--transition-ms", "120"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.deck.transition_ms, 120);
        assert_eq!(config.deck.animation_ms, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["clasy-deck"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn log_file_override() {
        let cli = Cli::parse_from(["clasy-deck", "--log-file", "/tmp/deck.log"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/deck.log")));
    }
}
