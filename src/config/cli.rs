use crate::config::PageConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "warbler-ui")]
#[command(about = "Drive the Warbler page behaviours from a terminal")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML file overriding the page contract")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Server to send like requests to")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send one like request for a message
    Like { message_id: String },
    /// Print the character counter label for some text (stdin when omitted)
    Count { text: Option<String> },
    /// Load and validate the configuration, then print it
    CheckConfig {
        #[arg(long, help = "Print as JSON instead of TOML")]
        json: bool,
    },
}

impl CliConfig {
    /// Loads the page config file (or defaults) and applies command-line overrides.
    pub fn page_config(&self) -> Result<PageConfig> {
        let mut page = match &self.config {
            Some(path) => PageConfig::from_file(path)?,
            None => PageConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            page.base_url = base_url.clone();
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_like_command() {
        let cli = CliConfig::parse_from(["warbler-ui", "like", "42", "--base-url", "http://h:1"]);
        assert!(matches!(cli.command, Command::Like { ref message_id } if message_id == "42"));
        assert_eq!(cli.page_config().unwrap().base_url, "http://h:1");
    }

    #[test]
    fn test_count_text_is_optional() {
        let cli = CliConfig::parse_from(["warbler-ui", "count"]);
        assert!(matches!(cli.command, Command::Count { text: None }));
    }
}
