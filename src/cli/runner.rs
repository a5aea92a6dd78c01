//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::SyllabusConfig;
use crate::error::Result;
use crate::format;
use crate::search::SyllabusClient;
use crate::server;
use crate::types::SearchOptions;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.config();
        match &self.cli.command {
            Commands::Serve => server::serve_stdio(&config).await,
            Commands::List => self.list(&config).await,
            Commands::Search {
                freeword,
                enrollment_grade,
                first,
            } => {
                self.search(&config, freeword.as_deref(), *enrollment_grade, *first)
                    .await
            }
        }
    }

    /// Build the client configuration from env and flags
    fn config(&self) -> SyllabusConfig {
        let mut config = SyllabusConfig::from_env();
        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(secs) = self.cli.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    /// Print the simplified list of every subject
    async fn list(&self, config: &SyllabusConfig) -> Result<()> {
        let client = SyllabusClient::new(config)?;
        let results = client.fetch_all_pages(&SearchOptions::new()).await?;
        println!("{}", format::simplified_list(&results.subjects));
        Ok(())
    }

    /// Run one detailed search and print it
    async fn search(
        &self,
        config: &SyllabusConfig,
        freeword: Option<&str>,
        enrollment_grade: Option<u8>,
        first: bool,
    ) -> Result<()> {
        let mut options = SearchOptions::new();
        if let Some(freeword) = freeword {
            options = options.with_freeword(freeword);
        }
        if let Some(grade) = enrollment_grade {
            options = options.with_enrollment_grade(grade);
        }

        let client = SyllabusClient::new(config)?;
        let results = client.fetch_all_pages(&options).await?;
        let text = if first {
            format::single_detail(&results)
        } else {
            format::detailed_list(&results)
        };
        println!("{text}");
        Ok(())
    }
}
