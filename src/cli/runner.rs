//! CLI runner - executes the generation pipeline

use crate::cli::commands::Cli;
use crate::config::{Config, SchemaRoot};
use crate::engine::Generator;
use crate::error::{Error, Result};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the generation and write the schema to the output file
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config();
        let bytes = Generator::new(config).generate().await?;

        tokio::fs::write(&self.cli.output, &bytes)
            .await
            .map_err(|e| Error::output(self.cli.output.display().to_string(), e.to_string()))?;

        println!("JSON schema successfully generated");
        Ok(())
    }

    /// Build the engine configuration from the parsed arguments
    fn build_config(&self) -> Config {
        Config {
            input: self.cli.input.clone(),
            draft: self.cli.draft,
            indent: self.cli.indent,
            schema_root: SchemaRoot {
                title: self.cli.title.clone(),
                description: self.cli.description.clone(),
                id: self.cli.id.clone(),
                additional_properties: self.cli.root_additional_properties,
            },
            additional_properties: self.cli.additional_properties,
        }
    }
}
