//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ServiceConfig;
use crate::error::{Result, ResultExt};
use crate::project::{
    GetCatalogOptions, GetConfigOptions, GetHealthOptions, GetProjectOptions, ListConfigsOptions,
    ListProjectsOptions, ProjectClient,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

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
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::ListProjects {
                limit,
                complete,
                all,
            } => self.list_projects(&client, *limit, *complete, *all).await,
            Commands::GetProject { id } => {
                let project = client.get_project(&GetProjectOptions::new(id)).await?;
                self.output(&project)
            }
            Commands::ListConfigs { id } => {
                let configs = client.list_configs(&ListConfigsOptions::new(id)).await?;
                self.output(&configs)
            }
            Commands::GetConfig { id, config_id } => {
                let config = client
                    .get_config(&GetConfigOptions::new(id, config_id))
                    .await?;
                self.output(&config)
            }
            Commands::Health { info } => {
                let health = client
                    .get_health(&GetHealthOptions::new().info(*info))
                    .await?;
                self.output(&health)
            }
            Commands::Catalog => {
                let catalog = client.get_catalog(&GetCatalogOptions::new()).await?;
                self.output(&catalog)
            }
        }
    }

    /// Build the client from the environment, then apply `--url`
    fn build_client(&self) -> Result<ProjectClient> {
        let mut config = ServiceConfig::from_env(Some(&self.cli.service_name))
            .with_context(|| format!("loading '{}' configuration", self.cli.service_name))?;
        if let Some(url) = &self.cli.url {
            config.service_url.clone_from(url);
        }
        ProjectClient::new(config)
    }

    async fn list_projects(
        &self,
        client: &ProjectClient,
        limit: Option<i64>,
        complete: bool,
        all: bool,
    ) -> Result<()> {
        let mut options = ListProjectsOptions::new();
        options.limit = limit;
        if complete {
            options.complete = Some(true);
        }

        if !all {
            let page = client.list_projects(&options).await?;
            return self.output(&page);
        }

        let mut pager = client.projects_pager(options)?;
        let projects = pager.all().await?;
        info!(
            count = projects.len(),
            pages = pager.pages_fetched(),
            "Listed all projects"
        );
        self.output(&json!({ "projects": projects }))
    }

    /// Print a value in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", render(self.cli.format, value)?);
        Ok(())
    }
}

/// Render a value in an output format
pub fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text.trim_end().to_string())
}
