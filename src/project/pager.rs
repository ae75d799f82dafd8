//! Project listing pager

use super::client::ProjectClient;
use super::models::ProjectListItem;
use super::options::ListProjectsOptions;
use crate::error::Result;
use crate::pagination::{ListOperation, Page, PageCursor, PageOptions};
use async_trait::async_trait;

/// Walks `list_projects` page by page
pub type ProjectsPager = PageCursor<ProjectsListing>;

impl PageOptions for ListProjectsOptions {
    fn start_token(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_start_token(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// `list_projects` bound to a client
#[derive(Debug, Clone)]
pub struct ProjectsListing {
    client: ProjectClient,
}

impl ProjectsListing {
    /// Bind the listing to a client
    pub fn new(client: ProjectClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListOperation for ProjectsListing {
    type Options = ListProjectsOptions;
    type Item = ProjectListItem;

    async fn list_page(&self, options: &ListProjectsOptions) -> Result<Page<ProjectListItem>> {
        let response = self.client.list_projects(options).await?;
        let next_start = response.next_start().map(str::to_string);
        Ok(Page::new(response.projects.unwrap_or_default(), next_start))
    }
}

impl ProjectClient {
    /// Pager over every project matching `options`.
    ///
    /// `options.start` must be unset; the pager manages it.
    pub fn projects_pager(&self, options: ListProjectsOptions) -> Result<ProjectsPager> {
        PageCursor::new(ProjectsListing::new(self.clone()), options)
    }
}
