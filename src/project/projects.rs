//! Project operations

use super::client::{ProjectClient, JSON, JSON_PATCH};
use super::models::{
    GetProjectResponse, ProjectConfigInput, ProjectListResponseSchema, ProjectUpdate,
};
use super::options::{
    CreateProjectOptions, DeleteProjectOptions, GetProjectOptions, ListProjectsOptions,
    UpdateProjectOptions,
};
use crate::error::Result;
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct CreateProjectBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configs: Option<&'a [ProjectConfigInput]>,
}

impl ProjectClient {
    /// Create a project, optionally with initial configurations
    pub async fn create_project(
        &self,
        options: &CreateProjectOptions,
    ) -> Result<GetProjectResponse> {
        let url = self.url("/v1/projects", &[])?;
        let body = CreateProjectBody {
            name: &options.name,
            description: options.description.as_deref(),
            configs: options.configs.as_deref(),
        };
        let request = self
            .request("CreateProject", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .query_opt("resource_group", options.resource_group.as_ref())
            .query_opt("location", options.location.as_ref())
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Fetch one page of projects
    pub async fn list_projects(
        &self,
        options: &ListProjectsOptions,
    ) -> Result<ProjectListResponseSchema> {
        let url = self.url("/v1/projects", &[])?;
        let request = self
            .request("ListProjects", &options.headers)
            .header("Accept", JSON)
            .query_opt("start", options.start.as_ref())
            .query_opt("limit", options.limit)
            .query_opt("complete", options.complete);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Get a project by ID
    pub async fn get_project(&self, options: &GetProjectOptions) -> Result<GetProjectResponse> {
        let url = self.url("/v1/projects/{id}", &[("id", options.id.as_str())])?;
        let request = self
            .request("GetProject", &options.headers)
            .header("Accept", JSON)
            .query_opt("exclude_configs", options.exclude_configs)
            .query_opt("complete", options.complete);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Apply a JSON Patch to a project's name or description
    pub async fn update_project(&self, options: &UpdateProjectOptions) -> Result<ProjectUpdate> {
        let url = self.url("/v1/projects/{id}", &[("id", options.id.as_str())])?;
        let request = self
            .request("UpdateProject", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON_PATCH)
            .json_from(&options.json_patch)?;

        self.http_client()
            .request_json(Method::PATCH, &url, request)
            .await
    }

    /// Delete a project; `destroy` also removes its deployed resources
    pub async fn delete_project(&self, options: &DeleteProjectOptions) -> Result<()> {
        let url = self.url("/v1/projects/{id}", &[("id", options.id.as_str())])?;
        let request = self
            .request("DeleteProject", &options.headers)
            .query_opt("destroy", options.destroy);

        self.http_client()
            .request_empty(Method::DELETE, &url, request)
            .await
    }
}
