//! Configuration operations

use super::client::{ProjectClient, JSON, JSON_PATCH};
use super::models::{
    ConfigSettingItems, DeleteProjectConfigResponse, GetActionJobResponse,
    GetCostEstimateResponse, InputVariableInput, ProjectConfig, ProjectConfigDiff,
    ProjectConfigList,
};
use super::options::{
    CheckConfigOptions, CreateConfigOptions, CreateDraftActionOptions, DeleteConfigOptions,
    ForceMergeOptions, GetConfigDiffOptions, GetConfigOptions, GetCostEstimateOptions,
    GetSchematicsJobOptions, InstallConfigOptions, ListConfigsOptions, UninstallConfigOptions,
    UpdateConfigOptions,
};
use crate::error::Result;
use reqwest::Method;
use serde::Serialize;

const CONFIGS: &str = "/v1/projects/{id}/configs";
const CONFIG: &str = "/v1/projects/{id}/configs/{config_id}";

#[derive(Serialize)]
struct CreateConfigBody<'a> {
    name: &'a str,
    locator_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a [InputVariableInput]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    setting: Option<&'a [ConfigSettingItems]>,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

impl ProjectClient {
    /// Add a configuration to a project
    pub async fn create_config(&self, options: &CreateConfigOptions) -> Result<ProjectConfig> {
        let url = self.url(CONFIGS, &[("id", options.id.as_str())])?;
        let body = CreateConfigBody {
            name: &options.name,
            locator_id: &options.locator_id,
            id: options.config_id.as_deref(),
            labels: options.labels.as_deref(),
            description: options.description.as_deref(),
            input: options.input.as_deref(),
            setting: options.setting.as_deref(),
        };
        let request = self
            .request("CreateConfig", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// List the configurations of a project
    pub async fn list_configs(&self, options: &ListConfigsOptions) -> Result<ProjectConfigList> {
        let url = self.url(CONFIGS, &[("id", options.id.as_str())])?;
        let request = self
            .request("ListConfigs", &options.headers)
            .header("Accept", JSON)
            .query_opt("version", options.version)
            .query_opt("complete", options.complete);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Get one configuration
    pub async fn get_config(&self, options: &GetConfigOptions) -> Result<ProjectConfig> {
        let url = self.url(
            CONFIG,
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("GetConfig", &options.headers)
            .header("Accept", JSON)
            .query_opt("version", options.version.as_ref())
            .query_opt("complete", options.complete);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Apply a JSON Patch to the draft of a configuration
    pub async fn update_config(&self, options: &UpdateConfigOptions) -> Result<ProjectConfig> {
        let url = self.url(
            CONFIG,
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("UpdateConfig", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON_PATCH)
            .query_opt("complete", options.complete)
            .json_from(&options.json_patch)?;

        self.http_client()
            .request_json(Method::PATCH, &url, request)
            .await
    }

    /// Delete a configuration
    pub async fn delete_config(
        &self,
        options: &DeleteConfigOptions,
    ) -> Result<DeleteProjectConfigResponse> {
        let url = self.url(
            CONFIG,
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("DeleteConfig", &options.headers)
            .header("Accept", JSON)
            .query_opt("draft_only", options.draft_only)
            .query_opt("destroy", options.destroy);

        self.http_client()
            .request_json(Method::DELETE, &url, request)
            .await
    }

    /// Differences between the active and draft versions
    pub async fn get_config_diff(
        &self,
        options: &GetConfigDiffOptions,
    ) -> Result<ProjectConfigDiff> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/diff",
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("GetConfigDiff", &options.headers)
            .header("Accept", JSON);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Merge the draft even if checks have not passed
    pub async fn force_merge(&self, options: &ForceMergeOptions) -> Result<ProjectConfig> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/draft/force_merge",
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let body = CommentBody {
            comment: options.comment.as_deref(),
        };
        let request = self
            .request("ForceMerge", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .query_opt("complete", options.complete)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Merge or discard the draft of a configuration
    pub async fn create_draft_action(
        &self,
        options: &CreateDraftActionOptions,
    ) -> Result<ProjectConfig> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/draft/{action}",
            &[
                ("id", options.id.as_str()),
                ("config_id", options.config_id.as_str()),
                ("action", options.action.as_str()),
            ],
        )?;
        let body = CommentBody {
            comment: options.comment.as_deref(),
        };
        let request = self
            .request("CreateDraftAction", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .query_opt("complete", options.complete)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Run validation checks on a configuration
    pub async fn check_config(&self, options: &CheckConfigOptions) -> Result<ProjectConfig> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/check",
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("CheckConfig", &options.headers)
            .header("Accept", JSON)
            .header_opt("X-Auth-Refresh-Token", options.auth_refresh_token.as_deref())
            .query_opt("version", options.version.as_ref())
            .query_opt("complete", options.complete);

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Deploy the active version of a configuration
    pub async fn install_config(&self, options: &InstallConfigOptions) -> Result<ProjectConfig> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/install",
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("InstallConfig", &options.headers)
            .header("Accept", JSON)
            .query_opt("complete", options.complete);

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Destroy the resources deployed by a configuration
    pub async fn uninstall_config(&self, options: &UninstallConfigOptions) -> Result<()> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/uninstall",
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self.request("UninstallConfig", &options.headers);

        self.http_client()
            .request_empty(Method::POST, &url, request)
            .await
    }

    /// Get the latest Schematics job for a configuration action
    pub async fn get_schematics_job(
        &self,
        options: &GetSchematicsJobOptions,
    ) -> Result<GetActionJobResponse> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/job/{action}",
            &[
                ("id", options.id.as_str()),
                ("config_id", options.config_id.as_str()),
                ("action", options.action.as_str()),
            ],
        )?;
        let request = self
            .request("GetSchematicsJob", &options.headers)
            .header("Accept", JSON)
            .query_opt("since", options.since);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Get the cost estimate of a configuration version
    pub async fn get_cost_estimate(
        &self,
        options: &GetCostEstimateOptions,
    ) -> Result<GetCostEstimateResponse> {
        let url = self.url(
            "/v1/projects/{id}/configs/{config_id}/cost_estimate",
            &[("id", options.id.as_str()), ("config_id", options.config_id.as_str())],
        )?;
        let request = self
            .request("GetCostEstimate", &options.headers)
            .header("Accept", JSON)
            .query_opt("version", options.version.as_ref());

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }
}
