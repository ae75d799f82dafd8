//! Per-operation options
//!
//! Every operation takes one options value. Required parameters go through
//! `new`, optional ones through chainable setters. Each options type also
//! carries extra request headers, sent before the SDK headers.

use super::models::{
    ConfigSettingItems, InputVariableInput, JsonPatchOperation, NotificationEvent,
    ProjectConfigInput, PulsarEventItems,
};
use crate::types::{JsonObject, StringMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Adds the `header`/`headers` setters shared by every options type
macro_rules! impl_headers {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $options {
                /// Add a request header
                #[must_use]
                pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                    self.headers.insert(key.into(), value.into());
                    self
                }

                /// Replace the request headers
                #[must_use]
                pub fn headers(mut self, headers: StringMap) -> Self {
                    self.headers = headers;
                    self
                }
            }
        )+
    };
}

// ============================================================================
// Path and query enums
// ============================================================================

/// Action applied to a configuration draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftAction {
    Merge,
    Discard,
}

impl DraftAction {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Discard => "discard",
        }
    }
}

impl fmt::Display for DraftAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schematics job kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Plan,
    Install,
    Uninstall,
}

impl JobAction {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which configuration versions a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigVersion {
    Active,
    Draft,
    Mixed,
}

impl ConfigVersion {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Projects
// ============================================================================

/// Options for `create_project`
#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    pub name: String,
    pub description: Option<String>,
    pub configs: Option<Vec<ProjectConfigInput>>,
    /// Resource group the project is created in
    pub resource_group: Option<String>,
    /// Region the project is created in
    pub location: Option<String>,
    pub headers: StringMap,
}

impl CreateProjectOptions {
    /// Create options for a project named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the configurations created with the project
    #[must_use]
    pub fn configs(mut self, configs: Vec<ProjectConfigInput>) -> Self {
        self.configs = Some(configs);
        self
    }

    /// Set the resource group
    #[must_use]
    pub fn resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
        self
    }

    /// Set the region
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Options for `list_projects`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProjectsOptions {
    /// Continuation token of the page to fetch
    pub start: Option<String>,
    /// Page size
    pub limit: Option<i64>,
    /// Return the full project instead of a summary
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl ListProjectsOptions {
    /// Create options that list from the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a continuation token
    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Return full project records
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `get_project`
#[derive(Debug, Clone, Default)]
pub struct GetProjectOptions {
    pub id: String,
    pub exclude_configs: Option<bool>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl GetProjectOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Leave configurations out of the response
    #[must_use]
    pub fn exclude_configs(mut self, exclude: bool) -> Self {
        self.exclude_configs = Some(exclude);
        self
    }

    /// Return the full project record
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `update_project`
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectOptions {
    pub id: String,
    pub json_patch: Vec<JsonPatchOperation>,
    pub headers: StringMap,
}

impl UpdateProjectOptions {
    /// Create options applying `json_patch` to project `id`
    pub fn new(id: impl Into<String>, json_patch: Vec<JsonPatchOperation>) -> Self {
        Self {
            id: id.into(),
            json_patch,
            headers: StringMap::new(),
        }
    }
}

/// Options for `delete_project`
#[derive(Debug, Clone, Default)]
pub struct DeleteProjectOptions {
    pub id: String,
    /// Also destroy the resources deployed by the project
    pub destroy: Option<bool>,
    pub headers: StringMap,
}

impl DeleteProjectOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Also destroy the deployed resources
    #[must_use]
    pub fn destroy(mut self, destroy: bool) -> Self {
        self.destroy = Some(destroy);
        self
    }
}

// ============================================================================
// Configurations
// ============================================================================

/// Options for `create_config`
#[derive(Debug, Clone, Default)]
pub struct CreateConfigOptions {
    /// Project id
    pub id: String,
    pub name: String,
    pub locator_id: String,
    /// Id for the new configuration
    pub config_id: Option<String>,
    pub labels: Option<Vec<String>>,
    pub description: Option<String>,
    pub input: Option<Vec<InputVariableInput>>,
    pub setting: Option<Vec<ConfigSettingItems>>,
    pub headers: StringMap,
}

impl CreateConfigOptions {
    /// Create options adding a configuration to project `id`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        locator_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            locator_id: locator_id.into(),
            ..Default::default()
        }
    }

    /// Set the ID of the new configuration
    #[must_use]
    pub fn config_id(mut self, config_id: impl Into<String>) -> Self {
        self.config_id = Some(config_id.into());
        self
    }

    /// Set the labels
    #[must_use]
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the input variables
    #[must_use]
    pub fn input(mut self, input: Vec<InputVariableInput>) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the configuration setting
    #[must_use]
    pub fn setting(mut self, setting: Vec<ConfigSettingItems>) -> Self {
        self.setting = Some(setting);
        self
    }
}

/// Options for `list_configs`
#[derive(Debug, Clone, Default)]
pub struct ListConfigsOptions {
    pub id: String,
    pub version: Option<ConfigVersion>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl ListConfigsOptions {
    /// Create options for the configurations of project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Choose which configuration versions to list
    #[must_use]
    pub fn version(mut self, version: ConfigVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `get_config`
#[derive(Debug, Clone, Default)]
pub struct GetConfigOptions {
    pub id: String,
    pub config_id: String,
    /// `active`, `draft` or a version number
    pub version: Option<String>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl GetConfigOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            ..Default::default()
        }
    }

    /// Pick a configuration version
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `update_config`
#[derive(Debug, Clone, Default)]
pub struct UpdateConfigOptions {
    pub id: String,
    pub config_id: String,
    pub json_patch: Vec<JsonPatchOperation>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl UpdateConfigOptions {
    /// Create options applying a patch to a configuration
    pub fn new(
        id: impl Into<String>,
        config_id: impl Into<String>,
        json_patch: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            json_patch,
            ..Default::default()
        }
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `delete_config`
#[derive(Debug, Clone, Default)]
pub struct DeleteConfigOptions {
    pub id: String,
    pub config_id: String,
    /// Only delete the draft version
    pub draft_only: Option<bool>,
    pub destroy: Option<bool>,
    pub headers: StringMap,
}

impl DeleteConfigOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            ..Default::default()
        }
    }

    /// Only return the draft version
    #[must_use]
    pub fn draft_only(mut self, draft_only: bool) -> Self {
        self.draft_only = Some(draft_only);
        self
    }

    /// Also destroy the deployed resources
    #[must_use]
    pub fn destroy(mut self, destroy: bool) -> Self {
        self.destroy = Some(destroy);
        self
    }
}

/// Options for `get_config_diff`
#[derive(Debug, Clone, Default)]
pub struct GetConfigDiffOptions {
    pub id: String,
    pub config_id: String,
    pub headers: StringMap,
}

impl GetConfigDiffOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            headers: StringMap::new(),
        }
    }
}

/// Options for `force_merge`
#[derive(Debug, Clone, Default)]
pub struct ForceMergeOptions {
    pub id: String,
    pub config_id: String,
    pub comment: Option<String>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl ForceMergeOptions {
    /// Create options merging the draft of `config_id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            ..Default::default()
        }
    }

    /// Set a comment recorded with the merge
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `create_draft_action`
#[derive(Debug, Clone)]
pub struct CreateDraftActionOptions {
    pub id: String,
    pub config_id: String,
    pub action: DraftAction,
    pub comment: Option<String>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl CreateDraftActionOptions {
    /// Create options applying `action` to the draft of `config_id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>, action: DraftAction) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            action,
            comment: None,
            complete: None,
            headers: StringMap::new(),
        }
    }

    /// Set a comment recorded with the action
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `check_config`
#[derive(Debug, Clone, Default)]
pub struct CheckConfigOptions {
    pub id: String,
    pub config_id: String,
    /// IAM refresh token, sent as `X-Auth-Refresh-Token`
    pub auth_refresh_token: Option<String>,
    pub version: Option<String>,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl CheckConfigOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            ..Default::default()
        }
    }

    /// Set the refresh token used for authorization
    #[must_use]
    pub fn auth_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.auth_refresh_token = Some(token.into());
        self
    }

    /// Pick a configuration version
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `install_config`
#[derive(Debug, Clone, Default)]
pub struct InstallConfigOptions {
    pub id: String,
    pub config_id: String,
    pub complete: Option<bool>,
    pub headers: StringMap,
}

impl InstallConfigOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            ..Default::default()
        }
    }

    /// Return the complete configuration
    #[must_use]
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// Options for `uninstall_config`
#[derive(Debug, Clone, Default)]
pub struct UninstallConfigOptions {
    pub id: String,
    pub config_id: String,
    pub headers: StringMap,
}

impl UninstallConfigOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            headers: StringMap::new(),
        }
    }
}

/// Options for `get_schematics_job`
#[derive(Debug, Clone)]
pub struct GetSchematicsJobOptions {
    pub id: String,
    pub config_id: String,
    pub action: JobAction,
    /// Only return jobs started after this Unix timestamp
    pub since: Option<i64>,
    pub headers: StringMap,
}

impl GetSchematicsJobOptions {
    /// Create options for the latest `action` job of a configuration
    pub fn new(id: impl Into<String>, config_id: impl Into<String>, action: JobAction) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            action,
            since: None,
            headers: StringMap::new(),
        }
    }

    /// Pick the job triggered at this timestamp
    #[must_use]
    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
}

/// Options for `get_cost_estimate`
#[derive(Debug, Clone, Default)]
pub struct GetCostEstimateOptions {
    pub id: String,
    pub config_id: String,
    pub version: Option<String>,
    pub headers: StringMap,
}

impl GetCostEstimateOptions {
    /// Create options for configuration `config_id` of project `id`
    pub fn new(id: impl Into<String>, config_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config_id: config_id.into(),
            ..Default::default()
        }
    }

    /// Pick a configuration version
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

// ============================================================================
// Notifications and health
// ============================================================================

/// Options for `post_notification`
#[derive(Debug, Clone, Default)]
pub struct PostNotificationOptions {
    pub id: String,
    pub notifications: Option<Vec<NotificationEvent>>,
    pub headers: StringMap,
}

impl PostNotificationOptions {
    /// Create options for the notifications of project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the notifications to post
    #[must_use]
    pub fn notifications(mut self, notifications: Vec<NotificationEvent>) -> Self {
        self.notifications = Some(notifications);
        self
    }
}

/// Options for `get_notifications`
#[derive(Debug, Clone, Default)]
pub struct GetNotificationsOptions {
    pub id: String,
    pub headers: StringMap,
}

impl GetNotificationsOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: StringMap::new(),
        }
    }
}

/// Options for `delete_notification`
#[derive(Debug, Clone, Default)]
pub struct DeleteNotificationOptions {
    pub id: String,
    pub headers: StringMap,
}

impl DeleteNotificationOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: StringMap::new(),
        }
    }
}

/// Options for `receive_pulsar_catalog_events`
#[derive(Debug, Clone, Default)]
pub struct ReceivePulsarCatalogEventsOptions {
    pub events: Vec<PulsarEventItems>,
    pub headers: StringMap,
}

impl ReceivePulsarCatalogEventsOptions {
    /// Create options carrying a batch of catalog events
    pub fn new(events: Vec<PulsarEventItems>) -> Self {
        Self {
            events,
            headers: StringMap::new(),
        }
    }
}

/// Options for `get_health`
#[derive(Debug, Clone, Default)]
pub struct GetHealthOptions {
    /// Include dependency health
    pub info: Option<bool>,
    pub headers: StringMap,
}

impl GetHealthOptions {
    /// Create options without the dependency report
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the dependency report
    #[must_use]
    pub fn info(mut self, info: bool) -> Self {
        self.info = Some(info);
        self
    }
}

// ============================================================================
// Service broker
// ============================================================================

/// Options for `replace_service_instance`
#[derive(Debug, Clone, Default)]
pub struct ReplaceServiceInstanceOptions {
    pub instance_id: String,
    pub service_id: String,
    pub plan_id: String,
    pub context: Option<Vec<String>>,
    pub parameters: Option<JsonObject>,
    pub previous_values: Option<Vec<String>>,
    pub broker_api_version: Option<String>,
    pub broker_api_originating_identity: Option<String>,
    pub accepts_incomplete: Option<bool>,
    pub headers: StringMap,
}

impl ReplaceServiceInstanceOptions {
    /// Create options provisioning `instance_id` from a service and plan
    pub fn new(
        instance_id: impl Into<String>,
        service_id: impl Into<String>,
        plan_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            service_id: service_id.into(),
            plan_id: plan_id.into(),
            ..Default::default()
        }
    }

    /// Set the platform context
    #[must_use]
    pub fn context(mut self, context: Vec<String>) -> Self {
        self.context = Some(context);
        self
    }

    /// Set provisioning parameters
    #[must_use]
    pub fn parameters(mut self, parameters: JsonObject) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Set the values the instance had before this call
    #[must_use]
    pub fn previous_values(mut self, values: Vec<String>) -> Self {
        self.previous_values = Some(values);
        self
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }

    /// Set the `X-Broker-Api-Originating-Identity` header
    #[must_use]
    pub fn broker_api_originating_identity(mut self, identity: impl Into<String>) -> Self {
        self.broker_api_originating_identity = Some(identity.into());
        self
    }

    /// Allow the broker to finish asynchronously
    #[must_use]
    pub fn accepts_incomplete(mut self, accepts: bool) -> Self {
        self.accepts_incomplete = Some(accepts);
        self
    }
}

/// Options for `delete_service_instance`
#[derive(Debug, Clone, Default)]
pub struct DeleteServiceInstanceOptions {
    pub instance_id: String,
    pub plan_id: String,
    pub service_id: String,
    pub broker_api_version: Option<String>,
    pub broker_api_originating_identity: Option<String>,
    pub accepts_incomplete: Option<bool>,
    pub headers: StringMap,
}

impl DeleteServiceInstanceOptions {
    /// Create options deprovisioning `instance_id`
    pub fn new(
        instance_id: impl Into<String>,
        plan_id: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            plan_id: plan_id.into(),
            service_id: service_id.into(),
            ..Default::default()
        }
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }

    /// Set the `X-Broker-Api-Originating-Identity` header
    #[must_use]
    pub fn broker_api_originating_identity(mut self, identity: impl Into<String>) -> Self {
        self.broker_api_originating_identity = Some(identity.into());
        self
    }

    /// Allow the broker to finish asynchronously
    #[must_use]
    pub fn accepts_incomplete(mut self, accepts: bool) -> Self {
        self.accepts_incomplete = Some(accepts);
        self
    }
}

/// Options for `update_service_instance`
#[derive(Debug, Clone, Default)]
pub struct UpdateServiceInstanceOptions {
    pub instance_id: String,
    pub json_patch: Vec<JsonPatchOperation>,
    pub broker_api_version: Option<String>,
    pub broker_api_originating_identity: Option<String>,
    pub accepts_incomplete: Option<bool>,
    pub headers: StringMap,
}

impl UpdateServiceInstanceOptions {
    /// Create options applying `json_patch` to broker instance `instance_id`
    pub fn new(instance_id: impl Into<String>, json_patch: Vec<JsonPatchOperation>) -> Self {
        Self {
            instance_id: instance_id.into(),
            json_patch,
            ..Default::default()
        }
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }

    /// Set the `X-Broker-Api-Originating-Identity` header
    #[must_use]
    pub fn broker_api_originating_identity(mut self, identity: impl Into<String>) -> Self {
        self.broker_api_originating_identity = Some(identity.into());
        self
    }

    /// Allow the broker to finish asynchronously
    #[must_use]
    pub fn accepts_incomplete(mut self, accepts: bool) -> Self {
        self.accepts_incomplete = Some(accepts);
        self
    }
}

/// Options for `get_last_operation`
#[derive(Debug, Clone, Default)]
pub struct GetLastOperationOptions {
    pub instance_id: String,
    pub broker_api_version: Option<String>,
    /// Operation id returned when the instance was provisioned
    pub operation: Option<String>,
    pub plan_id: Option<String>,
    pub service_id: Option<String>,
    pub headers: StringMap,
}

impl GetLastOperationOptions {
    /// Create options polling broker instance `instance_id`
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            ..Default::default()
        }
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }

    /// Poll a specific operation
    #[must_use]
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Set the plan ID
    #[must_use]
    pub fn plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    /// Set the service ID
    #[must_use]
    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }
}

/// Options for `replace_service_instance_state`
#[derive(Debug, Clone, Default)]
pub struct ReplaceServiceInstanceStateOptions {
    pub instance_id: String,
    pub enabled: bool,
    pub initiator_id: Option<String>,
    pub reason_code: Option<JsonObject>,
    pub plan_id: Option<String>,
    pub previous_values: Option<Vec<String>>,
    pub broker_api_version: Option<String>,
    pub headers: StringMap,
}

impl ReplaceServiceInstanceStateOptions {
    /// Create options enabling or disabling `instance_id`
    pub fn new(instance_id: impl Into<String>, enabled: bool) -> Self {
        Self {
            instance_id: instance_id.into(),
            enabled,
            ..Default::default()
        }
    }

    /// Set the ID of whoever triggered the event
    #[must_use]
    pub fn initiator_id(mut self, initiator_id: impl Into<String>) -> Self {
        self.initiator_id = Some(initiator_id.into());
        self
    }

    /// Set the reason code for the state change
    #[must_use]
    pub fn reason_code(mut self, reason_code: JsonObject) -> Self {
        self.reason_code = Some(reason_code);
        self
    }

    /// Set the plan ID
    #[must_use]
    pub fn plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    /// Set the values the instance had before this call
    #[must_use]
    pub fn previous_values(mut self, values: Vec<String>) -> Self {
        self.previous_values = Some(values);
        self
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }
}

/// Options for `get_service_instance`
#[derive(Debug, Clone, Default)]
pub struct GetServiceInstanceOptions {
    pub instance_id: String,
    pub broker_api_version: Option<String>,
    pub headers: StringMap,
}

impl GetServiceInstanceOptions {
    /// Create options for broker instance `instance_id`
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            ..Default::default()
        }
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }
}

/// Options for `get_catalog`
#[derive(Debug, Clone, Default)]
pub struct GetCatalogOptions {
    pub broker_api_version: Option<String>,
    pub headers: StringMap,
}

impl GetCatalogOptions {
    /// Create options with no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `X-Broker-Api-Version` header
    #[must_use]
    pub fn broker_api_version(mut self, version: impl Into<String>) -> Self {
        self.broker_api_version = Some(version.into());
        self
    }
}

// ============================================================================
// Event Notifications integration
// ============================================================================

/// Options for `post_event_notifications_integration`
#[derive(Debug, Clone, Default)]
pub struct PostEventNotificationsIntegrationOptions {
    pub id: String,
    /// CRN of the Event Notifications instance
    pub instance_crn: String,
    pub description: Option<String>,
    pub event_notifications_source_name: Option<String>,
    pub enabled: Option<bool>,
    pub headers: StringMap,
}

impl PostEventNotificationsIntegrationOptions {
    /// Create options connecting project `id` to an Event Notifications instance
    pub fn new(id: impl Into<String>, instance_crn: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instance_crn: instance_crn.into(),
            ..Default::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the source name registered with Event Notifications
    #[must_use]
    pub fn event_notifications_source_name(mut self, name: impl Into<String>) -> Self {
        self.event_notifications_source_name = Some(name.into());
        self
    }

    /// Enable or disable the integration
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

/// Options for `get_event_notifications_integration`
#[derive(Debug, Clone, Default)]
pub struct GetEventNotificationsIntegrationOptions {
    pub id: String,
    pub headers: StringMap,
}

impl GetEventNotificationsIntegrationOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: StringMap::new(),
        }
    }
}

/// Options for `delete_event_notifications_integration`
#[derive(Debug, Clone, Default)]
pub struct DeleteEventNotificationsIntegrationOptions {
    pub id: String,
    pub headers: StringMap,
}

impl DeleteEventNotificationsIntegrationOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: StringMap::new(),
        }
    }
}

/// Options for `post_test_event_notification`
#[derive(Debug, Clone, Default)]
pub struct PostTestEventNotificationOptions {
    pub id: String,
    /// Long description of the test notification
    pub ibmendefaultlong: Option<String>,
    /// Short description of the test notification
    pub ibmendefaultshort: Option<String>,
    pub headers: StringMap,
}

impl PostTestEventNotificationOptions {
    /// Create options for project `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the default long description for notifications
    #[must_use]
    pub fn ibmendefaultlong(mut self, text: impl Into<String>) -> Self {
        self.ibmendefaultlong = Some(text.into());
        self
    }

    /// Set the default short description for notifications
    #[must_use]
    pub fn ibmendefaultshort(mut self, text: impl Into<String>) -> Self {
        self.ibmendefaultshort = Some(text.into());
        self
    }
}

impl_headers!(
    CreateProjectOptions,
    ListProjectsOptions,
    GetProjectOptions,
    UpdateProjectOptions,
    DeleteProjectOptions,
    CreateConfigOptions,
    ListConfigsOptions,
    GetConfigOptions,
    UpdateConfigOptions,
    DeleteConfigOptions,
    GetConfigDiffOptions,
    ForceMergeOptions,
    CreateDraftActionOptions,
    CheckConfigOptions,
    InstallConfigOptions,
    UninstallConfigOptions,
    GetSchematicsJobOptions,
    GetCostEstimateOptions,
    PostNotificationOptions,
    GetNotificationsOptions,
    DeleteNotificationOptions,
    ReceivePulsarCatalogEventsOptions,
    GetHealthOptions,
    ReplaceServiceInstanceOptions,
    DeleteServiceInstanceOptions,
    UpdateServiceInstanceOptions,
    GetLastOperationOptions,
    ReplaceServiceInstanceStateOptions,
    GetServiceInstanceOptions,
    GetCatalogOptions,
    PostEventNotificationsIntegrationOptions,
    GetEventNotificationsIntegrationOptions,
    DeleteEventNotificationsIntegrationOptions,
    PostTestEventNotificationOptions,
);
