//! Request and response models for the Projects service
//!
//! Optional fields are `Option<T>` and are skipped when serializing, so an
//! absent field and a present-but-empty one stay distinguishable.

use crate::types::{JsonObject, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Projects
// ============================================================================

/// Link to a page of the project listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// URL of the page
    pub href: String,

    /// Continuation token that selects the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// One page of the project listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponseSchema {
    /// Maximum number of projects per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Number of projects across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PaginationLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<PaginationLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLink>,

    /// Link to the following page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLink>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectListItem>>,
}

impl ProjectListResponseSchema {
    /// Continuation token of the following page
    pub fn next_start(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.start.as_deref())
    }
}

/// Summary of a project as returned by the listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
}

/// Project metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Cloud resource name of the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Events that still need attention, across all configs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_needs_attention_view: Option<Vec<CumulativeNeedsAttention>>,

    /// Set when the needs-attention view could not be computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_needs_attention_view_err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_notifications_crn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeNeedsAttention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_version: Option<i64>,
}

/// Full project, including its configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetProjectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ProjectConfig>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
}

/// Result of a project update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One JSON Patch (RFC 6902) operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: PatchOp,

    /// JSON Pointer to the target field
    pub path: String,

    /// JSON Pointer to the source field for `move` and `copy`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

impl JsonPatchOperation {
    /// Patch operation on `path`
    pub fn new(op: PatchOp, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    /// `add` operation
    pub fn add(path: impl Into<String>, value: JsonValue) -> Self {
        Self::new(PatchOp::Add, path).value(value)
    }

    /// `replace` operation
    pub fn replace(path: impl Into<String>, value: JsonValue) -> Self {
        Self::new(PatchOp::Replace, path).value(value)
    }

    /// `remove` operation
    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(PatchOp::Remove, path)
    }

    #[must_use]
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: JsonValue) -> Self {
        self.value = Some(value);
        self
    }
}

/// JSON Patch operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

// ============================================================================
// Configurations
// ============================================================================

/// Project configuration as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Catalog locator of the deployable architecture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator_id: Option<String>,

    /// Configuration type, e.g. `terraform_template` or `schematics_blueprint`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub config_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<InputVariable>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<OutputValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<Vec<ConfigSettingItems>>,
}

/// Configuration supplied when creating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub locator_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<InputVariableInput>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<Vec<ConfigSettingItems>>,
}

impl ProjectConfigInput {
    /// Configuration with a name and catalog locator
    pub fn new(name: impl Into<String>, locator_id: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            labels: None,
            description: None,
            locator_id: locator_id.into(),
            input: None,
            setting: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn input(mut self, input: Vec<InputVariableInput>) -> Self {
        self.input = Some(input);
        self
    }

    #[must_use]
    pub fn setting(mut self, setting: Vec<ConfigSettingItems>) -> Self {
        self.setting = Some(setting);
        self
    }
}

/// Input variable declared by a configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputVariable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// One of `array`, `boolean`, `float`, `int`, `number`, `object`,
    /// `password`, `string`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputVariableInput {
    pub name: String,
}

impl InputVariableInput {
    /// Input variable with no value
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Output value of an installed configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<String>>,
}

/// Name/value setting of a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSettingItems {
    pub name: String,
    pub value: String,
}

impl ConfigSettingItems {
    /// Setting with a name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ProjectConfig>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteProjectConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Differences between the active and draft versions of a configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDiff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<ProjectConfigDiffInputs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<ProjectConfigDiffInputs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<ProjectConfigDiffInputs>,
}

/// Input variables in one section of a diff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDiffInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<ProjectConfigDiffInputVariable>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDiffInputVariable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
}

/// Schematics job started for a configuration action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetActionJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Cost estimate; the schema is open so every field is kept as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCostEstimateResponse {
    #[serde(flatten)]
    pub properties: JsonObject,
}

// ============================================================================
// Notifications and health
// ============================================================================

/// Notification event to post to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub event: String,

    pub target: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,
}

impl NotificationEvent {
    /// Event for a target
    pub fn new(event: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            target: target.into(),
            source: None,
            triggered_by: None,
            action_url: None,
            data: None,
        }
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn triggered_by(mut self, triggered_by: impl Into<String>) -> Self {
        self.triggered_by = Some(triggered_by.into());
        self
    }

    #[must_use]
    pub fn action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn data(mut self, data: JsonObject) -> Self {
        self.data = Some(data);
        self
    }
}

/// Stored notification event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationEventWithId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Notification event together with the outcome of posting it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationEventWithStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<JsonObject>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostNotificationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<NotificationEventWithStatus>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetNotificationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<NotificationEventWithId>>,
}

/// Catalog event delivered over Pulsar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulsarEventItems {
    pub event_type: String,

    pub timestamp: DateTime<Utc>,

    pub publisher: String,

    pub account_id: String,

    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_properties: Option<JsonObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Any other properties of the event
    #[serde(flatten)]
    pub additional_properties: JsonObject,
}

impl PulsarEventItems {
    /// Catalog event
    pub fn new(
        event_type: impl Into<String>,
        timestamp: DateTime<Utc>,
        publisher: impl Into<String>,
        account_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp,
            publisher: publisher.into(),
            account_id: account_id.into(),
            version: version.into(),
            event_properties: None,
            event_id: None,
            additional_properties: JsonObject::new(),
        }
    }

    #[must_use]
    pub fn event_properties(mut self, properties: JsonObject) -> Self {
        self.event_properties = Some(properties);
        self
    }

    #[must_use]
    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    /// Set an extra top-level property
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.additional_properties.insert(key.into(), value);
        self
    }
}

/// Service health
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Health {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Health of downstream dependencies, only returned with `info=true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<JsonObject>,
}

// ============================================================================
// Event Notifications integration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEventNotificationsIntegrationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetEventNotificationsIntegrationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Number of topics the project source is connected to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_names: Option<Vec<String>>,
}

/// Test notification as delivered to Event Notifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostTestEventNotificationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibmendefaultlong: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibmendefaultshort: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibmensourceid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specversion: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

// ============================================================================
// Service broker
// ============================================================================

/// Result of provisioning a service instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,

    /// Operation id to poll with `get_last_operation`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// Result of deprovisioning a service instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(flatten)]
    pub properties: JsonObject,
}

/// Result of updating a service instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    #[serde(flatten)]
    pub properties: JsonObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetLastOperationResult {
    /// One of `in progress`, `succeeded`, `failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Service instance state as reported by the broker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,

    /// Milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

/// Broker catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<CatalogService>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogServiceMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_updateable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plans: Option<Vec<CatalogPlan>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogServiceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogPlanMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPlanMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
