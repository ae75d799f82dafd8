//! Open Service Broker operations
//!
//! These follow the broker API conventions: the broker API version and the
//! originating identity travel as `X-Broker-Api-*` headers.

use super::client::{ProjectClient, JSON, JSON_PATCH};
use super::models::{
    BrokerResult, CatalogResponse, CreateResult, DeleteResult, GetLastOperationResult,
    UpdateResult,
};
use super::options::{
    DeleteServiceInstanceOptions, GetCatalogOptions, GetLastOperationOptions,
    GetServiceInstanceOptions, ReplaceServiceInstanceOptions,
    ReplaceServiceInstanceStateOptions, UpdateServiceInstanceOptions,
};
use crate::error::Result;
use crate::types::JsonObject;
use reqwest::Method;
use serde::Serialize;

pub const BROKER_API_VERSION_HEADER: &str = "X-Broker-Api-Version";
pub const BROKER_ORIGINATING_IDENTITY_HEADER: &str = "X-Broker-Api-Originating-Identity";

const INSTANCE: &str = "/v2/service_instances/{instance_id}";
const INSTANCE_STATE: &str = "/bluemix_v1/service_instances/{instance_id}";

#[derive(Serialize)]
struct ProvisionBody<'a> {
    service_id: &'a str,
    plan_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_values: Option<&'a [String]>,
}

#[derive(Serialize)]
struct InstanceStateBody<'a> {
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    initiator_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason_code: Option<&'a JsonObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_values: Option<&'a [String]>,
}

impl ProjectClient {
    /// Provision or replace a service instance
    pub async fn replace_service_instance(
        &self,
        options: &ReplaceServiceInstanceOptions,
    ) -> Result<CreateResult> {
        let url = self.url(INSTANCE, &[("instance_id", options.instance_id.as_str())])?;
        let body = ProvisionBody {
            service_id: &options.service_id,
            plan_id: &options.plan_id,
            context: options.context.as_deref(),
            parameters: options.parameters.as_ref(),
            previous_values: options.previous_values.as_deref(),
        };
        let request = self
            .request("ReplaceServiceInstance", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref())
            .header_opt(
                BROKER_ORIGINATING_IDENTITY_HEADER,
                options.broker_api_originating_identity.as_deref(),
            )
            .query_opt("accepts_incomplete", options.accepts_incomplete)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::PUT, &url, request)
            .await
    }

    /// Deprovision a service instance
    pub async fn delete_service_instance(
        &self,
        options: &DeleteServiceInstanceOptions,
    ) -> Result<DeleteResult> {
        let url = self.url(INSTANCE, &[("instance_id", options.instance_id.as_str())])?;
        let request = self
            .request("DeleteServiceInstance", &options.headers)
            .header("Accept", JSON)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref())
            .header_opt(
                BROKER_ORIGINATING_IDENTITY_HEADER,
                options.broker_api_originating_identity.as_deref(),
            )
            .query("plan_id", options.plan_id.as_str())
            .query("service_id", options.service_id.as_str())
            .query_opt("accepts_incomplete", options.accepts_incomplete);

        self.http_client()
            .request_json(Method::DELETE, &url, request)
            .await
    }

    /// Change the plan or parameters of a service instance
    pub async fn update_service_instance(
        &self,
        options: &UpdateServiceInstanceOptions,
    ) -> Result<UpdateResult> {
        let url = self.url(INSTANCE, &[("instance_id", options.instance_id.as_str())])?;
        let request = self
            .request("UpdateServiceInstance", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON_PATCH)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref())
            .header_opt(
                BROKER_ORIGINATING_IDENTITY_HEADER,
                options.broker_api_originating_identity.as_deref(),
            )
            .query_opt("accepts_incomplete", options.accepts_incomplete)
            .json_from(&options.json_patch)?;

        self.http_client()
            .request_json(Method::PATCH, &url, request)
            .await
    }

    /// Poll the state of an asynchronous broker operation
    pub async fn get_last_operation(
        &self,
        options: &GetLastOperationOptions,
    ) -> Result<GetLastOperationResult> {
        let url = self.url(
            "/v2/service_instances/{instance_id}/last_operation",
            &[("instance_id", options.instance_id.as_str())],
        )?;
        let request = self
            .request("GetLastOperation", &options.headers)
            .header("Accept", JSON)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref())
            .query_opt("operation", options.operation.as_ref())
            .query_opt("plan_id", options.plan_id.as_ref())
            .query_opt("service_id", options.service_id.as_ref());

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Enable or disable a service instance
    pub async fn replace_service_instance_state(
        &self,
        options: &ReplaceServiceInstanceStateOptions,
    ) -> Result<BrokerResult> {
        let url = self.url(
            INSTANCE_STATE,
            &[("instance_id", options.instance_id.as_str())],
        )?;
        let body = InstanceStateBody {
            enabled: options.enabled,
            initiator_id: options.initiator_id.as_deref(),
            reason_code: options.reason_code.as_ref(),
            plan_id: options.plan_id.as_deref(),
            previous_values: options.previous_values.as_deref(),
        };
        let request = self
            .request("ReplaceServiceInstanceState", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref())
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::PUT, &url, request)
            .await
    }

    /// Get the state of a broker instance
    pub async fn get_service_instance(
        &self,
        options: &GetServiceInstanceOptions,
    ) -> Result<BrokerResult> {
        let url = self.url(
            INSTANCE_STATE,
            &[("instance_id", options.instance_id.as_str())],
        )?;
        let request = self
            .request("GetServiceInstance", &options.headers)
            .header("Accept", JSON)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref());

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Get the broker catalog
    pub async fn get_catalog(&self, options: &GetCatalogOptions) -> Result<CatalogResponse> {
        let url = self.url("/v2/catalog", &[])?;
        let request = self
            .request("GetCatalog", &options.headers)
            .header("Accept", JSON)
            .header_opt(BROKER_API_VERSION_HEADER, options.broker_api_version.as_deref());

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }
}
