//! Notification, health and Event Notifications operations

use super::client::{ProjectClient, JSON};
use super::models::{
    GetEventNotificationsIntegrationResponse, GetNotificationsResponse, Health,
    NotificationEvent, PostEventNotificationsIntegrationResponse, PostNotificationsResponse,
    PostTestEventNotificationResponse,
};
use super::options::{
    DeleteEventNotificationsIntegrationOptions, DeleteNotificationOptions,
    GetEventNotificationsIntegrationOptions, GetHealthOptions, GetNotificationsOptions,
    PostEventNotificationsIntegrationOptions, PostNotificationOptions,
    PostTestEventNotificationOptions, ReceivePulsarCatalogEventsOptions,
};
use crate::error::Result;
use reqwest::Method;
use serde::Serialize;

const EVENTS: &str = "/v1/projects/{id}/event";
const EN_INTEGRATION: &str = "/v1/projects/{id}/integrations/event_notifications";

#[derive(Serialize)]
struct NotificationsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    notifications: Option<&'a [NotificationEvent]>,
}

#[derive(Serialize)]
struct IntegrationBody<'a> {
    instance_crn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_notifications_source_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

#[derive(Serialize)]
struct TestNotificationBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ibmendefaultlong: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ibmendefaultshort: Option<&'a str>,
}

impl ProjectClient {
    /// Post notification events for a project
    pub async fn post_notification(
        &self,
        options: &PostNotificationOptions,
    ) -> Result<PostNotificationsResponse> {
        let url = self.url(EVENTS, &[("id", options.id.as_str())])?;
        let body = NotificationsBody {
            notifications: options.notifications.as_deref(),
        };
        let request = self
            .request("PostNotification", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Get the notifications recorded for a project
    pub async fn get_notifications(
        &self,
        options: &GetNotificationsOptions,
    ) -> Result<GetNotificationsResponse> {
        let url = self.url(EVENTS, &[("id", options.id.as_str())])?;
        let request = self
            .request("GetNotifications", &options.headers)
            .header("Accept", JSON);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Delete the notifications of a project
    pub async fn delete_notification(&self, options: &DeleteNotificationOptions) -> Result<()> {
        let url = self.url(EVENTS, &[("id", options.id.as_str())])?;
        let request = self.request("DeleteNotification", &options.headers);

        self.http_client()
            .request_empty(Method::DELETE, &url, request)
            .await
    }

    /// Forward catalog events received over Pulsar; the body is a bare array
    pub async fn receive_pulsar_catalog_events(
        &self,
        options: &ReceivePulsarCatalogEventsOptions,
    ) -> Result<()> {
        let url = self.url("/v1/pulsar/catalog_events", &[])?;
        let request = self
            .request("ReceivePulsarCatalogEvents", &options.headers)
            .header("Content-Type", JSON)
            .json_from(&options.events)?;

        self.http_client()
            .request_empty(Method::POST, &url, request)
            .await
    }

    /// Check service health
    pub async fn get_health(&self, options: &GetHealthOptions) -> Result<Health> {
        let url = self.url("/v1/health", &[])?;
        let request = self
            .request("GetHealth", &options.headers)
            .header("Accept", JSON)
            .query_opt("info", options.info);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Connect a project to an Event Notifications instance
    pub async fn post_event_notifications_integration(
        &self,
        options: &PostEventNotificationsIntegrationOptions,
    ) -> Result<PostEventNotificationsIntegrationResponse> {
        let url = self.url(EN_INTEGRATION, &[("id", options.id.as_str())])?;
        let body = IntegrationBody {
            instance_crn: &options.instance_crn,
            description: options.description.as_deref(),
            event_notifications_source_name: options.event_notifications_source_name.as_deref(),
            enabled: options.enabled,
        };
        let request = self
            .request("PostEventNotificationsIntegration", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }

    /// Get the Event Notifications integration of a project
    pub async fn get_event_notifications_integration(
        &self,
        options: &GetEventNotificationsIntegrationOptions,
    ) -> Result<GetEventNotificationsIntegrationResponse> {
        let url = self.url(EN_INTEGRATION, &[("id", options.id.as_str())])?;
        let request = self
            .request("GetEventNotificationsIntegration", &options.headers)
            .header("Accept", JSON);

        self.http_client()
            .request_json(Method::GET, &url, request)
            .await
    }

    /// Remove the Event Notifications integration
    pub async fn delete_event_notifications_integration(
        &self,
        options: &DeleteEventNotificationsIntegrationOptions,
    ) -> Result<()> {
        let url = self.url(EN_INTEGRATION, &[("id", options.id.as_str())])?;
        let request = self.request("DeleteEventNotificationsIntegration", &options.headers);

        self.http_client()
            .request_empty(Method::DELETE, &url, request)
            .await
    }

    /// Send a test notification through the integration
    pub async fn post_test_event_notification(
        &self,
        options: &PostTestEventNotificationOptions,
    ) -> Result<PostTestEventNotificationResponse> {
        let url = self.url(
            "/v1/projects/{id}/integrations/event_notifications/test",
            &[("id", options.id.as_str())],
        )?;
        let body = TestNotificationBody {
            ibmendefaultlong: options.ibmendefaultlong.as_deref(),
            ibmendefaultshort: options.ibmendefaultshort.as_deref(),
        };
        let request = self
            .request("PostTestEventNotification", &options.headers)
            .header("Accept", JSON)
            .header("Content-Type", JSON)
            .json_from(&body)?;

        self.http_client()
            .request_json(Method::POST, &url, request)
            .await
    }
}
