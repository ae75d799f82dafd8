//! Projects service client
//!
//! `ProjectClient` exposes every operation of the Projects API and the
//! service broker endpoints it hosts:
//!
//! - projects: create, list, get, update, delete
//! - configurations: CRUD, drafts, checks, install/uninstall, jobs, cost
//! - notifications, Pulsar catalog events, health
//! - Event Notifications integration
//! - Open Service Broker instance lifecycle and catalog
//!
//! Each operation takes an options value from [`options`] and returns a
//! model from [`models`].

mod broker;
mod client;
mod configs;
pub mod models;
mod notifications;
pub mod options;
mod pager;
mod projects;

pub use broker::{BROKER_API_VERSION_HEADER, BROKER_ORIGINATING_IDENTITY_HEADER};
pub use client::{sdk_analytics, ProjectClient, SDK_ANALYTICS_HEADER};
pub use models::*;
pub use options::*;
pub use pager::{ProjectsListing, ProjectsPager};
