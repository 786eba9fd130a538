//! Nimbus API interaction module
//!
//! This module provides the core functionality for talking to the Nimbus
//! cloud platform: the HTTP client, the typed API facade and the bounded
//! concurrent fetch helper.
//!
//! # Module Structure
//!
//! - [`api`] - the [`CloudApi`](api::CloudApi) trait consumed by resolvers and commands
//! - [`client`] - live REST implementation of the trait
//! - [`http`] - HTTP utilities shared by the client
//! - [`types`] - typed models for API resources
//! - [`fanout`] - bounded parallel detail fetch
//! - [`mock`] - in-memory implementation used by tests

pub mod api;
pub mod client;
pub mod fanout;
pub mod http;
pub mod mock;
pub mod types;
