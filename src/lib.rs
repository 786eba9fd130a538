//! nimbusctl - command-line tool for the Nimbus cloud platform
//!
//! Users refer to resources by UUID, name/title, hostname or address,
//! interchangeably; the [`resolver`] module turns those arguments into
//! canonical identifiers with a single listing call per command run, and
//! [`completion`] reuses the same listing data for shell suggestions.
//!
//! # Module Structure
//!
//! - [`cloud`] - API client, typed models and the bounded concurrent fetch
//! - [`resolver`] - reference resolution: matchers, tiers, caching providers
//! - [`completion`] - shell completion providers
//! - [`commands`] - the command implementations wired up by the binary
//! - [`config`] - configuration file and environment handling

pub mod cloud;
pub mod commands;
pub mod completion;
pub mod config;
pub mod resolver;
