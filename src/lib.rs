//! # crmql - GraphQL over the customers/companies REST API
//!
//! crmql exposes a GraphQL schema for two related entities, `Customer` and
//! `Company`, and resolves every field by delegating to a REST backend
//! (by default `http://localhost:3000`). It holds no state of its own.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve GraphQL on :4000 against the default backend
//! crmql serve
//!
//! # Point at another backend
//! crmql --backend-url http://api.internal:8080 serve --port 5000
//!
//! # One-off query
//! crmql query '{ company(id: "1") { name customers { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`backend`]: REST client, one HTTP call per operation
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Backend records
//! - [`logging`]: tracing setup

/// REST backend client.
pub mod backend;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.crmql.toml` files, discovered by searching upward.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CrmqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and server.
pub mod graphql;

pub mod logging;

/// Records exchanged with the backend.
pub mod model;
