//! # certreloader
//!
//! Hot-reloading of a TLS certificate/key pair for long-running rustls servers.
//!
//! Certificates renewed in place by an external tool (certbot, an ACME client, ...)
//! are picked up on the next handshake after the reload interval has elapsed,
//! without restarting the process. The reloader is installed as the server's
//! `ResolvesServerCert`, so no background task or file watcher is involved.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use certreloader::ssl::ssl::{create_certificate_reloader, create_server_config_with_reloader};
//!
//! let reloader = create_certificate_reloader("/etc/letsencrypt/live/example.com/fullchain.pem",
//!                                            "/etc/letsencrypt/live/example.com/privkey.pem")?;
//! reloader.with_reload_interval(Duration::from_secs(60 * 60)).set_verbose(true);
//!
//! let tls_config = create_server_config_with_reloader(reloader)?;
//! ```
//!
//! ## Modules
//!
//! - [`ssl`] - Certificate loading, the reloader and the rustls hook
//! - [`config`] - TOML configuration and CLI overrides
//! - [`http`] - HTTPS demo service built on actix-web
//! - [`common`] - Logging setup and shared error type
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the fern logging setup and the `CustomError` type returned by the
/// binary-facing helpers.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration and applying
/// command line overrides.
pub mod config;

/// HTTPS service module.
///
/// Runs an actix-web server whose TLS certificate is resolved through the
/// certificate reloader on every handshake.
pub mod http;

/// SSL/TLS certificate hot-reload module.
///
/// Provides the reloader, the PEM loader and the rustls server config helper.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
