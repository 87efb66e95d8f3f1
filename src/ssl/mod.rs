//! SSL/TLS certificate hot-reload module.
//!
//! A [`CertificateReloader`](structs::certificate_reloader::CertificateReloader)
//! keeps the last successfully parsed certificate/key pair in memory and
//! re-reads the PEM files from disk once the reload interval has passed.
//! It implements rustls' `ResolvesServerCert`, so it is consulted on every
//! handshake and picks up certificates renewed in place (e.g. by certbot)
//! without restarting the server.
//!
//! # Reload behaviour
//!
//! - Staleness is checked lazily, on handshake; there is no timer or file watcher.
//! - Disk reads and parsing happen without holding the lock.
//! - A failed reload keeps serving the previous certificate.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use certreloader::ssl::ssl::{create_certificate_reloader, create_server_config_with_reloader};
//!
//! let reloader = create_certificate_reloader("cert.pem", "key.pem")?;
//! reloader.with_reload_interval(Duration::from_secs(3600)).set_verbose(true);
//!
//! let tls_config = create_server_config_with_reloader(reloader.clone())?;
//! ```

/// Certificate error types.
pub mod enums;

/// Implementation blocks for the reloader, loader and bundle.
pub mod impls;

/// Server config and self-signed certificate helpers.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Data structures for certificate bundles and the reloader.
pub mod structs;

/// Certificate loading trait.
pub mod traits;
