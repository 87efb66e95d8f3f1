//! HTTPS demo service.
//!
//! Serves a single `GET /` endpoint over TLS, with the certificate resolved
//! through the [`CertificateReloader`](crate::ssl::structs::certificate_reloader::CertificateReloader)
//! on every handshake. Renewed certificates are picked up once the reload
//! interval has passed, without restarting the listener.

/// Core HTTPS service implementation.
#[allow(clippy::module_inception)]
pub mod http;
