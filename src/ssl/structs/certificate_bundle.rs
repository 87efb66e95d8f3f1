use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A parsed certificate chain with its signing key, ready to hand to rustls.
///
/// Bundles are immutable once built; a reload produces a fresh bundle and
/// swaps it in as a whole.
pub struct CertificateBundle {
    pub certs: Vec<CertificateDer<'static>>,
    pub certified_key: Arc<CertifiedKey>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}
