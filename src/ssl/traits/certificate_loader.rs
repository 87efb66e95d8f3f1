use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

/// Produces a freshly parsed [`CertificateBundle`] from a certificate/key location pair.
///
/// Called once at construction and again on every reload attempt, without
/// any reloader lock held.
pub trait CertificateLoader: Send + Sync {
    fn load(&self, cert_path: &str, key_path: &str) -> Result<CertificateBundle, CertificateError>;
}
