use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_reloader::CertificateReloader;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use std::fs;
use std::sync::Arc;

pub fn create_certificate_reloader(
    cert_path: &str,
    key_path: &str,
) -> Result<Arc<CertificateReloader>, CertificateError> {
    Ok(Arc::new(CertificateReloader::new(cert_path, key_path)?))
}

/// Builds a rustls server config that asks the reloader for a certificate on every handshake.
pub fn create_server_config_with_reloader(
    reloader: Arc<CertificateReloader>,
) -> Result<rustls::ServerConfig, CertificateError> {
    let config = rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(|e| CertificateError::ServerConfigError(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(reloader);
    Ok(config)
}

/// Writes a self-signed certificate for `localhost` (and `domain`) with its PKCS#8 key.
/// Meant for development only.
pub fn generate_self_signed(
    domain: &str,
    cert_path: &str,
    key_path: &str,
) -> Result<(), CertificateError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let key_pair = KeyPair::generate()
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let cert = CertificateParams::new(subject_alt_names)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?
        .self_signed(&key_pair)
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;

    fs::write(key_path, key_pair.serialize_pem())
        .map_err(|e| CertificateError::WriteError(format!("{}: {}", key_path, e)))?;
    info!("[CERTGEN] The key file {} has been generated", key_path);
    fs::write(cert_path, cert.pem())
        .map_err(|e| CertificateError::WriteError(format!("{}: {}", cert_path, e)))?;
    info!("[CERTGEN] The cert file {} has been generated", cert_path);

    Ok(())
}
