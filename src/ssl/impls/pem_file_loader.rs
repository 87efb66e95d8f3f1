use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::pem_file_loader::PemFileLoader;
use crate::ssl::traits::certificate_loader::CertificateLoader;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;

impl PemFileLoader {
    pub fn load_bundle_from_files(
        cert_path: &str,
        key_path: &str,
    ) -> Result<CertificateBundle, CertificateError> {
        let certs_file = File::open(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let mut certs_reader = BufReader::new(certs_file);
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut key_reader = BufReader::new(key_file);

        let tls_certs = Self::parse_certificates(&mut certs_reader, cert_path)?;
        let tls_key = Self::parse_private_key(&mut key_reader, key_path)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&tls_key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}: {}", key_path, e)))?;
        let certified_key = CertifiedKey::new(tls_certs.clone(), signing_key);
        // The key must belong to the leaf, a half-written renewal does not.
        certified_key.keys_match()
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{} does not match {}: {}", key_path, cert_path, e)))?;

        Ok(CertificateBundle {
            certs: tls_certs,
            certified_key: Arc::new(certified_key),
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn parse_certificates<R: BufRead>(
        reader: &mut R,
        cert_path: &str,
    ) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(format!("{}: {}", cert_path, e)))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::CertParseError(format!(
                "{}: No certificates found in file",
                cert_path
            )));
        }
        Ok(tls_certs)
    }

    /// Takes the first PKCS#8, PKCS#1 or SEC1 key block in the stream.
    pub fn parse_private_key<R: BufRead>(
        reader: &mut R,
        key_path: &str,
    ) -> Result<PrivateKeyDer<'static>, CertificateError> {
        match rustls_pemfile::private_key(reader) {
            Ok(Some(key)) => Ok(key),
            Ok(None) => Err(CertificateError::NoKeyFound(key_path.to_string())),
            Err(e) => Err(CertificateError::KeyParseError(format!("{}: {}", key_path, e))),
        }
    }
}

impl CertificateLoader for PemFileLoader {
    fn load(&self, cert_path: &str, key_path: &str) -> Result<CertificateBundle, CertificateError> {
        Self::load_bundle_from_files(cert_path, key_path)
    }
}
