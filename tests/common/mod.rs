#![allow(dead_code)]
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use certreloader::ssl::ssl::generate_self_signed;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, ClientConnection, DigitallySignedStruct, ServerConfig, ServerConnection, SignatureScheme};
use tempfile::TempDir;

#[derive(Debug, Clone)]
pub struct CertificatePair {
    pub cert_path: String,
    pub key_path: String,
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_self_signed(dir: &TempDir, name: &str) -> CertificatePair {
    let pair = CertificatePair {
        cert_path: dir.path().join(format!("{name}.cert.pem")).to_string_lossy().to_string(),
        key_path: dir.path().join(format!("{name}.key.pem")).to_string_lossy().to_string(),
    };
    generate_self_signed("localhost", &pair.cert_path, &pair.key_path).expect("Failed to generate certificate pair");
    pair
}

/// Overwrites `target` in place with the files of `source`, the way a renewal would.
pub fn renew_pair(target: &CertificatePair, source: &CertificatePair) {
    fs::copy(&source.cert_path, &target.cert_path).expect("Failed to copy certificate");
    fs::copy(&source.key_path, &target.key_path).expect("Failed to copy key");
}

/// Same as [`renew_pair`] but each file is swapped in with a rename.
pub fn renew_pair_atomically(target: &CertificatePair, source: &CertificatePair) {
    let cert_tmp = format!("{}.tmp", target.cert_path);
    let key_tmp = format!("{}.tmp", target.key_path);
    fs::copy(&source.cert_path, &cert_tmp).expect("Failed to copy certificate");
    fs::rename(&cert_tmp, &target.cert_path).expect("Failed to rename certificate");
    fs::copy(&source.key_path, &key_tmp).expect("Failed to copy key");
    fs::rename(&key_tmp, &target.key_path).expect("Failed to rename key");
}

pub fn read_chain(cert_path: &str) -> Vec<CertificateDer<'static>> {
    let mut reader = BufReader::new(File::open(cert_path).expect("Failed to open certificate"));
    rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to parse certificate")
}

#[derive(Debug)]
pub struct AcceptAnyServerCert(Arc<CryptoProvider>);

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.0.signature_verification_algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.0.signature_verification_algorithms.supported_schemes()
    }
}

pub fn create_client_config() -> Arc<ClientConfig> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(Arc::clone(&provider))
        .with_safe_default_protocol_versions()
        .expect("Failed to select protocol versions")
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert(provider)))
        .with_no_client_auth();
    Arc::new(config)
}

/// Runs a full in-memory TLS handshake and returns the chain the server presented.
pub fn handshake(server_config: Arc<ServerConfig>) -> Vec<CertificateDer<'static>> {
    let server_name = ServerName::try_from("localhost").expect("Invalid server name");
    let mut client = ClientConnection::new(create_client_config(), server_name).expect("Failed to create client");
    let mut server = ServerConnection::new(server_config).expect("Failed to create server");

    for _ in 0..16 {
        if !client.is_handshaking() && !server.is_handshaking() {
            break;
        }
        let mut buf = Vec::new();
        while client.wants_write() {
            client.write_tls(&mut buf).expect("Client write failed");
        }
        let mut rd = buf.as_slice();
        while !rd.is_empty() {
            server.read_tls(&mut rd).expect("Server read failed");
            server.process_new_packets().expect("Server handshake failed");
        }

        let mut buf = Vec::new();
        while server.wants_write() {
            server.write_tls(&mut buf).expect("Server write failed");
        }
        let mut rd = buf.as_slice();
        while !rd.is_empty() {
            client.read_tls(&mut rd).expect("Client read failed");
            client.process_new_packets().expect("Client handshake failed");
        }
    }
    assert!(!client.is_handshaking(), "Handshake did not complete");

    client
        .peer_certificates()
        .expect("Server presented no certificate")
        .iter()
        .map(|cert| cert.clone().into_owned())
        .collect()
}
