use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certs.len())
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// DER bytes of the leaf certificate.
    pub fn leaf(&self) -> Option<&[u8]> {
        self.certs.first().map(|cert| cert.as_ref())
    }

    /// True when both bundles carry byte-identical certificate chains.
    pub fn same_chain(&self, other: &CertificateBundle) -> bool {
        self.certs == other.certs
    }
}
