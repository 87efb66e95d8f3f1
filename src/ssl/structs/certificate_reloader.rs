use crate::ssl::structs::reloader_state::ReloaderState;
use crate::ssl::traits::certificate_loader::CertificateLoader;
use parking_lot::RwLock;
use std::sync::atomic::AtomicBool;

/// Holds the current certificate bundle and lazily refreshes it from disk
/// once the reload interval has elapsed.
///
/// Install it as the rustls certificate resolver; every handshake goes
/// through [`CertificateReloader::get_certificate`].
pub struct CertificateReloader {
    pub(crate) state: RwLock<ReloaderState>,
    pub(crate) loader: Box<dyn CertificateLoader>,
    pub(crate) cert_path: String,
    pub(crate) key_path: String,
    pub(crate) verbose: AtomicBool,
}
