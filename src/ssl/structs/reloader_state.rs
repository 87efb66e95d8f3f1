use crate::ssl::structs::certificate_bundle::CertificateBundle;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct ReloaderState {
    pub(crate) bundle: Arc<CertificateBundle>,
    pub(crate) last_reload: Instant,
    pub(crate) reload_interval: Duration,
}
