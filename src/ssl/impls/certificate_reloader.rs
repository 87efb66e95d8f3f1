use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_reloader::CertificateReloader;
use crate::ssl::structs::pem_file_loader::PemFileLoader;
use crate::ssl::structs::reloader_state::ReloaderState;
use crate::ssl::traits::certificate_loader::CertificateLoader;
use log::info;
use parking_lot::RwLock;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Renewal tools such as certbot run at least twice a day, so a daily check catches every renewal.
pub const DEFAULT_RELOAD_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

const LOG_PREFIX: &str = "[CERTRELOADER]";

impl fmt::Debug for CertificateReloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("CertificateReloader")
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &state.bundle.loaded_at)
            .field("reload_interval", &state.reload_interval)
            .field("verbose", &self.verbose.load(Ordering::Relaxed))
            .finish()
    }
}

impl CertificateReloader {
    /// Loads the PEM pair once and fails if either file cannot be read or parsed.
    pub fn new(cert_path: &str, key_path: &str) -> Result<Self, CertificateError> {
        Self::with_loader(cert_path, key_path, Box::new(PemFileLoader))
    }

    pub fn with_loader(
        cert_path: &str,
        key_path: &str,
        loader: Box<dyn CertificateLoader>,
    ) -> Result<Self, CertificateError> {
        let bundle = loader.load(cert_path, key_path)?;
        Ok(Self {
            state: RwLock::new(ReloaderState {
                bundle: Arc::new(bundle),
                last_reload: Instant::now(),
                reload_interval: DEFAULT_RELOAD_INTERVAL,
            }),
            loader,
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
            verbose: AtomicBool::new(false),
        })
    }

    /// Sets the minimum time between two disk reads.
    ///
    /// A zero interval is accepted and makes every call to
    /// [`CertificateReloader::get_certificate`] re-read the files.
    pub fn with_reload_interval(&self, duration: Duration) -> &Self {
        let mut state = self.state.write();
        self.logf(format_args!("set reload interval to {:?}", duration));
        state.reload_interval = duration;
        self
    }

    pub fn set_verbose(&self, verbose: bool) -> &Self {
        self.verbose.store(verbose, Ordering::Relaxed);
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    pub fn reload_interval(&self) -> Duration {
        self.state.read().reload_interval
    }

    pub fn cert_path(&self) -> &str {
        &self.cert_path
    }

    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    /// Returns the current bundle, re-reading the files first when the cached one is stale.
    ///
    /// A failed reload is logged and the previous bundle is served, so a
    /// half-written renewal never takes the listener down.
    pub fn get_certificate(&self) -> Arc<CertificateBundle> {
        if self.should_reload() {
            self.logf(format_args!("should reload certificate, loading new bundle now"));
            if let Err(error) = self.reload() {
                self.logf(format_args!("could not reload certificate: {}", error));
            }
        }
        Arc::clone(&self.state.read().bundle)
    }

    pub fn should_reload(&self) -> bool {
        let state = self.state.read();
        state.reload_interval.is_zero() || state.last_reload.elapsed() > state.reload_interval
    }

    /// Re-reads the PEM pair and swaps it in. File I/O happens without the lock held.
    pub fn reload(&self) -> Result<(), CertificateError> {
        let bundle = Arc::new(self.loader.load(&self.cert_path, &self.key_path)?);
        let loaded_at = bundle.loaded_at;
        {
            let mut state = self.state.write();
            state.bundle = bundle;
            state.last_reload = Instant::now();
        }
        self.logf(format_args!("certificate reloaded at {}", loaded_at));
        Ok(())
    }

    fn logf(&self, args: fmt::Arguments<'_>) {
        if !self.is_verbose() {
            return;
        }
        info!("{} {}", LOG_PREFIX, args);
    }
}

impl ResolvesServerCert for CertificateReloader {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        Some(Arc::clone(&self.get_certificate().certified_key))
    }
}
