/// Debug formatting for certificate bundles.
pub mod certificate_bundle;

/// Reload logic and the rustls resolver hook.
pub mod certificate_reloader;

/// PEM parsing from disk.
pub mod pem_file_loader;
