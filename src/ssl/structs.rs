/// Parsed certificate chain plus signing key.
pub mod certificate_bundle;

/// Hot-reloading certificate holder used as the rustls resolver.
pub mod certificate_reloader;

/// Filesystem-backed PEM loader.
pub mod pem_file_loader;

/// Lock-protected mutable state of the reloader.
pub mod reloader_state;
