/// Reads a PEM certificate chain and private key straight from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct PemFileLoader;
