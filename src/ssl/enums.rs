/// Errors raised while loading or generating a certificate/key pair.
pub mod certificate_error;
