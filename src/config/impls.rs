/// Loading, saving, validation and CLI overrides.
pub mod configuration;

/// Display and Error for configuration errors.
pub mod configuration_error;
