/// Source of certificate bundles.
pub mod certificate_loader;
