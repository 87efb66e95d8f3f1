/// Constructors and Display for `CustomError`.
pub mod custom_error;
