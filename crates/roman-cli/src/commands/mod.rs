pub mod convert_ops;
pub mod settings_ops;
