pub mod convert;
pub mod fallback;
pub mod provider;
pub mod types;
