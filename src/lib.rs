pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::PollenHiveError;
pub use crate::core::services::PollenHiveService;
pub use infrastructure::logging::in_memory::InMemoryLogging;
pub use infrastructure::sms::in_memory::InMemoryOtpProvider;
pub use infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Service-level tests against the in-memory backends
