//! Configuration system for Premia.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod defaults;
pub mod model_config;
pub mod observability_config;
pub mod premia_config;
pub mod server_config;

pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use premia_config::PremiaConfig;
pub use server_config::ServerConfig;
