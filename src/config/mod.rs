mod app_config;

pub use app_config::{
    AdminCredentials, AppConfig, CorsConfig, DatabaseConfig, JwtConfig, ServerConfig,
};
