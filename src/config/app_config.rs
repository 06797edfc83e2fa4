use crate::error::{AppError, Result};
use std::env;
use std::str::FromStr;
use subtle::ConstantTimeEq;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub jwt: JwtConfig,
    pub admin: AdminCredentials,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

/// The single login credential the service accepts. Loaded once at startup
/// and handed to the login handler through `AppState`.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            admin: AdminCredentials::from_env(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 3000)?,
            max_body_size: parse_env("MAX_BODY_SIZE", 1_048_576)?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Config("DATABASE_URL not set".to_string()))?,
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 20)?,
        })
    }
}

impl CorsConfig {
    fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self { allowed_origins }
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| AppError::Config("JWT_SECRET not set".to_string()))?,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "product-service".to_string()),
            audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "product-service-api".to_string()),
        })
    }
}

impl AdminCredentials {
    fn from_env() -> Self {
        Self {
            username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "Paras".to_string()),
            password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "123".to_string()),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| AppError::Config(format!("Invalid {} value", key))),
        Err(_) => Ok(default),
    }
}
