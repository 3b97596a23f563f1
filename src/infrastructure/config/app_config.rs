/// Service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MySQL connection string
    pub database_url: String,

    /// Bind address
    pub server_host: String,

    /// Bind port
    pub server_port: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
