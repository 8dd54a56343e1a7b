// Configuration module entry point
// Loads settings from file, environment and defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{LoggingConfig, ServerConfig, Settings, StorageConfig};

impl Settings {
    /// Load settings from the default "vhdselect" config file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("vhdselect")
    }

    /// Load settings from the specified file path (without extension).
    /// The file is optional; environment variables with the VHDSELECT
    /// prefix override it, and built-in defaults fill the rest.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("VHDSELECT"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.public_dir", "public")?
            .set_default("server.open_browser", true)?
            .set_default("storage.config_file", "vhd-config.json")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_without_a_config_file() {
        let settings = Settings::load_from("does-not-exist").unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.public_dir, "public");
        assert!(settings.server.open_browser);
        assert_eq!(settings.storage.config_file, "vhd-config.json");
        assert!(settings.logging.access_log);
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let mut settings = Settings::load_from("does-not-exist").unwrap();
        settings.server.port = 9090;
        let addr = settings.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9090");
    }
}
