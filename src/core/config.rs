use std::env;
use std::path::PathBuf;

use dotenv::dotenv;

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    /// Root directory of the filesystem object store.
    pub data_dir: PathBuf,
    /// Base under which stored object keys become fetchable URLs.
    pub public_base_url: String,
    pub app_env: String,
}

impl Config {
    /// Load the configuration from environment variables, reading a
    /// `.env` file first when present.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            eprintln!("WARNING: JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let public_base_url = env::var("RESOURCE_PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://{}:{}/static", server_host, server_port));

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            jwt_secret,
            data_dir,
            public_base_url,
            app_env,
        })
    }

    /// Print the configuration, hiding the secret.
    pub fn print_info(&self) {
        println!("   Server Configuration:");
        println!("   Environment: {}", self.app_env);
        println!("   Server Address: {}:{}", self.server_host, self.server_port);
        println!("   Data Directory: {}", self.data_dir.display());
        println!("   Public Base URL: {}", self.public_base_url);
        println!(
            "   JWT Secret: {}",
            if self.jwt_secret == DEFAULT_JWT_SECRET {
                "USING DEFAULT (INSECURE!)"
            } else {
                "custom secret configured"
            }
        );
    }
}
