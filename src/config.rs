// src/config.rs
//
// Environment-driven settings. `.env` files are honored via dotenvy (loaded
// in main before this runs); nothing here touches the filesystem.

use std::path::PathBuf;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Optional account seeded at startup (username, password)
    pub admin_seed: Option<(String, String)>,
}

impl Config {
    /// Read settings from the environment, falling back to local defaults.
    pub fn from_env() -> Self {
        let database_path = std::env::var("CATALOGHUB_DB")
            .unwrap_or_else(|_| "cataloghub.db".to_string())
            .into();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let bind_addr = format!("0.0.0.0:{}", port);

        let admin_seed = match (
            std::env::var("CATALOGHUB_ADMIN_USER"),
            std::env::var("CATALOGHUB_ADMIN_PASSWORD"),
        ) {
            (Ok(user), Ok(password)) if !user.is_empty() && !password.is_empty() => {
                Some((user, password))
            }
            _ => None,
        };

        Self {
            database_path,
            bind_addr,
            admin_seed,
        }
    }
}
