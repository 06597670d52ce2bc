use std::env;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub app_name: String,
    /// Where the dialogs send the browser after a successful save.
    pub users_page: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: String::new(),
            bind_addr: "127.0.0.1:8080".to_string(),
            session_key: None,
            app_name: "User Admin".to_string(),
            users_page: "/users".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();
        let database_url = get("DATABASE_URL").ok_or("DATABASE_URL must be set")?;
        Ok(AppConfig {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_key: get("SESSION_KEY"),
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            users_page: get("USERS_PAGE").unwrap_or(defaults.users_page),
        })
    }
}
