// secrets
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;

pub static SECRET_MANAGER: Lazy<SecretManager> = Lazy::new(SecretManager::new);

/// Env-backed configuration registry. Every key has a development default;
/// production deployments override through the environment. No credentials
/// are baked into the defaults.
pub struct SecretManager {
    secrets: HashMap<String, String>,
}

impl SecretManager {
    fn new() -> Self {
        let mut secrets: HashMap<String, String> = HashMap::new();
        secrets.insert(
            "PORT".to_string(),
            env::var("PORT").unwrap_or("3001".to_string()),
        );
        secrets.insert(
            "DB_URI".to_string(),
            env::var("DB_URI").unwrap_or("ws://localhost:8000".to_string()),
        );
        secrets.insert(
            "DB_NAMESPACE".to_string(),
            env::var("DB_NAMESPACE").unwrap_or("songs".to_string()),
        );
        secrets.insert(
            "DB_NAME".to_string(),
            env::var("DB_NAME").unwrap_or("songsdb".to_string()),
        );
        SecretManager { secrets }
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }
}
