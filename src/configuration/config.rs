#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    AuthorityUrl,
    AuthToken,
    RequestTimeout,
    Username,
}

impl ConfigKey {
    fn env_var(&self) -> String {
        let name = self.to_string().replace('-', "_").to_uppercase();
        return format!("OPTICODE_{name}");
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        let res = match key {
            ConfigKey::AuthorityUrl => "http://localhost:5000",
            ConfigKey::AuthToken => "",
            ConfigKey::RequestTimeout => "1000",
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    /// Seeds every key with its default, then applies `OPTICODE_*`
    /// environment overrides. Empty overrides are ignored.
    pub fn load_env() {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));

            if let Ok(val) = env::var(key.env_var()) {
                if !val.is_empty() {
                    Config::set(key, &val);
                }
            }
        }

        tracing::debug!(
            authority_url = Config::get(ConfigKey::AuthorityUrl),
            request_timeout = Config::get(ConfigKey::RequestTimeout),
            username = Config::get(ConfigKey::Username),
            "config"
        );
    }
}
