use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub weather: WeatherConfig,
}

/// Which of the three apps this process serves. Their route tables overlap at `/`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppKind {
    Employees,
    Todo,
    Weather,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub app: AppKind,
    pub template_dir: String,
    pub static_dir: String,
    pub max_body_size: usize,  // in bytes
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub users_file: String,
    pub employees_file: String,
    pub tasks_file: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PasswordScheme {
    Plaintext,
    Bcrypt,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub password_scheme: PasswordScheme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    // Without a key, `/` lookups are answered from the mock table
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
pub(crate) fn test_config(dir: &std::path::Path, app: AppKind) -> Config {
    let path = |name: &str| dir.join(name).to_string_lossy().into_owned();
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            app,
            template_dir: "templates".into(),
            static_dir: "static".into(),
            max_body_size: 65536,
        },
        storage: StorageConfig {
            users_file: path("users.txt"),
            employees_file: path("employees.txt"),
            tasks_file: path("todo_list.txt"),
        },
        auth: AuthConfig {
            password_scheme: PasswordScheme::Plaintext,
        },
        weather: WeatherConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".into(),
        },
    }
}
