use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub uploads: UploadSettings,
    pub gemini: GeminiSettings,
    pub classifiers: ClassifierSettings,
    pub logging: LoggingSettings,
    pub secret_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub directory: String,
    pub max_content_length: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub chat_model: String,
    pub vision_model: String,
    pub document_model: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub model_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            uploads: UploadSettings {
                directory: "./uploads".to_string(),
                max_content_length: 16_777_216,
            },
            gemini: GeminiSettings {
                api_key: String::new(),
                chat_model: "gemini-2.5-flash".to_string(),
                vision_model: "gemini-1.5-flash".to_string(),
                document_model: "gemini-1.5-pro".to_string(),
                request_timeout_secs: 30,
            },
            classifiers: ClassifierSettings {
                model_dir: "./saved_models".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
            secret_key: "your-secret-key-here".to_string(),
        }
    }
}

impl Settings {
    /// Layered load: built-in defaults, then an optional
    /// `appsettings.<env>` file, then `APP__`-prefixed environment
    /// variables, then the short-form variables the deployment scripts
    /// have always used (`GEMINI_API_KEY`, `SECRET_KEY`, `UPLOAD_FOLDER`,
    /// `MAX_CONTENT_LENGTH`).
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let configuration = config::Config::builder()
            .set_default("server.host", defaults.server.host.as_str())?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("uploads.directory", defaults.uploads.directory.as_str())?
            .set_default(
                "uploads.max_content_length",
                defaults.uploads.max_content_length as i64,
            )?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.chat_model", defaults.gemini.chat_model.as_str())?
            .set_default("gemini.vision_model", defaults.gemini.vision_model.as_str())?
            .set_default(
                "gemini.document_model",
                defaults.gemini.document_model.as_str(),
            )?
            .set_default(
                "gemini.request_timeout_secs",
                defaults.gemini.request_timeout_secs as i64,
            )?
            .set_default("classifiers.model_dir", defaults.classifiers.model_dir.as_str())?
            .set_default("logging.level", defaults.logging.level.as_str())?
            .set_default("logging.enable_json", defaults.logging.enable_json)?
            .set_default("secret_key", defaults.secret_key.as_str())?
            .add_source(
                config::File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.apply_env_shorthands();
        Ok(settings)
    }

    fn apply_env_shorthands(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini.api_key = key;
        }
        if let Ok(secret) = std::env::var("SECRET_KEY") {
            self.secret_key = secret;
        }
        if let Ok(dir) = std::env::var("UPLOAD_FOLDER") {
            self.uploads.directory = dir;
        }
        if let Ok(max) = std::env::var("MAX_CONTENT_LENGTH")
            && let Ok(max) = max.parse()
        {
            self.uploads.max_content_length = max;
        }
    }
}
