use config::{Environment, File};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::quiz::models::DecoyStrategy;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load config: {}", e)));

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub quiz: QuizConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct QuizConfig {
    pub rounds: usize,
    pub decoys: usize,
    pub catalog_path: String,
    pub decoy_strategy: DecoyStrategy,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    pub ttl_minutes: i64,
    pub sweep_interval_secs: u64,
}

impl AppConfig {
    fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("quiz.rounds", 5)?
            .set_default("quiz.decoys", 3)?
            .set_default("quiz.catalog_path", "data/catalog.json")?
            .set_default("quiz.decoy_strategy", "uniform")?
            .set_default("session.ttl_minutes", 30)?
            .set_default("session.sweep_interval_secs", 60)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("HINT").separator("__"))
            .build()?
            .try_deserialize()
    }
}
