use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use crate::{
    catalog::{loader, models::Catalog},
    config::config::CONFIG,
    quiz::error::QuizError,
    server::error::ServerError,
    session::store::SessionStore,
};

pub struct AppState {
    catalog: Catalog,
    sessions: SessionStore,
}

impl AppState {
    /// Loads the catalog and refuses to boot when it cannot fill a full quiz,
    /// so an undersized catalog never reaches a player.
    pub fn from_config() -> Result<Arc<Self>, ServerError> {
        let catalog = loader::load_catalog(&CONFIG.quiz.catalog_path)?;

        let needed = CONFIG.quiz.rounds.max(CONFIG.quiz.decoys + 1);
        if catalog.len() < needed {
            return Err(ServerError::Quiz(QuizError::InsufficientCatalog {
                needed,
                available: catalog.len(),
            }));
        }

        info!("Loaded catalog with {} games", catalog.len());

        let sessions = SessionStore::from_ttl(Duration::minutes(CONFIG.session.ttl_minutes));

        Ok(Arc::new(Self { catalog, sessions }))
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
