use infra::repos::{PlayerRepo, TeamRepo};
use infra::Db;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    config: ServerConfig,
}

impl AppState {
    pub fn new(db: Db, config: ServerConfig) -> Self {
        Self { db, config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn teams(&self) -> TeamRepo {
        TeamRepo::new(self.db.clone())
    }

    pub fn players(&self) -> PlayerRepo {
        PlayerRepo::new(self.db.clone())
    }
}
