use crate::db::Db;
use crate::error::{RepoError, RepoResult};
use crate::models::{PlayerRow, TeamRow};

#[derive(Debug, Clone)]
pub struct CreatePlayerData {
    pub name: String,
    pub team_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerData {
    pub name: Option<String>,
    pub team_id: Option<i64>,
}

#[derive(Clone)]
pub struct PlayerRepo {
    db: Db,
}

impl PlayerRepo {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// All players in insertion order.
    pub fn list(&self) -> Vec<PlayerRow> {
        self.db.read().players.clone()
    }

    pub fn count(&self) -> usize {
        self.db.read().players.len()
    }

    pub fn get_by_id(&self, id: i64) -> Option<PlayerRow> {
        self.db.read().players.iter().find(|p| p.id == id).cloned()
    }

    /// Players whose `team_id` matches, in insertion order.
    pub fn list_by_team(&self, team_id: i64) -> Vec<PlayerRow> {
        self.db
            .read()
            .players
            .iter()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect()
    }

    /// The team a player belongs to, if both still exist.
    pub fn team_of(&self, player_id: i64) -> Option<TeamRow> {
        let store = self.db.read();
        let team_id = store.players.iter().find(|p| p.id == player_id)?.team_id;
        store.teams.iter().find(|t| t.id == team_id).cloned()
    }

    pub fn create(&self, data: CreatePlayerData) -> RepoResult<PlayerRow> {
        let mut store = self.db.write();
        if !store.team_exists(data.team_id) {
            return Err(RepoError::TeamNotFound(data.team_id.to_string()));
        }

        let row = PlayerRow {
            id: store.allocate_player_id(),
            name: data.name,
            team_id: data.team_id,
        };
        store.players.push(row.clone());

        tracing::debug!(player_id = row.id, team_id = row.team_id, "player created");
        Ok(row)
    }

    /// Apply the provided fields only.
    ///
    /// Returns `Ok(None)` if the player does not exist. A `team_id` that does
    /// not resolve fails the whole update before any field is written.
    pub fn update(&self, id: i64, data: UpdatePlayerData) -> RepoResult<Option<PlayerRow>> {
        let mut store = self.db.write();
        let Some(idx) = store.players.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(team_id) = data.team_id {
            if !store.team_exists(team_id) {
                return Err(RepoError::TeamNotFound(team_id.to_string()));
            }
        }

        let player = &mut store.players[idx];
        if let Some(name) = data.name {
            player.name = name;
        }
        if let Some(team_id) = data.team_id {
            player.team_id = team_id;
        }

        tracing::debug!(player_id = id, "player updated");
        Ok(Some(player.clone()))
    }

    pub fn delete(&self, id: i64) -> bool {
        let mut store = self.db.write();
        let Some(idx) = store.players.iter().position(|p| p.id == id) else {
            return false;
        };
        store.players.remove(idx);

        tracing::debug!(player_id = id, "player deleted");
        true
    }
}
