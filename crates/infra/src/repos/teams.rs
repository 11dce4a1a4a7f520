use crate::db::Db;
use crate::models::TeamRow;

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamData {
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct TeamRepo {
    db: Db,
}

impl TeamRepo {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// All teams in insertion order.
    pub fn list(&self) -> Vec<TeamRow> {
        self.db.read().teams.clone()
    }

    pub fn count(&self) -> usize {
        self.db.read().teams.len()
    }

    pub fn get_by_id(&self, id: i64) -> Option<TeamRow> {
        self.db.read().teams.iter().find(|t| t.id == id).cloned()
    }

    pub fn create(&self, name: String) -> TeamRow {
        let mut store = self.db.write();
        let row = TeamRow {
            id: store.allocate_team_id(),
            name,
        };
        store.teams.push(row.clone());

        tracing::debug!(team_id = row.id, "team created");
        row
    }

    /// Apply the provided fields only. Returns `None` if the team does not exist.
    pub fn update(&self, id: i64, data: UpdateTeamData) -> Option<TeamRow> {
        let mut store = self.db.write();
        let team = store.teams.iter_mut().find(|t| t.id == id)?;

        if let Some(name) = data.name {
            team.name = name;
        }

        tracing::debug!(team_id = id, "team updated");
        Some(team.clone())
    }

    /// Remove a team together with every player that belongs to it.
    ///
    /// Both removals happen under one write lock, so no reader ever sees the
    /// team gone while its players remain (or the reverse).
    pub fn delete(&self, id: i64) -> bool {
        let mut store = self.db.write();
        let Some(idx) = store.teams.iter().position(|t| t.id == id) else {
            return false;
        };

        let before = store.players.len();
        store.players.retain(|p| p.team_id != id);
        let removed_players = before - store.players.len();
        store.teams.remove(idx);

        tracing::info!(team_id = id, removed_players, "team deleted");
        true
    }
}
