use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{PlayerRow, TeamRow};

const SEED_TEAMS: [(i64, &str); 4] = [
    (1, "Boca Juniors"),
    (2, "River Plate"),
    (3, "Independiente"),
    (4, "Racing Club"),
];

const SEED_PLAYERS: [(i64, &str, i64); 12] = [
    (1, "Carlos Tevez", 1),
    (2, "Juan Román Riquelme", 1),
    (3, "Martín Palermo", 1),
    (4, "Enzo Pérez", 2),
    (5, "Franco Armani", 2),
    (6, "Gabriel Batistuta", 2),
    (7, "Gabriel Batistuta", 3),
    (8, "Ricardo Bochini", 3),
    (9, "Lisandro López", 4),
    (10, "Diego Milito", 4),
    (11, "Lautaro Martínez", 4),
    (12, "Gabriel Batistuta", 1),
];

/// In-memory tables plus their id counters.
///
/// Counters only ever grow, so ids are never handed out twice even after
/// rows are deleted.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) teams: Vec<TeamRow>,
    pub(crate) players: Vec<PlayerRow>,
    next_team_id: i64,
    next_player_id: i64,
}

impl Store {
    pub fn empty() -> Self {
        Self {
            teams: Vec::new(),
            players: Vec::new(),
            next_team_id: 1,
            next_player_id: 1,
        }
    }

    /// The fixed rows every process starts with.
    pub fn seeded() -> Self {
        let teams: Vec<TeamRow> = SEED_TEAMS
            .iter()
            .map(|&(id, name)| TeamRow {
                id,
                name: name.to_string(),
            })
            .collect();

        let players: Vec<PlayerRow> = SEED_PLAYERS
            .iter()
            .map(|&(id, name, team_id)| PlayerRow {
                id,
                name: name.to_string(),
                team_id,
            })
            .collect();

        Self {
            next_team_id: teams.len() as i64 + 1,
            next_player_id: players.len() as i64 + 1,
            teams,
            players,
        }
    }

    pub(crate) fn allocate_team_id(&mut self) -> i64 {
        let id = self.next_team_id;
        self.next_team_id += 1;
        id
    }

    pub(crate) fn allocate_player_id(&mut self) -> i64 {
        let id = self.next_player_id;
        self.next_player_id += 1;
        id
    }

    pub(crate) fn team_exists(&self, id: i64) -> bool {
        self.teams.iter().any(|t| t.id == id)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Shared handle to the store. Cloning is cheap; all clones see the same rows.
#[derive(Debug, Clone)]
pub struct Db {
    inner: Arc<RwLock<Store>>,
}

impl Db {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Store::seeded())
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write()
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::seeded()
    }
}
