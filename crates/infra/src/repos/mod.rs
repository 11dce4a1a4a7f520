pub mod players;
pub mod teams;

pub use players::{CreatePlayerData, PlayerRepo, UpdatePlayerData};
pub use teams::{TeamRepo, UpdateTeamData};
