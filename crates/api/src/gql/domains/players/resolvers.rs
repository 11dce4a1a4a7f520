use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{row_id, team_ref};
use crate::gql::error::{GqlError, RepoResultExt};
use crate::state::AppState;
use infra::repos::{CreatePlayerData, UpdatePlayerData};

use super::types::Player;

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.players().list().into_iter().map(Player::from).collect())
    }

    async fn player(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let Some(player_id) = row_id(&id) else {
            return Ok(None);
        };

        Ok(state.players().get_by_id(player_id).map(Player::from))
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    async fn add_player(&self, ctx: &Context<'_>, name: String, team_id: ID) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let team_id = team_ref(&team_id).gql()?;

        let row = state
            .players()
            .create(CreatePlayerData { name, team_id })
            .gql()?;

        Ok(row.into())
    }

    /// Update the provided fields of a player. Returns null if the player does not exist.
    async fn update_player(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        team_id: Option<ID>,
    ) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let players = state.players();

        let Some(player_id) = row_id(&id) else {
            return Ok(None);
        };

        // A missing player is reported as null even when the team is bad too.
        let team_id = match team_id.as_ref().map(team_ref).transpose() {
            Ok(team_id) => team_id,
            Err(_) if players.get_by_id(player_id).is_none() => return Ok(None),
            Err(e) => return Err(GqlError::from(e).into()),
        };

        let row = players
            .update(player_id, UpdatePlayerData { name, team_id })
            .gql()?;

        Ok(row.map(Player::from))
    }

    async fn delete_player(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(row_id(&id).is_some_and(|player_id| state.players().delete(player_id)))
    }
}
