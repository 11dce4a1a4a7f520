use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::row_id;
use crate::state::AppState;
use infra::repos::UpdateTeamData;

use super::types::Team;

#[derive(Default)]
pub struct TeamQuery;

#[Object]
impl TeamQuery {
    async fn teams(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.teams().list().into_iter().map(Team::from).collect())
    }

    async fn team(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        let Some(team_id) = row_id(&id) else {
            return Ok(None);
        };

        Ok(state.teams().get_by_id(team_id).map(Team::from))
    }
}

#[derive(Default)]
pub struct TeamMutation;

#[Object]
impl TeamMutation {
    async fn add_team(&self, ctx: &Context<'_>, name: String) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        Ok(state.teams().create(name).into())
    }

    /// Rename a team. Returns null if it does not exist.
    async fn update_team(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
    ) -> Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        let Some(team_id) = row_id(&id) else {
            return Ok(None);
        };

        Ok(state
            .teams()
            .update(team_id, UpdateTeamData { name })
            .map(Team::from))
    }

    /// Delete a team and all of its players
    async fn delete_team(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(row_id(&id).is_some_and(|team_id| state.teams().delete(team_id)))
    }
}
