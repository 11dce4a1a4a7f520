use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::common::helpers::team_ref;
use crate::gql::domains::teams::Team;
use crate::gql::error::{GqlError, RepoResultExt};
use crate::state::AppState;
use infra::RepoError;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Player {
    pub id: ID,
    pub name: String,
    pub team_id: ID,
}

impl From<infra::models::PlayerRow> for Player {
    fn from(row: infra::models::PlayerRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            team_id: row.team_id.into(),
        }
    }
}

#[ComplexObject]
impl Player {
    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let team_id = team_ref(&self.team_id).gql()?;

        match state.teams().get_by_id(team_id) {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::from(RepoError::TeamNotFound(self.team_id.to_string())).into()),
        }
    }
}
