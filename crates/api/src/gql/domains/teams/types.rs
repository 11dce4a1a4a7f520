use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::gql::common::helpers::row_id;
use crate::gql::domains::players::Player;
use crate::state::AppState;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Team {
    pub id: ID,
    pub name: String,
}

impl From<infra::models::TeamRow> for Team {
    fn from(row: infra::models::TeamRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
        }
    }
}

#[ComplexObject]
impl Team {
    /// Players currently on this team, in the order they were added
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let Some(team_id) = row_id(&self.id) else {
            return Ok(Vec::new());
        };

        Ok(state
            .players()
            .list_by_team(team_id)
            .into_iter()
            .map(Player::from)
            .collect())
    }
}
