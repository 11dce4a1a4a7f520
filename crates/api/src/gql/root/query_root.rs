use async_graphql::MergedObject;

use crate::gql::domains::players::PlayerQuery;
use crate::gql::domains::teams::TeamQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TeamQuery, PlayerQuery);
