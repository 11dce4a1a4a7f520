use async_graphql::MergedObject;

use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::teams::TeamMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(PlayerMutation, TeamMutation);
