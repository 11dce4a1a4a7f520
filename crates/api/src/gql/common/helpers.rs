use async_graphql::ID;
use infra::{parse_id, RepoError};

/// Stored id named by a GraphQL `ID`, or `None` if it cannot name any row.
pub fn row_id(id: &ID) -> Option<i64> {
    match parse_id(id.as_str()) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!("Unresolvable id {:?}: {e}", id.as_str());
            None
        }
    }
}

/// Like [`row_id`], for a foreign key: an id that cannot name a team is a
/// dangling reference.
pub fn team_ref(id: &ID) -> Result<i64, RepoError> {
    row_id(id).ok_or_else(|| RepoError::TeamNotFound(id.to_string()))
}
