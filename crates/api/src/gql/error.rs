use infra::RepoError;

/// Message shown to clients when a player points at a team that does not exist.
pub const TEAM_NOT_FOUND: &str = "Equipo no encontrado";

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`. Store errors are
/// logged with their detail and shown to clients as a fixed message.
#[derive(Debug)]
pub enum GqlError {
    Repo(RepoError),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Repo(e @ RepoError::TeamNotFound(_)) => {
                tracing::debug!("Rejected write: {e}");
                write!(f, "{TEAM_NOT_FOUND}")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<RepoError> for GqlError {
    fn from(e: RepoError) -> Self {
        GqlError::Repo(e)
    }
}

/// Extension trait that routes store results through [`GqlError`], so
/// `?` surfaces the client-facing message instead of the store's own.
///
/// Usage: `players.create(data).gql()?`
pub trait RepoResultExt<T> {
    fn gql(self) -> std::result::Result<T, GqlError>;
}

impl<T> RepoResultExt<T> for std::result::Result<T, RepoError> {
    fn gql(self) -> std::result::Result<T, GqlError> {
        self.map_err(GqlError::from)
    }
}
