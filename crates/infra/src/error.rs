use thiserror::Error;

/// Failures a repository write can report.
///
/// Absent rows are not errors: reads and updates return `None`,
/// deletes return `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    /// A player referenced a team that does not exist at write time.
    #[error("team {0} does not exist")]
    TeamNotFound(String),
}

pub type RepoResult<T> = std::result::Result<T, RepoError>;
