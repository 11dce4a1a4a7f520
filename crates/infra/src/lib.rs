pub mod db;
pub mod error;
pub mod ids;
pub mod models;
pub mod repos;

pub use db::{Db, Store};
pub use error::{RepoError, RepoResult};
pub use ids::{parse_id, IdError};
