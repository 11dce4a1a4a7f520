pub mod resolvers;
pub mod types;

pub use resolvers::{TeamMutation, TeamQuery};
pub use types::Team;
