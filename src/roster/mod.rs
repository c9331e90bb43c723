pub mod client;
pub mod csv;
pub mod errors;
pub mod manager;
pub mod models;
pub mod normalize;
pub mod reconciler;
pub mod starter;

pub use client::{SheetClient, SheetSource};
pub use errors::RosterError;
pub use manager::RosterManager;
pub use models::Creator;
pub use reconciler::{FollowerOverride, MediaDefaults, RosterSettings};
pub use starter::starter_roster;
