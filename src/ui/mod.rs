//! View models behind the presentational components.
//!
//! Everything here is pure: no network access and no persisted state.

pub mod badge;
pub mod empty_state;
pub mod hero;

pub use badge::DistanceBadge;
pub use empty_state::EmptyState;
pub use hero::{HeroLayout, HeroSelector};
