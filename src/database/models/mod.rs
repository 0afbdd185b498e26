pub mod ad;
pub mod game;

pub use ad::{AdEntity, AdSummaryEntity, NewAdEntity};
pub use game::{GameEntity, GameWithAdCountEntity};
