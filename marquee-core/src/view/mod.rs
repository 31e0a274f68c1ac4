//! View models the host renders.

pub mod card;
pub mod row;

pub use card::{BadgeView, ButtonFace, CardActions, CardView};
pub use row::{RowChild, RowContainer, Track, TrackWrapper, populate_row};
