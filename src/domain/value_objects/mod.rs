//! Value objects - Immutable objects defined by their attributes

mod button;
mod hope;
mod ids;
mod used_flag;
mod viewer;

pub use button::{ButtonState, ButtonView};
pub use hope::{Hope, HopeCost};
pub use ids::*;
pub use used_flag::{UsedFlag, FLAG_KEY, MODULE_ID};
pub use viewer::{Viewer, ViewerRole};
