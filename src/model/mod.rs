//! Pure data structures shared by the screens.

pub mod post;
pub mod story;
pub mod ui_state;
pub mod user;

pub use post::*;
pub use story::*;
pub use ui_state::*;
pub use user::*;
