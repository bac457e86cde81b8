mod camera;
mod game_state;
mod intent;
mod paint;
mod session;

pub use camera::{Camera, CellRange};
pub use game_state::GameState;
pub use intent::Intent;
pub use paint::PaintStroke;
pub use session::{FrameSnapshot, Session};
