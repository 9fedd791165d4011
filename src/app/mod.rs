mod events;
mod mouse_click;
mod render;
mod state;
mod terminal;

// Re-export public types
pub use render::{INPUT_HEIGHT, MIN_PANEL_ROWS, panel_height_for};
pub use state::App;
pub use terminal::MouseCapture;
