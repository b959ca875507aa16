pub mod render;
pub mod terminal;

pub use render::render_grid;
pub use terminal::TerminalEditor;
