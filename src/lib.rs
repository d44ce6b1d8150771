// Editor library - exposes all core modules for testing

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod event;
pub mod highlight;
pub mod keybindings;
pub mod prompt;
pub mod row;
pub mod search;
pub mod services;
pub mod state;
pub mod syntax;
pub mod view;
pub mod viewport;

// Re-export commonly used types
pub use buffer::Buffer;
pub use editor::{run_session, Editor};
pub use highlight::Highlight;
