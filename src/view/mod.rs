pub mod screen;
pub mod theme;
