pub mod args;
pub mod render;
pub mod terminal;
