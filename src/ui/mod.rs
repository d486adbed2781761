pub mod app;
pub mod details;
pub mod events;
pub mod greeting;
pub mod input;
pub mod layout;
pub mod message;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
