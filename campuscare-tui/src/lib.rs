#![allow(dead_code, unused_imports, clippy::len_zero)]

pub mod app;
pub mod events;
pub mod forms;
pub mod theme;
pub mod ui;
