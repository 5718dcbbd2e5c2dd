#![allow(non_snake_case)]

pub mod app;
pub mod context;
pub mod views;
pub mod vm;

pub use app::{App, GameScreen};
pub use context::{AppContext, UiApp, build_app_context};
