pub mod app;
pub mod data;
pub mod demos;
pub mod judge;
pub mod model;
pub mod progress;
pub mod session;
pub mod ui;

pub use app::TutorApp;
