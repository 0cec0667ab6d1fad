pub mod app;
pub mod avatar;
pub mod badges;
pub mod config;
pub mod data;
pub mod dwell;
pub mod error;
pub mod model;
pub mod onboarding;
pub mod profile;
pub mod quiz;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::SciWorldApp;
