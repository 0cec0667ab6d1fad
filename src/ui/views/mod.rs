pub mod dashboard;
pub mod explore;
pub mod home;
pub mod not_found;
pub mod onboarding;
pub mod quiz;
pub mod settings;
pub mod video;
