#[cfg(feature = "ui")]
pub mod dashboard;
#[cfg(feature = "ui")]
pub mod dashboard_components;
#[cfg(feature = "ui")]
pub mod design_system;
#[cfg(feature = "ui")]
pub mod ui;
pub mod view_models;
