pub mod assets;
pub mod ui;
pub mod view_model;
