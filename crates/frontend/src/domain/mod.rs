pub mod projects;
pub mod resume;
