pub mod contact_pills;

pub use contact_pills::ContactPills;
