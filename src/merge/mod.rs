pub mod aggregate;
pub mod identity;
pub mod layout;
pub mod merge_model;
