pub mod catalog;
pub mod config;
pub mod layout;
pub mod marks;
pub mod priority;
