//! API services

pub mod todos;
