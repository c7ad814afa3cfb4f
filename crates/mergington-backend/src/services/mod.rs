//! Backend services for activity and roster management.
//!
//! This module provides the service layer abstraction for the activity
//! directory and its in-memory implementation, along with the seed data
//! the directory is populated with at startup.

pub mod activities;
pub mod seed;

pub use activities::*;
