//! CLI commands for cinerec

pub mod catalog;
pub mod collab;
pub mod content;
pub mod data;
pub mod dispatch;
pub mod render;
pub mod similarity;
