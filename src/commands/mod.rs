//! CLI commands for wayfind

pub mod compare;
pub mod config;
pub mod dispatch;
pub mod menu;
pub mod search;
pub mod strategies;
