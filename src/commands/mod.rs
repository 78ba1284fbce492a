//! CLI commands for evalio

pub mod demo;
pub mod dispatch;
pub mod evaluate;
