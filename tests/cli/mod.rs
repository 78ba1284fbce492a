mod config;
mod demo;
mod evaluate;
mod misc;
pub mod support;
