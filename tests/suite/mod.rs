//! Integration test modules

mod config;
mod display;
mod edit;
mod lifecycle;
mod session;
