//! Headless front end for the stigmergy engine: configuration loading, the
//! run loop and frame consumers.

pub mod app;
pub mod ui;

