//! Command-line front end for the `cookiecutter` React component template.
//!
//! The flow is linear: load the optional `create-component.json` defaults,
//! resolve the command line against them, print the resolved groups, ask for
//! confirmation, then hand everything to the scaffolding engine exactly
//! once. The engine does all the file work; this crate only merges
//! arguments and reports.

pub mod args;
pub mod config;
pub mod confirm;
pub mod engine;
pub mod log;
