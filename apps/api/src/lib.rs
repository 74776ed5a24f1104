//! Resume screening service: keyword overlap between a resume and a job
//! description, exposed over HTTP (`screener-api`) and the `screen` CLI.

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod screening;
pub mod state;
