//! Resume builder service: document model, section editors, session
//! aggregation and preview rendering.

pub mod advisory;
pub mod config;
pub mod editor;
pub mod errors;
pub mod models;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
