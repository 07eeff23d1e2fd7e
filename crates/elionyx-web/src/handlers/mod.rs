//! HTTP handlers for all API routes.

pub mod chat;
pub mod explain;
pub mod health;
pub mod predict;
