//! # Tasks API
//!
//! A small Axum HTTP service exposing a task-management resource with
//! pagination, api-key authentication, and a self-hosted OpenAPI document
//! rendered through Scalar and Swagger UI.
pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod openapi;
pub mod pagination;
pub mod store;
pub mod validation;
