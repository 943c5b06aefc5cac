//! HTTP API: routing, request validation, and response shaping for the
//! course and user echo endpoints.

pub mod app;
pub mod config;
