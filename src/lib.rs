//! Library crate for wellbeing-quiz-back, exposing modules for binaries and tests.

pub mod config;
pub mod dao;
pub mod data;
pub mod dto;
pub mod error;
pub mod routes;
pub mod sanitize;
pub mod services;
pub mod state;
