//! # webtask-core
//!
//! Core types for the webtask browser automation system.
//!
//! Webtask turns JSON-described browser tasks into calls against a
//! browser-automation backend:
//!
//! - A **plan** is an ordered list of typed steps (navigate, click, type,
//!   wait, assertText, capture) executed sequentially against a live
//!   browser handle.
//! - A **task** is a natural-language website + instructions pair handed to
//!   an LLM-backed autonomous agent.
//!
//! This crate holds the wire shapes shared by the executor, agent, planner,
//! and CLI crates, the unified error type, and environment configuration.

mod config;
mod error;
mod types;

pub use config::EnvConfig;
pub use error::{Result, WebtaskError};
pub use types::*;
