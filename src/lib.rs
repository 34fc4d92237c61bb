//! Sakaya is a REST backend serving a sake catalog.
//!
//! The crate is layered: [`domain`] holds plain records, [`application`]
//! holds the repository port and use-case orchestration, and [`infra`] holds
//! the Postgres, cache, and HTTP adapters. [`config`] resolves deployment
//! settings from files, environment, and CLI flags.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
