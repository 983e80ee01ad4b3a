//! UN/LOCODE lookup service.
//!
//! Location codes are read once at startup from comma-separated code-list files
//! into an in-memory table and served read-only over HTTP:
//!
//! - `GET /locode?locode=<code>` returns one location as JSON.
//! - `GET /random?count=<n>` returns a random sample of codes, one per line.
//! - `GET /health` reports how many codes are loaded.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
