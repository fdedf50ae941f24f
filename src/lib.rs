//! Yatra API - HTTP front door for a tourism-listings service
//!
//! This crate covers the process bootstrap only:
//! - JSON and extended URL-encoded body parsing
//! - The `/api` router mount (entity routers plug in here as they land)
//! - Terminal 404 and opaque 500 responders
//! - The connect-then-listen startup sequence

pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
