//! Typed Clash of Clans API client.
//!
//! The library offers wrappers around the official REST endpoints, returning
//! either the raw JSON body or the mapped domain model of `clashtrack-shared`.

pub mod api;

pub use api::{Client, ClientOptions, tag::parse_tag};
pub use clashtrack_shared as shared;
