//! Fetch a LeetCode user's public profile, contest ranking and badges from
//! the GraphQL API, merge them into one [`AggregateRecord`] and render a
//! text report.

mod client;
mod error;
mod fetch;
mod graphql;

pub mod aggregate;
pub mod export;
pub mod model;
pub mod query;
pub mod report;

pub use client::{ClientConfig, LeetCodeClient};
pub use error::{ErrorKind, LeetCodeError, Result};
pub use model::*;
