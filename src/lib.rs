//! Hourly labour cost reporting.
//!
//! This crate computes, for each hour of a business day, labour cost as a
//! percentage of sales, and finds the best and worst hours. It parses
//! free-text shift and break notations, prorates each shift's cost across
//! clock hours, and aggregates sales into the same hourly buckets.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
