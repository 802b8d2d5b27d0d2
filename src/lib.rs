//! Shift scheduling and leave-conflict engine for care-facility rosters.
//!
//! This crate represents work shifts as time intervals, normalizes overnight
//! spans, detects overlaps, reconciles shifts against approved leave, totals
//! worked hours and pay per period, and plans "copy last month's roster
//! forward" operations. An optional axum adapter exposes it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
