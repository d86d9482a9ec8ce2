//! # alarmclock-domain
//!
//! Pure domain model for the alarm clock settings page.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Weekday short codes** (`Mo`, `Di`, … in lexicographic order)
//! - Define the **Page snapshot** (schedule entry groups + display controls)
//!   that adapters read from the live page
//! - Define **Schedule entry records** and **Display settings records** with
//!   their line-oriented wire format
//! - Define **Submissions** and their aggregated **Outcome**
//! - Define the **Action control** state machine (idle → busy → result → idle)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod control;
pub mod display;
pub mod page;
pub mod schedule;
pub mod submission;
pub mod weekday;
