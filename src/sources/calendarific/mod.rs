//! Calendarific source
//!
//! Remote calendar gateway for India, backed by the Calendarific REST API.
//!
//! # Coverage
//!
//! - **Countries:** IN only
//! - **Provides:** national public holidays, static state list
//! - **Does NOT provide:** regions, subdivision-scoped holiday filtering,
//!   non-public holiday kinds

mod client;
mod source;
mod types;

pub use client::CalendarificClient;
pub use source::CalendarificSource;
