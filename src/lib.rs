//! holiday-aggregator
//!
//! Unifies holiday data from two structurally different sources — an embedded
//! rule-based calendar (most countries, with country/state/region hierarchy)
//! and the Calendarific REST API (India only) — behind one normalized model
//! and one stable contract.
//!
//! The routing policy is a registry ([`sources::SourceRegistry`]): every
//! country resolves to the rule-based source unless an override is
//! registered, so adding another remote-sourced country is a single
//! registration, not new branching.
//!
//! Source failures never reach callers of [`HolidayService`]: they are
//! logged, degraded to empty results, and available as structured
//! diagnostics through the `_report` operations.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use holiday_aggregator::{CountryInfo, HolidayService};
//!
//! # async fn demo() {
//! let service = HolidayService::new();
//! let holidays = service
//!     .get_public_holidays(2024, &CountryInfo::new("DE").with_state("BY"))
//!     .await;
//! for h in &holidays {
//!     println!("{} {} ({})", h.date, h.name, h.kind);
//! }
//! # }
//! ```

// Canonical data model
pub mod model;

// Typed source failure taxonomy and diagnostics
pub mod error;

// Pluggable holiday sources and the selection registry
pub mod sources;

// Aggregation service (the public query surface)
pub mod service;

// Country/state/region lookup tree
pub mod geo;

pub use error::{SourceDiagnostic, SourceError};
pub use geo::GeoResolver;
pub use model::{CountryEntry, CountryInfo, Holiday, HolidayKind, Subdivision};
pub use service::{HolidayReport, HolidayService};
pub use sources::{HolidaySource, SourceRegistry};
