//! Venlyn Analytics Engine
//!
//! Reduces collections of call records into the aggregates the operations
//! dashboard renders:
//!
//! - Headline KPIs (counts, rates, total value)
//! - Period-over-period trend comparison
//! - A gap-free daily time series split by outcome
//! - A disposition breakdown with percentages
//!
//! Every entry point is a pure, deterministic reduction over
//! already-materialized records. The engine never queries storage and never
//! reads a clock; windows and the current time are caller-supplied. Batches
//! containing records that violate their invariants are rejected whole;
//! partial aggregates would mislead a dashboard.
//!
//! # Examples
//!
//! ```
//! use venlyn_analytics::compute_kpis;
//!
//! let kpis = compute_kpis(&[]).unwrap();
//! assert_eq!(kpis.total_calls, 0);
//! assert_eq!(kpis.answer_rate, 0.0);
//! ```

#![warn(missing_docs)]

mod breakdown;
mod error;
mod kpis;
mod series;
mod trend;

pub use breakdown::{compute_disposition_breakdown, DispositionSlice};
pub use error::AnalyticsError;
pub use kpis::{compute_kpis, KpiData, SPAM_SCORE_THRESHOLD};
pub use series::{compute_time_series, utc_day, DailyPoint};
pub use trend::{compute_kpi_trend, KpiTrend};
