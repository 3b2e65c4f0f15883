//! Integration tests for the forecast engine
//!
//! Tests are organized by topic:
//! - `scenarios` - End-to-end account forecasts with hand-checked balances
//! - `recurrence` - Applicability properties of once/every-N schedules
//! - `properties` - Determinism, monotonicity, exception precedence
//! - `aggregate` - Multi-account forecasts and failure isolation
//! - `reports` - Report shapes and JSON output
//! - `builder_dsl` - Builder DSL id assignment and defaults
//! - `activity` - Recent occurrence feed and movement search

mod aggregate;
mod scenarios;
