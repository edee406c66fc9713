//! Unit Catalogue Domain Concerns

pub mod units;
