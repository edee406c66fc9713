//! Unit catalogue domain, persistence and service layer.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
