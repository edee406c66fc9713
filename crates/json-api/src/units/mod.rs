//! Units

mod errors;
mod handlers;
mod requests;
mod responses;
#[cfg(test)]
mod scenarios;

pub(crate) use handlers::*;
