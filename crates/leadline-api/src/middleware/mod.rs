//! API middleware

pub mod logging;
