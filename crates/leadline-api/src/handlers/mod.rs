//! API route handlers

pub mod business;
pub mod contact;
pub mod health;
