//! API route handlers

pub mod strings;
