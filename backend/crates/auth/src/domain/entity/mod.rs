//! Entity Module

pub mod admin;
