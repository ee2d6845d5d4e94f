//! Request middleware. Currently only the auth gate.

pub mod auth;
