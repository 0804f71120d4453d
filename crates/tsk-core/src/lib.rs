//! Core tsk library (task store, auth gate, access policy).

pub mod auth;
pub mod error;
pub mod paths;
pub mod policy;
pub mod store;
pub mod task;

pub use error::{Error, Result};
