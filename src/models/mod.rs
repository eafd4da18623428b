//! Core data models for bibliographic records.

mod paper;

pub use paper::{Kind, Paper};
