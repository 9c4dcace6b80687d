//! Loan risk scoring service and dashboard navigation.
//!
//! The [`risk`] module turns a client identifier into a loan verdict using a
//! pretrained scoring model, and [`dashboard`] provides the page registry and
//! host shell used by the interactive front-end.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod risk;
pub mod runtime;
pub mod telemetry;
