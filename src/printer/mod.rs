// src/printer/mod.rs

//! The `printer` module is for printing user-facing audit results
//! ([`AuditReport`]s, [`Diagnostic`]s, and [`Summary`]s)
//! with various text effects (color, bold).
//!
//! [`AuditReport`]: crate::audit::AuditReport
//! [`Diagnostic`]: crate::data::diagnostic::Diagnostic
//! [`Summary`]: crate::readers::summary::Summary

pub mod printers;
pub mod summary;
