// src/lib.rs

//! _hkalib_ parses a saved HSM management utility session and audits which
//! user owns which key.
//!
//! The pipeline, in order:
//!
//! 1. [`LogLines`] holds the transcript lines.
//! 2. [`read_user_table`] reads the `listUsers` table.
//! 3. [`read_key_tables`] reads every `findAllKeys` section.
//! 4. [`KeyOwnerIndex`] maps each key to its owner.
//! 5. [`check_policy`] finds keys held by key owner role users without the
//!    owner flag.
//! 6. [`run_audit`] does all of the above and returns an [`AuditReport`],
//!    printed by [`write_report`].
//!
//! [`LogLines`]: crate::data::line::LogLines
//! [`read_user_table`]: crate::readers::usertablereader::read_user_table
//! [`read_key_tables`]: crate::readers::keytablereader::read_key_tables
//! [`KeyOwnerIndex`]: crate::audit::ownership::KeyOwnerIndex
//! [`check_policy`]: crate::audit::policy::check_policy
//! [`run_audit`]: crate::audit::run_audit
//! [`AuditReport`]: crate::audit::AuditReport
//! [`write_report`]: crate::printer::printers::write_report

pub mod audit;
pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
