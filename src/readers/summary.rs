// src/readers/summary.rs

//! Implements `Summary` statistics tracking struct.

use crate::common::{Count, FPath};
use crate::data::diagnostic::{DiagnosticLevel, Diagnostics};
use crate::data::user::UsersById;
use crate::readers::linereader::SummaryLineReader;

use std::fmt;

use ::more_asserts::debug_assert_ge;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Accumulated statistics about parsing and auditing one transcript.
///
/// For CLI option `--summary`.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Summary {
    /// the `FPath` of the processed transcript
    pub path: FPath,
    /// statistics of the `LineReader`
    pub linereader: SummaryLineReader,
    /// `Count` of users listed
    pub users: Count,
    /// `Count` of users with at least one key
    pub users_with_keys: Count,
    /// `Count` of key records of all users
    pub key_records: Count,
    /// `Count` of key records with the owner flag
    pub key_records_owned: Count,
    /// `Count` of key records with the shared flag
    pub key_records_shared: Count,
    /// `Count` of key records without flags
    pub key_records_public: Count,
    /// `Count` of distinct owned key ids
    pub keys_indexed: Count,
    /// `Count` of key owner role users checked
    pub key_owners_checked: Count,
    /// `Count` of mis-owned key ids
    pub keys_misowned: Count,
    pub diagnostics_info: Count,
    pub diagnostics_warning: Count,
    pub diagnostics_error: Count,
}

impl Summary {
    /// Tally the key records of `users`.
    pub fn new(
        path: FPath,
        linereader: SummaryLineReader,
        users: &UsersById,
        diagnostics: &Diagnostics,
    ) -> Summary {
        defn!("({:?})", path);
        let mut summary = Summary {
            path,
            linereader,
            users: users.len() as Count,
            ..Default::default()
        };
        for entry in users.values() {
            if entry.keys.is_some() {
                summary.users_with_keys += 1;
            }
            for key in entry.key_records() {
                summary.key_records += 1;
                if key.is_owned() {
                    summary.key_records_owned += 1;
                }
                if key.is_shared() {
                    summary.key_records_shared += 1;
                }
                if key.is_public() {
                    summary.key_records_public += 1;
                }
            }
        }
        debug_assert_ge!(
            summary.key_records,
            summary.key_records_public,
            "more public key records than key records"
        );
        summary.diagnostics_info = diagnostics.count_level(DiagnosticLevel::Info) as Count;
        summary.diagnostics_warning = diagnostics.count_level(DiagnosticLevel::Warning) as Count;
        summary.diagnostics_error = diagnostics.count_level(DiagnosticLevel::Error) as Count;
        defx!("{:?}", summary);

        summary
    }
}

impl fmt::Debug for Summary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("Summary")
            .field("path", &self.path)
            .field("lines", &self.linereader.linereader_lines)
            .field("users", &self.users)
            .field("key records", &self.key_records)
            .field("keys indexed", &self.keys_indexed)
            .field("keys misowned", &self.keys_misowned)
            .finish()
    }
}
