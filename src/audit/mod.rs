// src/audit/mod.rs

//! The `audit` module ties the readers together: parse a transcript, index
//! key owners, apply a [`KeyOwnerPolicy`] and collect the discrepancies.
//!
//! [`run_audit`] is the single entry point. It returns an [`AuditReport`] or
//! the first [`ParseError`]. Nothing is printed here; see
//! [`crate::printer`].
//!
//! [`ParseError`]: crate::common::ParseError

pub mod ownership;
pub mod policy;

use crate::common::{Count, FPath, KeyId, ResultParse, UserId};
use crate::data::diagnostic::{DiagnosticKind, Diagnostics};
use crate::data::line::LogLines;
use crate::data::user::{User, UsersById};
use crate::readers::keytablereader::read_key_tables;
use crate::readers::linereader::{LineReader, SummaryLineReader};
use crate::readers::summary::Summary;
use crate::readers::usertablereader::{read_user_table, UserTable};

pub use self::ownership::KeyOwnerIndex;
pub use self::policy::{check_policy, ExpectedOwner, KeyOwnerPolicy, MisOwnedKeys};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// A mis-owned key, its actual owner and the user(s) expected to own it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Discrepancy {
    pub key_id: KeyId,
    /// [`User::unknown`] if no user owns the key
    ///
    /// [`User::unknown`]: crate::data::user::User::unknown
    pub actual_owner: User,
    /// never empty; more than one entry is a conflict
    pub expected_owners: Vec<ExpectedOwner>,
}

impl Discrepancy {
    /// More than one user was expected to own the key.
    pub fn is_conflicting(&self) -> bool {
        self.expected_owners.len() > 1
    }
}

/// Everything found by [`run_audit`].
#[derive(Debug)]
pub struct AuditReport {
    pub path: FPath,
    /// `Count` of lines in the transcript
    pub lines: Count,
    pub users: UsersById,
    pub key_owner_index: KeyOwnerIndex,
    pub policy: KeyOwnerPolicy,
    /// key owner role users, in checking order
    pub key_owners: Vec<UserId>,
    pub misowned: MisOwnedKeys,
    /// one per entry of `misowned`, same order
    pub discrepancies: Vec<Discrepancy>,
    pub diagnostics: Diagnostics,
    pub linereader_summary: SummaryLineReader,
}

impl AuditReport {
    /// Statistics for CLI option `--summary`.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::new(
            self.path.clone(),
            self.linereader_summary,
            &self.users,
            &self.diagnostics,
        );
        summary.keys_indexed = self.key_owner_index.len() as Count;
        summary.key_owners_checked = self.key_owners.len() as Count;
        summary.keys_misowned = self.misowned.len() as Count;

        summary
    }
}

/// Look up the actual owner of every mis-owned key.
///
/// Conflicting expectations push a
/// [`DiagnosticKind::ConflictingExpectedOwners`] warning.
pub fn find_discrepancies(
    misowned: &MisOwnedKeys,
    index: &KeyOwnerIndex,
    diagnostics: &mut Diagnostics,
) -> Vec<Discrepancy> {
    defn!("{} mis-owned keys", misowned.len());
    let mut discrepancies: Vec<Discrepancy> = Vec::with_capacity(misowned.len());
    for (key_id, expected_owners) in misowned.iter() {
        let actual_owner: User = index.find_key_owner(key_id, diagnostics);
        if expected_owners.len() > 1 {
            diagnostics.warning(
                DiagnosticKind::ConflictingExpectedOwners,
                format!(
                    "key {} is expected to be owned by {} different users",
                    key_id,
                    expected_owners.len()
                ),
                None,
                Some(key_id),
            );
        }
        discrepancies.push(Discrepancy {
            key_id: key_id.clone(),
            actual_owner,
            expected_owners: expected_owners.to_vec(),
        });
    }
    defx!();

    discrepancies
}

/// Parse `loglines` and audit key ownership according to `policy`.
///
/// Any format violation in the transcript returns the [`ParseError`];
/// data anomalies are recorded in [`AuditReport::diagnostics`].
///
/// [`ParseError`]: crate::common::ParseError
pub fn run_audit(
    loglines: &LogLines,
    policy: &KeyOwnerPolicy,
) -> ResultParse<AuditReport> {
    defn!("({:?}, {:?})", loglines, policy);
    let mut diagnostics = Diagnostics::new();
    diagnostics.info(
        DiagnosticKind::PolicyChoice,
        format!("key owner prefixes: {}", policy.describe()),
        None,
        None,
    );

    let mut linereader = LineReader::new(loglines);
    let UserTable {
        mut users,
        start_of_info,
    } = read_user_table(&mut linereader)?;
    read_key_tables(&mut linereader, start_of_info, &mut users)?;

    let key_owner_index = KeyOwnerIndex::build(&users, &mut diagnostics);
    let key_owners: Vec<UserId> = policy.key_owners(&users);
    let misowned: MisOwnedKeys = check_policy(&users, &key_owners, &mut diagnostics);
    let discrepancies: Vec<Discrepancy> = find_discrepancies(&misowned, &key_owner_index, &mut diagnostics);
    defx!("{} discrepancies, {} diagnostics", discrepancies.len(), diagnostics.len());

    Ok(AuditReport {
        path: loglines.path().clone(),
        lines: loglines.len() as Count,
        users,
        key_owner_index,
        policy: policy.clone(),
        key_owners,
        misowned,
        discrepancies,
        diagnostics,
        linereader_summary: linereader.summary(),
    })
}
