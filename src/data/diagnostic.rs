// src/data/diagnostic.rs

//! Implements [`Diagnostic`], a non-fatal observation made during an audit.
//!
//! Diagnostics are collected in order into [`Diagnostics`] and returned with
//! the audit results. Rendering them is left to the caller.

use crate::common::{KeyId, UserId};

use std::fmt;

/// What the diagnostic is about.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DiagnosticKind {
    /// Records which user name prefixes were treated as key owners.
    PolicyChoice,
    /// `findAllKeys` found no keys for a user.
    NoKeysForUser,
    /// A key record has no flags.
    PublicKey,
    /// More than one user holds the owner flag of a key.
    MultipleOwners,
    /// A key owner role user holds a key without the owner flag.
    MisOwnedKey,
    /// No user holds the owner flag of a key.
    UnownedKey,
    /// A mis-owned key is expected to be owned by more than one user.
    ConflictingExpectedOwners,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "INFO"),
            DiagnosticLevel::Warning => write!(f, "WARNING"),
            DiagnosticLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub level: DiagnosticLevel,
    pub message: String,
    /// user the diagnostic is about, if any
    pub user_id: Option<UserId>,
    /// key the diagnostic is about, if any
    pub key_id: Option<KeyId>,
}

impl fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Ordered collection of [`Diagnostic`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    pub fn push(
        &mut self,
        kind: DiagnosticKind,
        level: DiagnosticLevel,
        message: String,
        user_id: Option<UserId>,
        key_id: Option<&KeyId>,
    ) {
        self.diagnostics.push(Diagnostic {
            kind,
            level,
            message,
            user_id,
            key_id: key_id.cloned(),
        });
    }

    pub fn info(
        &mut self,
        kind: DiagnosticKind,
        message: String,
        user_id: Option<UserId>,
        key_id: Option<&KeyId>,
    ) {
        self.push(kind, DiagnosticLevel::Info, message, user_id, key_id)
    }

    pub fn warning(
        &mut self,
        kind: DiagnosticKind,
        message: String,
        user_id: Option<UserId>,
        key_id: Option<&KeyId>,
    ) {
        self.push(kind, DiagnosticLevel::Warning, message, user_id, key_id)
    }

    pub fn error(
        &mut self,
        kind: DiagnosticKind,
        message: String,
        user_id: Option<UserId>,
        key_id: Option<&KeyId>,
    ) {
        self.push(kind, DiagnosticLevel::Error, message, user_id, key_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All diagnostics of `kind`, in the order they were pushed.
    pub fn of_kind(
        &self,
        kind: DiagnosticKind,
    ) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.kind == kind)
    }

    pub fn count_kind(
        &self,
        kind: DiagnosticKind,
    ) -> usize {
        self.of_kind(kind).count()
    }

    pub fn count_level(
        &self,
        level: DiagnosticLevel,
    ) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == level)
            .count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
