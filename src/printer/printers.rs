// src/printer/printers.rs

//! Printing of an [`AuditReport`] and its [`Diagnostic`s] with text
//! effects (color, bold).
//!
//! Functions write to any [`WriteColor`] so tests may print to a
//! [`termcolor::Buffer`].
//!
//! [`AuditReport`]: crate::audit::AuditReport
//! [`Diagnostic`s]: crate::data::diagnostic::Diagnostic
//! [`WriteColor`]: termcolor::WriteColor

use crate::audit::{AuditReport, Discrepancy};
use crate::data::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticLevel, Diagnostics};
use crate::debug::printers::de_err;

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for printing user-facing warning messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_WARNING: Color = Color::Yellow;

/// [`Color`] for printing informational messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_INFO: Color = Color::Cyan;

/// Indentation of the second line of a discrepancy.
const INDENT_EXPECTED: &str = "   ";

/// Indentation of the errors printed under a `Checking` line.
const INDENT_CHECK: &str = "  ";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The [`Color`] of a [`DiagnosticLevel`].
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const fn level_color(level: DiagnosticLevel) -> Color {
    match level {
        DiagnosticLevel::Info => COLOR_INFO,
        DiagnosticLevel::Warning => COLOR_WARNING,
        DiagnosticLevel::Error => COLOR_ERROR,
    }
}

/// Write `value` in `color_spec` then reset the color.
pub fn write_spec<W: WriteColor>(
    out: &mut W,
    color_spec: &ColorSpec,
    value: &str,
) -> Result<()> {
    if let Err(err) = out.set_color(color_spec) {
        de_err!("write_spec: out.set_color({:?}) returned error {}", color_spec, err);
        return Err(err);
    }
    if let Err(err) = out.write_all(value.as_bytes()) {
        de_err!("write_spec: out.write_all(…) returned error {}", err);
        return Err(err);
    }
    if let Err(err) = out.reset() {
        de_err!("write_spec: out.reset() returned error {}", err);
        return Err(err);
    }

    Ok(())
}

/// Write `value` in foreground `color`.
pub fn write_colored<W: WriteColor>(
    out: &mut W,
    color: Color,
    value: &str,
) -> Result<()> {
    write_spec(out, ColorSpec::new().set_fg(Some(color)), value)
}

/// Write `value` in bold.
pub fn write_bold<W: WriteColor>(
    out: &mut W,
    value: &str,
) -> Result<()> {
    write_spec(out, ColorSpec::new().set_bold(true), value)
}

/// Write one diagnostic as a line, e.g. `WARNING: multiple owners for key 7`.
/// The level is colored.
pub fn write_diagnostic<W: WriteColor>(
    out: &mut W,
    diagnostic: &Diagnostic,
) -> Result<()> {
    write_colored(out, level_color(diagnostic.level), &format!("{}:", diagnostic.level))?;
    writeln!(out, " {}", diagnostic.message)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// report printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Write the two or more lines describing one [`Discrepancy`]:
///
/// ```text
/// user 2 (bob) owns key 30
///    should be owned by user 1 (ko_alice)
/// ```
pub fn write_discrepancy<W: WriteColor>(
    out: &mut W,
    discrepancy: &Discrepancy,
) -> Result<()> {
    let owner = &discrepancy.actual_owner;
    let owner_s = format!("user {} ({})", owner.user_id, owner.user_name);
    if owner.is_unknown() {
        write_colored(out, COLOR_ERROR, &owner_s)?;
    } else {
        write_bold(out, &owner_s)?;
    }
    writeln!(out, " owns key {}", discrepancy.key_id)?;
    for expected in discrepancy.expected_owners.iter() {
        write!(out, "{}should be owned by ", INDENT_EXPECTED)?;
        write_bold(out, &format!("user {} ({})", expected.user_id, expected.user_name))?;
        writeln!(out)?;
    }

    Ok(())
}

/// Write the report of an audit: progress counts, the policy, each checked
/// key owner role user with its mis-owned keys, and the discrepancies.
///
/// Diagnostics other than [`DiagnosticKind::MisOwnedKey`] are not written;
/// see [`write_diagnostics`].
pub fn write_report<W: WriteColor>(
    out: &mut W,
    report: &AuditReport,
) -> Result<()> {
    writeln!(out, "Processing {} lines", report.lines)?;
    writeln!(out, "found {} users", report.users.len())?;
    write_bold(out, "Key owner prefixes:")?;
    writeln!(out, " {}", report.policy.describe())?;

    for user_id in report.key_owners.iter() {
        let user_name: &str = match report.users.get(user_id) {
            Some(entry) => entry.user.user_name.as_str(),
            None => continue,
        };
        writeln!(out, "Checking {} (id:{})", user_name, user_id)?;
        for diagnostic in report
            .diagnostics
            .of_kind(DiagnosticKind::MisOwnedKey)
            .filter(|d| d.user_id == Some(*user_id))
        {
            write!(out, "{}", INDENT_CHECK)?;
            write_diagnostic(out, diagnostic)?;
        }
    }

    let count_s = format!("{} mis-owned keys", report.misowned.len());
    if report.misowned.is_empty() {
        write_bold(out, &count_s)?;
    } else {
        write_colored(out, COLOR_ERROR, &count_s)?;
    }
    writeln!(out)?;

    for discrepancy in report.discrepancies.iter() {
        write_discrepancy(out, discrepancy)?;
    }
    out.flush()?;

    Ok(())
}

/// Write the diagnostics not already part of [`write_report`].
///
/// If `quiet_info` then `Info` level diagnostics are not written.
pub fn write_diagnostics<W: WriteColor>(
    out: &mut W,
    diagnostics: &Diagnostics,
    quiet_info: bool,
) -> Result<()> {
    for diagnostic in diagnostics.iter() {
        match diagnostic.kind {
            DiagnosticKind::MisOwnedKey | DiagnosticKind::PolicyChoice => continue,
            _ => {}
        }
        if quiet_info && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }
        write_diagnostic(out, diagnostic)?;
    }
    out.flush()?;

    Ok(())
}
