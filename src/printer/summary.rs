// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `hka.rs`.

use crate::common::Count;
use crate::printer::printers::{
    write_bold,
    write_colored,
    Color,
    WriteColor,
    COLOR_ERROR,
    COLOR_WARNING,
};
use crate::readers::summary::Summary;

use std::io::{Result, Write};
use std::time::Duration;

use ::chrono::{DateTime, Local};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::unicode_width::UnicodeWidthStr;

/// For printing various levels of indentation.
const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";

/// datetime format for printing of datetime
const DATETIMEFMT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Write one `label: value` row, labels padded to `width` columns.
fn write_row<W: WriteColor>(
    out: &mut W,
    label: &str,
    width: usize,
    value: &str,
) -> Result<()> {
    let pad: usize = width.saturating_sub(label.width());
    writeln!(out, "{}{}:{} {}", OPT_SUMMARY_PRINT_INDENT1, label, " ".repeat(pad), value)
}

/// Write a [`Summary`] of one audit, e.g. to stderr.
///
/// `started` is when the program started, `elapsed` how long it ran.
pub fn write_summary<W: WriteColor>(
    out: &mut W,
    summary: &Summary,
    started: &DateTime<Local>,
    elapsed: Duration,
) -> Result<()> {
    defñ!("{:?}", summary);
    write_bold(out, "Summary:")?;
    writeln!(out)?;

    let rows: Vec<(&str, String)> = vec![
        ("Path", summary.path.clone()),
        ("Started", started.format(DATETIMEFMT).to_string()),
        ("Elapsed", format!("{:?}", elapsed)),
        ("Lines", summary.linereader.linereader_lines.to_string()),
        ("Lines read", summary.linereader.linereader_lines_read.to_string()),
        ("Lines scanned", summary.linereader.linereader_lines_scanned.to_string()),
        ("Cursor resets", summary.linereader.linereader_resets.to_string()),
        ("Users", summary.users.to_string()),
        ("Users with keys", summary.users_with_keys.to_string()),
        (
            "Key records",
            format!(
                "{} (owned {}, shared {}, public {})",
                summary.key_records,
                summary.key_records_owned,
                summary.key_records_shared,
                summary.key_records_public,
            ),
        ),
        ("Owned keys", summary.keys_indexed.to_string()),
        ("Key owners checked", summary.key_owners_checked.to_string()),
    ];
    let width: usize = rows
        .iter()
        .map(|(label, _)| label.width())
        .chain(["Mis-owned keys".width(), "Diagnostics".width()])
        .max()
        .unwrap_or(0);
    for (label, value) in rows.iter() {
        write_row(out, label, width, value)?;
    }

    let misowned_s: String = summary.keys_misowned.to_string();
    write!(out, "{}Mis-owned keys:{} ", OPT_SUMMARY_PRINT_INDENT1, " ".repeat(width - "Mis-owned keys".width()))?;
    if summary.keys_misowned > 0 {
        write_colored(out, COLOR_ERROR, &misowned_s)?;
    } else {
        write!(out, "{}", misowned_s)?;
    }
    writeln!(out)?;

    write!(out, "{}Diagnostics:{} ", OPT_SUMMARY_PRINT_INDENT1, " ".repeat(width - "Diagnostics".width()))?;
    write!(out, "info {}, ", summary.diagnostics_info)?;
    write_count(out, "warning", summary.diagnostics_warning, COLOR_WARNING)?;
    write!(out, ", ")?;
    write_count(out, "error", summary.diagnostics_error, COLOR_ERROR)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write `"{name} {count}"`, the count colored if it is not zero.
fn write_count<W: WriteColor>(
    out: &mut W,
    name: &str,
    count: Count,
    color: Color,
) -> Result<()> {
    write!(out, "{} ", name)?;
    if count > 0 {
        write_colored(out, color, &count.to_string())
    } else {
        write!(out, "{}", count)
    }
}
