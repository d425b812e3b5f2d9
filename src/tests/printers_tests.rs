// src/tests/printers_tests.rs

//! tests for `src/printer/printers.rs`

#![allow(non_snake_case)]

use crate::audit::{run_audit, AuditReport, Discrepancy, ExpectedOwner, KeyOwnerPolicy};
use crate::common::KeyId;
use crate::data::diagnostic::{DiagnosticKind, DiagnosticLevel, Diagnostics};
use crate::data::line::LogLines;
use crate::data::user::User;
use crate::printer::printers::{
    level_color,
    write_bold,
    write_colored,
    write_diagnostics,
    write_discrepancy,
    write_report,
    Color,
    COLOR_ERROR,
    COLOR_INFO,
    COLOR_WARNING,
};
use crate::tests::common::{loglines_basic, transcript};

use ::termcolor::Buffer;
use ::test_case::test_case;

/// Return the text written to a `Buffer`.
fn buffer_to_string(buffer: &Buffer) -> String {
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

fn report_basic(include_releng: bool) -> AuditReport {
    run_audit(&loglines_basic(), &KeyOwnerPolicy::new(include_releng)).unwrap()
}

#[test_case(DiagnosticLevel::Info, COLOR_INFO)]
#[test_case(DiagnosticLevel::Warning, COLOR_WARNING)]
#[test_case(DiagnosticLevel::Error, COLOR_ERROR)]
fn test_level_color(
    level: DiagnosticLevel,
    expected: Color,
) {
    assert_eq!(level_color(level), expected);
}

#[test]
fn test_write_colored_no_color() {
    let mut buffer = Buffer::no_color();
    write_colored(&mut buffer, Color::Red, "red").unwrap();
    write_bold(&mut buffer, " bold").unwrap();
    assert_eq!(buffer_to_string(&buffer), "red bold");
}

#[test]
fn test_write_colored_ansi() {
    let mut buffer = Buffer::ansi();
    write_colored(&mut buffer, Color::Red, "red").unwrap();
    let s = buffer_to_string(&buffer);
    assert!(s.contains("red"), "{:?}", s);
    assert!(s.starts_with('\x1B'), "{:?}", s);
    assert_ne!(s, "red");
}

#[test]
fn test_write_discrepancy() {
    let discrepancy = Discrepancy {
        key_id: KeyId::from("30"),
        actual_owner: User::new(2, "CU", "bob"),
        expected_owners: vec![
            ExpectedOwner {
                user_id: 1,
                user_name: String::from("ko_alice"),
            },
            ExpectedOwner {
                user_id: 5,
                user_name: String::from("ko_eve"),
            },
        ],
    };
    let mut buffer = Buffer::no_color();
    write_discrepancy(&mut buffer, &discrepancy).unwrap();
    assert_eq!(
        buffer_to_string(&buffer),
        "\
user 2 (bob) owns key 30
   should be owned by user 1 (ko_alice)
   should be owned by user 5 (ko_eve)
"
    );
}

#[test]
fn test_write_report_with_releng() {
    let report = report_basic(true);
    let mut buffer = Buffer::no_color();
    write_report(&mut buffer, &report).unwrap();
    let expected = format!(
        "\
Processing {} lines
found 4 users
Key owner prefixes: ko, releng (include releng: yes)
Checking ko_alice (id:2)
  ERROR: ko_alice doesn't own 30
Checking releng_ci (id:4)
  ERROR: releng_ci doesn't own 40
2 mis-owned keys
user 3 (bob) owns key 30
   should be owned by user 2 (ko_alice)
user -1 (<unknown>) owns key 40
   should be owned by user 4 (releng_ci)
",
        report.lines
    );
    assert_eq!(buffer_to_string(&buffer), expected);
}

#[test]
fn test_write_report_without_releng() {
    let report = report_basic(false);
    let mut buffer = Buffer::no_color();
    write_report(&mut buffer, &report).unwrap();
    let s = buffer_to_string(&buffer);
    assert!(s.contains("Key owner prefixes: ko (include releng: no)\n"), "{}", s);
    assert!(!s.contains("releng_ci"), "{}", s);
    assert!(s.contains("\n1 mis-owned keys\n"), "{}", s);
}

#[test_case(false, "\
INFO: no keys for user 1 (admin)
INFO: no flags for key 262148 of user 2
ERROR: no one owns key 40
"; "all")]
#[test_case(true, "ERROR: no one owns key 40\n"; "quiet info")]
fn test_write_diagnostics(
    quiet_info: bool,
    expected: &str,
) {
    let report = report_basic(true);
    let mut buffer = Buffer::no_color();
    write_diagnostics(&mut buffer, &report.diagnostics, quiet_info).unwrap();
    assert_eq!(buffer_to_string(&buffer), expected);
}

#[test]
fn test_write_diagnostics_empty() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.info(DiagnosticKind::PolicyChoice, String::from("key owner prefixes: ko"), None, None);
    let mut buffer = Buffer::no_color();
    write_diagnostics(&mut buffer, &diagnostics, false).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn test_write_report_ko_alice_bob() {
    let text = transcript(
        &[(1, "CU", "ko_alice"), (2, "CU", "bob")],
        &[(1, 3, "10(o),20,30(s)"), (2, 1, "30(o)")],
    );
    let report = run_audit(&LogLines::from_text("alice_bob", &text), &KeyOwnerPolicy::default()).unwrap();
    let mut buffer = Buffer::no_color();
    write_report(&mut buffer, &report).unwrap();
    let s = buffer_to_string(&buffer);
    assert!(
        s.ends_with("1 mis-owned keys\nuser 2 (bob) owns key 30\n   should be owned by user 1 (ko_alice)\n"),
        "{}",
        s
    );
}
