// src/bin/hka.rs

//! Driver program _hka_ drives the [_hkalib_].
//!
//! Processes user-passed command-line arguments.
//! Then reads the one transcript passed, runs [`run_audit`] on it, and prints
//! the [`AuditReport`] to stdout and the remaining [`Diagnostic`s] to stderr.
//!
//! If passed CLI option `--summary`, a [`Summary`] of the audit is printed
//! to stderr.
//!
//! [_hkalib_]: hkalib
//! [`run_audit`]: hkalib::audit::run_audit
//! [`AuditReport`]: hkalib::audit::AuditReport
//! [`Diagnostic`s]: hkalib::data::diagnostic::Diagnostic
//! [`Summary`]: hkalib::readers::summary::Summary

#![allow(non_camel_case_types)]

use std::process::ExitCode;
use std::time::Instant;

use ::anyhow::Context;
use ::chrono::{DateTime, Local};
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;

use ::hkalib::audit::{run_audit, AuditReport, KeyOwnerPolicy};
use ::hkalib::common::{FPath, PATH_STDIN};
use ::hkalib::data::line::LogLines;
use ::hkalib::debug::printers::{e_err, e_wrn};
use ::hkalib::printer::printers::{write_diagnostics, write_report, ColorChoice, StandardStream};
use ::hkalib::printer::summary::write_summary;
use ::hkalib::readers::helpers::basename;
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{defn, defo, defx};

// --------------------
// command-line parsing

/// exit value when the transcript cannot be read or parsed
const EXIT_ERR: u8 = 1;

/// exit value for `--fail-on-misowned` when mis-owned keys are found
const EXIT_MISOWNED: u8 = 2;

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

const CLI_HELP_AFTER: &str = concatcp!(
    r#"
Recording a transcript:

  1. Record a terminal session of the HSM management utility.
  2. Run command "listUsers".
  3. For each listed user id, run command "findAllKeys {user_id} 0".
  4. Save the session to a local file. Be sure NOT to save the plain text
     login password.

A user is a "key owner" if the user name begins with "ko", or "releng"
(unless --no-releng is passed), or any --owner-prefix.
A key owner must own every non-public key listed for it. A key only shared
with a key owner is reported as mis-owned, along with the user that
actually owns it.

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "hka",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(HSM Key Audit)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the saved management utility session.
    /// Pass "-" to read the session from STDIN.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    path: String,

    /// Additional user name prefix of key owner users.
    /// May be passed more than once.
    #[clap(
        short = 'p',
        long = "owner-prefix",
        verbatim_doc_comment,
    )]
    owner_prefixes: Vec<String>,

    /// Do not treat "releng" users as key owners.
    /// Different mis-owned keys may be reported.
    #[clap(
        long = "no-releng",
        verbatim_doc_comment,
        default_value_t = false,
    )]
    no_releng: bool,

    /// Exit with value 2 if any mis-owned key is found.
    #[clap(
        long = "fail-on-misowned",
        verbatim_doc_comment,
        default_value_t = false,
    )]
    fail_on_misowned: bool,

    /// Do not print informational diagnostics, e.g. public keys and users
    /// without keys.
    #[clap(
        short = 'q',
        long = "quiet-info",
        verbatim_doc_comment,
        default_value_t = false,
    )]
    quiet_info: bool,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of the audit to stderr.
    #[clap(
        short,
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

/// Processed command-line arguments.
#[derive(Debug)]
struct CliOpts {
    path: FPath,
    policy: KeyOwnerPolicy,
    color_choice: ColorChoice,
    fail_on_misowned: bool,
    quiet_info: bool,
    summary: bool,
}

/// Process user-passed CLI argument strings into expected types.
fn cli_process_args() -> CliOpts {
    let args = CLI_Args::parse();

    defo!("args {:?}", args);

    let policy = KeyOwnerPolicy::with_prefixes(!args.no_releng, &args.owner_prefixes);
    defo!("policy {:?}", policy);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    CliOpts {
        path: args.path,
        policy,
        color_choice,
        fail_on_misowned: args.fail_on_misowned,
        quiet_info: args.quiet_info,
        summary: args.summary,
    }
}

/// Read and audit the transcript at `path`.
fn audit_path(
    path: &FPath,
    policy: &KeyOwnerPolicy,
) -> anyhow::Result<AuditReport> {
    defn!("({:?})", path);
    let display: &str = if path.as_str() == PATH_STDIN { "STDIN" } else { path.as_str() };
    let loglines = LogLines::from_path(path).with_context(|| format!("unable to read {}", display))?;
    if loglines.is_empty() {
        e_wrn!("{} has no lines", basename(path));
    }
    let report = run_audit(&loglines, policy).with_context(|| format!("unable to parse {}", display))?;
    defx!();

    Ok(report)
}

/// Process the user-passed command-line arguments.
/// Run the audit and print the results.
/// Determine a process return code.
pub fn main() -> ExitCode {
    let start_time = Instant::now();
    let started: DateTime<Local> = Local::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let opts: CliOpts = cli_process_args();

    let report: AuditReport = match audit_path(&opts.path, &opts.policy) {
        Ok(report) => report,
        Err(err) => {
            e_err!("{:#}", err);
            defx!("exit {}", EXIT_ERR);
            return ExitCode::from(EXIT_ERR);
        }
    };

    let mut stdout = StandardStream::stdout(opts.color_choice);
    if let Err(err) = write_report(&mut stdout, &report) {
        e_err!("printing report failed: {}", err);
        return ExitCode::from(EXIT_ERR);
    }
    let mut stderr = StandardStream::stderr(opts.color_choice);
    if let Err(err) = write_diagnostics(&mut stderr, &report.diagnostics, opts.quiet_info) {
        e_err!("printing diagnostics failed: {}", err);
        return ExitCode::from(EXIT_ERR);
    }
    if opts.summary {
        if let Err(err) = write_summary(&mut stderr, &report.summary(), &started, start_time.elapsed()) {
            e_err!("printing summary failed: {}", err);
            return ExitCode::from(EXIT_ERR);
        }
    }

    let exitcode = if opts.fail_on_misowned && !report.misowned.is_empty() {
        ExitCode::from(EXIT_MISOWNED)
    } else {
        ExitCode::SUCCESS
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
