use std::io::{self, Write};

use anyhow::Error;

use crate::commands::UnresolvedRings;
use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Hints for the first typed error found in the chain.
fn collect_hints(err: &Error) -> Vec<String> {
    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<silica_bridge::io::Error>() {
            return io_hints(io_err);
        }
        if let Some(connect_err) = cause.downcast_ref::<silica_bridge::ConnectError>() {
            return connect_hints(connect_err);
        }
        if let Some(unresolved) = cause.downcast_ref::<UnresolvedRings>() {
            return unresolved_hints(unresolved);
        }
    }
    Vec::new()
}

fn io_hints(err: &silica_bridge::io::Error) -> Vec<String> {
    use silica_bridge::io::{Error as IoError, Format};
    use std::io::ErrorKind;

    let mut hints = match err {
        IoError::Io { source } => match source.kind() {
            ErrorKind::NotFound => vec![
                "File or directory not found".into(),
                "Check the path spelling and ensure the file exists".into(),
            ],
            ErrorKind::PermissionDenied => vec![
                "Permission denied accessing the file".into(),
                "Check file permissions with `ls -la`".into(),
            ],
            ErrorKind::InvalidData => vec![
                "File is not valid UTF-8 text".into(),
                "Verify the file is not truncated or binary".into(),
            ],
            _ => vec!["Check file path, permissions, and disk space".into()],
        },

        IoError::Parse { format, line, .. } => {
            let mut hints = vec![format!(
                "Inspect the {} file around line {}",
                format, line
            )];
            match format {
                Format::Xyz => {
                    hints.push("XYZ records are `Si|O x y z` with finite coordinates".into());
                }
                Format::RingList => {
                    hints.push("Each ring line lists at least two distinct atom indices".into());
                }
                Format::Connectivity => {
                    hints.push("Bond lines hold exactly two indices: `si o`".into());
                }
                Format::Bridges => {}
            }
            hints
        }

        IoError::CountMismatch {
            format,
            declared,
            found,
        } => vec![
            format!(
                "The {} header says {} but the file holds {}",
                format, declared, found
            ),
            "Fix the count on the first line or restore the missing records".into(),
        ],
    };

    if err.is_format_error() {
        hints.push("Blank lines are skipped; every other line must be a full record".into());
    }
    hints
}

fn connect_hints(err: &silica_bridge::ConnectError) -> Vec<String> {
    use silica_bridge::ConnectError;

    match err {
        ConnectError::InvalidCutoff { .. } => vec![
            "DIST must be a positive number".into(),
            "Pass a bond length in Å, or a squared value with --squared".into(),
        ],
        ConnectError::ConfigParse(_) => vec![
            "Correction files use [[corrections]] tables with `si` and `o` keys".into(),
        ],
        ConnectError::CorrectionOutOfRange { .. } => vec![
            "Corrections are specific to one slab model".into(),
            "Check that --corrections matches this coordinate file".into(),
        ],
        ConnectError::RingTooShort { .. }
        | ConnectError::RepeatedRingAtom { .. }
        | ConnectError::RingAtomOutOfRange { .. } => {
            vec!["Check that the ring list belongs to this coordinate file".into()]
        }
        ConnectError::NoBridge { .. } => vec![
            "The cutoff may be too short, or a boundary correction is missing".into(),
        ],
        ConnectError::AmbiguousBridge { .. } => {
            vec!["The cutoff may be too long; try a smaller DIST".into()]
        }
    }
}

fn unresolved_hints(err: &UnresolvedRings) -> Vec<String> {
    let mut hints = vec![format!(
        "{} ring(s) were resolved and written; failed rings were skipped",
        err.total - err.failed
    )];
    hints.push("Run with -vvv to trace the bridge candidates of every edge".into());
    hints.push("Edges near the slab boundary usually need --corrections".into());
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use silica_bridge::io::{Error as IoError, Format};

    const BLANK_LINES: &str = "Blank lines are skipped; every other line must be a full record";

    #[test]
    fn format_errors_get_the_record_hint() {
        let parse: anyhow::Result<()> = Err(IoError::parse(Format::Xyz, 3, "bad"))
            .context("Failed to read coordinates");
        let hints = collect_hints(&parse.unwrap_err());
        assert!(hints[0].contains("line 3"));
        assert!(hints.iter().any(|h| h.contains("finite coordinates")));
        assert_eq!(hints.last().map(String::as_str), Some(BLANK_LINES));

        let missing = IoError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        let hints = collect_hints(&Error::new(missing));
        assert!(!hints.iter().any(|h| h == BLANK_LINES));
    }

    #[test]
    fn unresolved_rings_hint_counts_written_rings() {
        let hints = collect_hints(&Error::new(UnresolvedRings { failed: 1, total: 3 }));
        assert!(hints[0].starts_with("2 ring(s) were resolved"));
    }
}
