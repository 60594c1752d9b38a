/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// This module is the single entry point for all input I/O in the `tracklet`
/// binary. `tracklet-core` never touches the filesystem; all reading happens
/// here.
///
/// Key behaviours:
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered with a `Read::take` cap so allocation is bounded.
/// - UTF-8 validation via `std::str::from_utf8` with byte-offset reporting.
/// - All I/O errors are converted to [`CliError`] variants with exit code 2.
use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Upper bound on input size, for files and stdin alike.
///
/// A track document is three integer arrays; 256 MiB of JSON is far beyond
/// any real detector readout and caps the allocation for hostile input.
pub const MAX_INPUT_BYTES: u64 = 256 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// For disk files the file length is checked against [`MAX_INPUT_BYTES`] via
/// `std::fs::metadata` before any bytes are read. For stdin a capped reader
/// (`Read::take`) is used so that the allocation is bounded.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for:
/// - file not found or permission denied
/// - input exceeding [`MAX_INPUT_BYTES`]
/// - any other I/O error
/// - invalid UTF-8 (includes byte offset of the first bad sequence)
pub fn read_input(source: &PathOrStdin) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path),
        PathOrStdin::Stdin => read_stdin(),
    }
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

/// Reads a disk file, enforcing the size limit and UTF-8 requirement.
fn read_file(path: &Path) -> Result<String, CliError> {
    // Size check via metadata, before any allocation happens.
    let file_size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => return Err(io_error_to_cli(&e, path)),
    };

    if file_size > MAX_INPUT_BYTES {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: MAX_INPUT_BYTES,
        });
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => return Err(io_error_to_cli(&e, path)),
    };

    bytes_to_string(&bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::InvalidData | _ => CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Stdin reading
// ---------------------------------------------------------------------------

/// Reads the entire stdin stream, capped at [`MAX_INPUT_BYTES`].
///
/// Uses `Read::take` so the buffer allocation is bounded; hitting the cap
/// exactly is treated as overflow (a document of exactly the cap size is
/// indistinguishable from a truncated larger one, and at 256 MiB the
/// distinction is academic).
fn read_stdin() -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let handle = stdin.lock();

    let mut limited = handle.take(MAX_INPUT_BYTES);
    let mut buf: Vec<u8> = Vec::new();

    limited
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == MAX_INPUT_BYTES {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: MAX_INPUT_BYTES,
        });
    }

    bytes_to_string(&buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

/// Converts a byte buffer to a `String`, returning a [`CliError`] with the
/// byte offset of the first invalid sequence on failure.
fn bytes_to_string(bytes: &[u8], source_label: &str) -> Result<String, CliError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(CliError::InvalidUtf8 {
            source: source_label.to_owned(),
            byte_offset: e.valid_up_to(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::io::Write as _;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn reads_a_disk_file() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"{\"sources\": [], \"targets\": []}")
            .expect("write temp file");
        let text = read_input(&PathOrStdin::Path(tmp.path().to_path_buf()))
            .expect("readable file should succeed");
        assert!(text.contains("sources"));
    }

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let err = read_input(&PathOrStdin::Path(PathBuf::from(
            "definitely-missing.tracks.json",
        )))
        .expect_err("missing file should fail");
        assert!(matches!(err, CliError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"ok\xff\xfe").expect("write temp file");
        let err = read_input(&PathOrStdin::Path(tmp.path().to_path_buf()))
            .expect_err("invalid UTF-8 should fail");
        match err {
            CliError::InvalidUtf8 { byte_offset, .. } => assert_eq!(byte_offset, 2),
            other => unreachable!("expected InvalidUtf8, got {other:?}"),
        }
    }
}
