// GameLog - core/export.rs
//
// Plain-text export of console entries.
//
// Two formats:
//   - custom export: every entry, one `[time] [TAG] message` line each,
//     file truncated first so repeated exports are byte identical.
//   - capture: a header line plus the rows currently on screen, appended
//     to a running capture file.

use crate::core::model::{LogEntry, Severity};
use crate::util::error::ExportError;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write one line per entry. Returns the number of lines written.
pub fn write_lines<'a, I, W>(entries: I, mut writer: W) -> io::Result<usize>
where
    I: IntoIterator<Item = &'a LogEntry>,
    W: Write,
{
    let mut count = 0;
    for entry in entries {
        writeln!(writer, "{entry}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Overwrite `path` with every entry in append order.
pub fn export_to_file<'a, I>(entries: I, path: &Path) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let file = File::create(path).map_err(|e| ExportError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    let count = write_lines(entries, BufWriter::new(file)).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), entries = count, "Console exported");
    Ok(count)
}

/// Header line opening one capture block.
pub fn capture_header(title: &str, at: &str, min: Severity, rows: usize) -> String {
    format!(
        "--- {title} capture @ {at} (filter: {}, rows: {rows}) ---",
        min.label()
    )
}

/// Append one capture block (header + displayed rows) to `path`.
///
/// `shown` must be the rows as currently displayed, i.e. already filtered.
/// Returns the number of rows written, excluding the header.
pub fn append_capture<'a, I>(
    title: &str,
    at: &str,
    min: Severity,
    shown: I,
    path: &Path,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let rows: Vec<&LogEntry> = shown.into_iter().collect();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExportError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut writer = BufWriter::new(file);
    let map_write = |e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    writeln!(writer, "{}", capture_header(title, at, min, rows.len())).map_err(map_write)?;
    let count = write_lines(rows, writer).map_err(map_write)?;

    tracing::info!(path = %path.display(), rows = count, "Console view captured");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(time: &str, severity: Severity, message: &str) -> LogEntry {
        LogEntry::with_time(time, severity, message)
    }

    #[test]
    fn test_write_lines() {
        let entries = vec![
            make_entry("01:02:03.004", Severity::Info, "hello"),
            make_entry("01:02:03.005", Severity::Warning, "careful"),
        ];
        let mut buf = Vec::new();
        let count = write_lines(&entries, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "[01:02:03.004] [INFO] hello\n[01:02:03.005] [WARN] careful\n"
        );
    }

    #[test]
    fn test_write_lines_empty() {
        let mut buf = Vec::new();
        let count = write_lines(std::iter::empty::<&LogEntry>(), &mut buf).unwrap();
        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom_log.txt");
        std::fs::write(&path, "stale content that must disappear\n").unwrap();

        let entries = vec![make_entry("12:00:00.000", Severity::Error, "bad")];
        export_to_file(&entries, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[12:00:00.000] [ERROR] bad\n"
        );
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("custom_log.txt");
        let err = export_to_file(std::iter::empty::<&LogEntry>(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_capture_appends_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.txt");
        let entries = vec![make_entry("09:00:00.000", Severity::Error, "x")];

        append_capture("Game Log", "09:00:01.000", Severity::Error, &entries, &path).unwrap();
        append_capture("Game Log", "09:00:02.000", Severity::Error, &entries, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "--- Game Log capture @ 09:00:01.000 (filter: Error, rows: 1) ---"
        );
        assert_eq!(lines[1], "[09:00:00.000] [ERROR] x");
        assert!(lines[2].contains("09:00:02.000"));
    }
}
