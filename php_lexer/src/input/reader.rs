//! Source reader with compile-time limits and global logging integration

use crate::config::compile_time::input::{LARGE_SOURCE_THRESHOLD, MAX_LINE_COUNT, MAX_SOURCE_SIZE};
use crate::config::runtime::InputPreferences;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Errors raised while loading source text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Source not found: {path}")]
    SourceNotFound { path: String },

    #[error("Invalid file extension for {path}: expected .php, found {extension:?}")]
    InvalidExtension {
        path: String,
        extension: Option<String>,
    },

    #[error("Source too large: {size} bytes (max: {max_size})")]
    SourceTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in {origin}")]
    InvalidEncoding { origin: String },

    #[error("Source exceeds maximum line count: {lines} (max: {max_lines})")]
    TooManyLines { lines: usize, max_lines: usize },

    #[error("I/O error reading {origin}: {message}")]
    Io { origin: String, message: String },

    #[error("Inline source has no text to read; pass the text to read_inline")]
    InlineWithoutText,
}

impl InputError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            InputError::SourceNotFound { .. } => codes::input::SOURCE_NOT_FOUND,
            InputError::InvalidExtension { .. } => codes::input::INVALID_EXTENSION,
            InputError::SourceTooLarge { .. } => codes::input::SOURCE_TOO_LARGE,
            InputError::PermissionDenied { .. } => codes::input::PERMISSION_DENIED,
            InputError::InvalidEncoding { .. } => codes::input::INVALID_ENCODING,
            InputError::TooManyLines { .. } => codes::input::TOO_MANY_LINES,
            InputError::Io { .. } => codes::input::IO_ERROR,
            InputError::InlineWithoutText => codes::input::INLINE_WITHOUT_TEXT,
        }
    }

    fn from_io(error: &io::Error, origin: &SourceOrigin) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => InputError::SourceNotFound {
                path: origin.to_string(),
            },
            io::ErrorKind::PermissionDenied => InputError::PermissionDenied {
                path: origin.to_string(),
            },
            io::ErrorKind::InvalidData => InputError::InvalidEncoding {
                origin: origin.to_string(),
            },
            _ => InputError::Io {
                origin: origin.to_string(),
                message: error.to_string(),
            },
        }
    }
}

/// Where source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    File(PathBuf),
    Stdin,
    Inline,
}

impl SourceOrigin {
    /// `-` selects standard input, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            SourceOrigin::Stdin
        } else {
            SourceOrigin::File(PathBuf::from(arg))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SourceOrigin::File(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrigin::File(path) => write!(f, "{}", path.display()),
            SourceOrigin::Stdin => f.write_str("<stdin>"),
            SourceOrigin::Inline => f.write_str("<inline>"),
        }
    }
}

/// Loaded source text with basic metrics
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub text: String,
    pub origin: SourceOrigin,
    /// Size in bytes
    pub size: u64,
    pub line_count: usize,
}

impl SourceInput {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_large(&self) -> bool {
        self.size > LARGE_SOURCE_THRESHOLD
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Loads source text from a file, stdin, or an inline string
#[derive(Debug, Clone)]
pub struct SourceReader {
    pub require_php_extension: bool,
    pub log_input_metrics: bool,
}

impl SourceReader {
    pub fn new() -> Self {
        Self {
            require_php_extension: false,
            log_input_metrics: true,
        }
    }

    pub fn from_preferences(prefs: &InputPreferences) -> Self {
        Self {
            require_php_extension: prefs.require_php_extension,
            log_input_metrics: prefs.log_input_metrics,
        }
    }

    pub fn with_php_extension_required(mut self, required: bool) -> Self {
        self.require_php_extension = required;
        self
    }

    /// Load from a file or stdin. An inline origin carries no text of its
    /// own and is rejected; use [`SourceReader::read_inline`] for it.
    pub fn read(&self, origin: SourceOrigin) -> Result<SourceInput, InputError> {
        match origin {
            SourceOrigin::File(path) => self.read_file(&path),
            SourceOrigin::Stdin => self.read_stream(io::stdin().lock(), SourceOrigin::Stdin),
            SourceOrigin::Inline => Err(self.fail(InputError::InlineWithoutText)),
        }
    }

    pub fn read_file(&self, path: &Path) -> Result<SourceInput, InputError> {
        let origin = SourceOrigin::File(path.to_path_buf());
        log_debug!("Reading source file", "path" => origin);

        self.check_extension(path)?;

        let metadata = fs::metadata(path).map_err(|e| self.fail(InputError::from_io(&e, &origin)))?;
        if !metadata.is_file() {
            return Err(self.fail(InputError::Io {
                origin: origin.to_string(),
                message: "not a regular file".to_string(),
            }));
        }
        check_size(metadata.len()).map_err(|e| self.fail(e))?;

        let bytes = fs::read(path).map_err(|e| self.fail(InputError::from_io(&e, &origin)))?;
        self.finish(bytes, origin)
    }

    /// Read a stream to the end, stopping one byte past the size limit
    pub fn read_stream<R: Read>(&self, reader: R, origin: SourceOrigin) -> Result<SourceInput, InputError> {
        log_debug!("Reading source stream", "origin" => origin);

        let mut bytes = Vec::new();
        reader
            .take(MAX_SOURCE_SIZE + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| self.fail(InputError::from_io(&e, &origin)))?;

        self.finish(bytes, origin)
    }

    /// Wrap text given directly on the command line
    pub fn read_inline(&self, text: String) -> Result<SourceInput, InputError> {
        self.finish(text.into_bytes(), SourceOrigin::Inline)
    }

    fn check_extension(&self, path: &Path) -> Result<(), InputError> {
        if !self.require_php_extension {
            return Ok(());
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        if extension.as_deref() == Some("php") {
            Ok(())
        } else {
            Err(self.fail(InputError::InvalidExtension {
                path: path.display().to_string(),
                extension,
            }))
        }
    }

    fn finish(&self, bytes: Vec<u8>, origin: SourceOrigin) -> Result<SourceInput, InputError> {
        let size = bytes.len() as u64;
        check_size(size).map_err(|e| self.fail(e))?;

        let text = String::from_utf8(bytes).map_err(|_| {
            self.fail(InputError::InvalidEncoding {
                origin: origin.to_string(),
            })
        })?;

        let line_count = text.lines().count();
        if line_count > MAX_LINE_COUNT {
            return Err(self.fail(InputError::TooManyLines {
                lines: line_count,
                max_lines: MAX_LINE_COUNT,
            }));
        }

        let input = SourceInput {
            text,
            origin,
            size,
            line_count,
        };

        if self.log_input_metrics {
            log_success!(codes::success::SOURCE_LOADED, "Source loaded",
                "origin" => input.origin,
                "size_bytes" => input.size,
                "chars" => input.char_count(),
                "lines" => input.line_count,
                "is_large" => input.is_large()
            );
        }

        Ok(input)
    }

    fn fail(&self, error: InputError) -> InputError {
        log_error!(error.error_code(), &error.to_string());
        error
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}

fn check_size(size: u64) -> Result<(), InputError> {
    if size > MAX_SOURCE_SIZE {
        Err(InputError::SourceTooLarge {
            size,
            max_size: MAX_SOURCE_SIZE,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes::Category;
    use assert_matches::assert_matches;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn temp_php(contents: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".php")
            .tempfile()
            .unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_reads_file() {
        let file = temp_php(b"<?php\necho $x;\n?>\n");
        let input = SourceReader::new().read_file(file.path()).unwrap();

        assert_eq!(input.text, "<?php\necho $x;\n?>\n");
        assert_eq!(input.size, 18);
        assert_eq!(input.line_count, 3);
        assert_eq!(input.origin.path(), Some(file.path()));
        assert!(!input.is_large());
    }

    #[test]
    fn test_empty_file_is_accepted() {
        let file = temp_php(b"");
        let input = SourceReader::new().read_file(file.path()).unwrap();
        assert!(input.text.is_empty());
        assert!(input.is_blank());
        assert_eq!(input.line_count, 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.php");
        let err = SourceReader::new().read_file(&missing).unwrap_err();

        assert_matches!(err, InputError::SourceNotFound { .. });
        assert_eq!(err.error_code(), codes::input::SOURCE_NOT_FOUND);
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceReader::new().read_file(dir.path()).unwrap_err();
        assert_matches!(err, InputError::Io { .. });
    }

    #[test]
    fn test_invalid_utf8() {
        let file = temp_php(&[0x3c, 0x3f, 0xff, 0xfe]);
        let err = SourceReader::new().read_file(file.path()).unwrap_err();
        assert_matches!(err, InputError::InvalidEncoding { .. });
    }

    #[test]
    fn test_extension_requirement() {
        let mut txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        txt.write_all(b"echo").unwrap();

        let relaxed = SourceReader::new();
        assert!(relaxed.read_file(txt.path()).is_ok());

        let strict = SourceReader::new().with_php_extension_required(true);
        assert_matches!(
            strict.read_file(txt.path()),
            Err(InputError::InvalidExtension { extension: Some(ext), .. }) if ext == "txt"
        );

        let php = temp_php(b"echo");
        assert!(strict.read_file(php.path()).is_ok());
    }

    #[test]
    fn test_stream_size_limit() {
        let oversized = vec![b'a'; (MAX_SOURCE_SIZE + 10) as usize];
        let err = SourceReader::new()
            .read_stream(Cursor::new(oversized), SourceOrigin::Stdin)
            .unwrap_err();

        assert_matches!(err, InputError::SourceTooLarge { size, max_size }
            if size == MAX_SOURCE_SIZE + 1 && max_size == MAX_SOURCE_SIZE);
    }

    #[test]
    fn test_line_limit() {
        let text = "x\n".repeat(MAX_LINE_COUNT + 1);
        if text.len() as u64 > MAX_SOURCE_SIZE {
            return;
        }
        let err = SourceReader::new().read_inline(text).unwrap_err();
        assert_matches!(err, InputError::TooManyLines { lines, .. } if lines == MAX_LINE_COUNT + 1);
    }

    #[test]
    fn test_inline_and_stream() {
        let reader = SourceReader::new();

        let inline = reader.read_inline("<?php echo 1; ?>".to_string()).unwrap();
        assert_eq!(inline.origin, SourceOrigin::Inline);
        assert_eq!(inline.line_count, 1);

        let streamed = reader
            .read_stream(Cursor::new("a\nb".as_bytes()), SourceOrigin::Stdin)
            .unwrap();
        assert_eq!(streamed.text, "a\nb");
        assert_eq!(streamed.origin.to_string(), "<stdin>");
    }

    #[test]
    fn test_origin_from_arg() {
        assert_eq!(SourceOrigin::from_arg("-"), SourceOrigin::Stdin);
        assert_eq!(
            SourceOrigin::from_arg("index.php"),
            SourceOrigin::File(PathBuf::from("index.php"))
        );
        assert_eq!(SourceOrigin::Inline.to_string(), "<inline>");
    }

    #[test]
    fn test_error_metadata_lookup() {
        let err = InputError::SourceTooLarge {
            size: 10,
            max_size: 5,
        };
        assert_eq!(err.error_code().category(), Category::Input);
        assert!(err.error_code().requires_halt());
    }

    #[test]
    fn test_read_rejects_inline_origin() {
        let err = SourceReader::new().read(SourceOrigin::Inline).unwrap_err();

        assert_matches!(err, InputError::InlineWithoutText);
        assert_eq!(err.error_code(), codes::input::INLINE_WITHOUT_TEXT);
        assert!(err.error_code().requires_halt());
    }

    #[test]
    fn test_char_count_differs_from_size() {
        let input = SourceReader::new().read_inline("¡é!".to_string()).unwrap();
        assert_eq!(input.size, 5);
        assert_eq!(input.char_count(), 3);
    }
}
