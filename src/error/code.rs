/// Error codes with category prefix
///
/// Categories:
/// - VAL: Input validation errors
/// - MDL: Model / host element errors
/// - CFG: Configuration and message catalog errors
/// - IO: File system operations
/// - UI: User interaction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,
    /// Invalid splitting pattern
    Val002,

    // Model errors (MDL001-MDL099)
    /// Element not found
    Mdl001,
    /// Invalid model snapshot
    Mdl002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // I/O errors (IO001-IO099)
    /// File operation failed
    Io001,

    // UI errors (UI001-UI099)
    /// Prompt failed
    Ui001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "VAL001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Mdl001 => "MDL001",
            ErrorCode::Mdl002 => "MDL002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Ui001 => "UI001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "A required argument was empty or malformed",
            ErrorCode::Val002 => "The splitting pattern is not a valid regular expression",
            ErrorCode::Mdl001 => "The host could not resolve an element identifier",
            ErrorCode::Mdl002 => "The model snapshot is malformed",
            ErrorCode::Cfg001 => "The configuration or message catalog has an invalid format",
            ErrorCode::Io001 => "A file could not be read or written",
            ErrorCode::Ui001 => "The user prompt could not be completed",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'elfilter --help' for usage information",
            ErrorCode::Val002 => "1. Check the --pattern value\n2. Remove the pattern setting to use the default delimiters",
            ErrorCode::Mdl001 => "1. Verify the element still exists in the model\n2. Reload the model snapshot",
            ErrorCode::Mdl002 => "1. Check the model file is valid JSON\n2. Make sure every element id is unique",
            ErrorCode::Cfg001 => "1. Check the configuration file syntax\n2. Compare with the documented keys\n3. Delete the file to fall back to defaults",
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check file permissions",
            ErrorCode::Ui001 => "1. Run in an interactive terminal\n2. Pass --query and --yes/--no for non-interactive use",
        }
    }
}
