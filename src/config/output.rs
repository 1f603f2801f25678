//! Output configuration.

/// How the finished report is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit a single JSON document instead of the table
    pub json: bool,

    /// Colour the table border
    pub color: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}
