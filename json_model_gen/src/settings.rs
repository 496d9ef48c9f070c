//! Settings for model generation.

/// Indentation width used when no other width is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Settings that control model generation behavior.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    /// When true, non-empty array fields are typed by sampling their first
    /// element: scalar elements become a homogeneous list, object elements
    /// get their own nested model. Later elements are assumed to match.
    ///
    /// **Default: false.** Array fields are passed through as raw JSON values.
    pub inspect_arrays: bool,

    /// Number of spaces per indentation level in the rendered output.
    pub indent_width: usize,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            inspect_arrays: false,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
