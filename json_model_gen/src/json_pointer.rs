//! JSON Pointer (RFC 6901) locations inside the sample document.
//!
//! Every generated model remembers where its shape came from so naming
//! errors and log events can point back into the input.
//! Segments are `/`-separated, with `~` escaped as `~0` and `/` escaped as `~1`.

use std::fmt;

/// An owned JSON Pointer. The root document is the empty pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPointer(String);

impl JsonPointer {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Pointer to the member `key` of the object at `self`.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut path: String = String::with_capacity(self.0.len() + key.len() + 1);
        path.push_str(&self.0);
        path.push('/');
        for c in key.chars() {
            match c {
                '~' => path.push_str("~0"),
                '/' => path.push_str("~1"),
                other => path.push(other),
            }
        }
        Self(path)
    }

    /// Pointer to element `index` of the array at `self`.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}/{index}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<JsonPointer> for String {
    fn from(pointer: JsonPointer) -> Self {
        pointer.0
    }
}
