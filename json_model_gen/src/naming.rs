//! Type names for nested models.
//!
//! A nested model is named after its parent model plus the field key with
//! its first character uppercased: `Person` + `address` -> `PersonAddress`.
//! Names are issued through a [`NameRegistry`] that rejects a name derived
//! twice in the same run instead of emitting two declarations with one name.

use std::collections::BTreeMap;

use crate::error::JsonModelGenError;
use crate::json_pointer::JsonPointer;

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Derive the type name for the field `key` of the model `parent`.
///
/// # Errors
///
/// Returns `JsonModelGenError::InvalidFieldKey` when `key` is empty.
pub fn build_class_name(
    parent: &str,
    key: &str,
    location: &JsonPointer,
) -> Result<String, JsonModelGenError> {
    let mut chars: std::str::Chars<'_> = key.chars();
    let Some(first) = chars.next() else {
        return Err(JsonModelGenError::InvalidFieldKey {
            path: location.to_string(),
            key: key.to_string(),
            reason: "key is empty",
        });
    };
    let mut name: String = String::with_capacity(parent.len() + key.len());
    name.push_str(parent);
    name.extend(first.to_uppercase());
    name.push_str(chars.as_str());
    Ok(name)
}

/// Reject field keys that cannot be written on a single emitted line.
///
/// # Errors
///
/// Returns `JsonModelGenError::InvalidFieldKey` when `key` contains a control
/// character such as a newline or tab.
pub fn check_field_key(key: &str, location: &JsonPointer) -> Result<(), JsonModelGenError> {
    if key.chars().any(char::is_control) {
        return Err(JsonModelGenError::InvalidFieldKey {
            path: location.to_string(),
            key: key.to_string(),
            reason: "key contains a control character",
        });
    }
    Ok(())
}

/// Every type name issued during one generation run.
pub struct NameRegistry {
    issued: BTreeMap<String, JsonPointer>,
    identifier: regress::Regex,
}

impl NameRegistry {
    /// # Errors
    ///
    /// Returns `JsonModelGenError::GenericError` if the identifier pattern
    /// fails to compile.
    pub fn new() -> Result<Self, JsonModelGenError> {
        let identifier: regress::Regex = regress::Regex::new(IDENTIFIER_PATTERN)
            .map_err(|e| JsonModelGenError::GenericError(format!("identifier pattern: {e}")))?;
        Ok(Self {
            issued: BTreeMap::new(),
            identifier,
        })
    }

    fn is_identifier(&self, name: &str) -> bool {
        self.identifier.find(name).is_some()
    }

    /// Register the root model's name.
    ///
    /// # Errors
    ///
    /// Returns `JsonModelGenError::InvalidTypeName` when `name` is empty or
    /// not an identifier.
    pub fn register_root(&mut self, name: &str) -> Result<(), JsonModelGenError> {
        if !self.is_identifier(name) {
            return Err(JsonModelGenError::InvalidTypeName {
                name: name.to_string(),
            });
        }
        self.claim(name, JsonPointer::root())
    }

    /// Derive, validate and register the name of the nested model found at
    /// `location` (the pointer to `key` inside the `parent` model).
    ///
    /// # Errors
    ///
    /// Returns `JsonModelGenError::InvalidFieldKey` for an empty key or a key
    /// that does not produce an identifier, and
    /// `JsonModelGenError::TypeNameCollision` when the name was already issued.
    pub fn derive(
        &mut self,
        parent: &str,
        key: &str,
        location: &JsonPointer,
    ) -> Result<String, JsonModelGenError> {
        let name: String = build_class_name(parent, key, location)?;
        if !self.is_identifier(&name) {
            return Err(JsonModelGenError::InvalidFieldKey {
                path: location.to_string(),
                key: key.to_string(),
                reason: "derived type name is not an identifier",
            });
        }
        self.claim(&name, location.clone())?;
        Ok(name)
    }

    fn claim(&mut self, name: &str, location: JsonPointer) -> Result<(), JsonModelGenError> {
        if let Some(first) = self.issued.get(name) {
            return Err(JsonModelGenError::TypeNameCollision {
                type_name: name.to_string(),
                first: first.to_string(),
                second: location.to_string(),
            });
        }
        self.issued.insert(name.to_string(), location);
        Ok(())
    }

    /// Number of names issued so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
