//! Generate nested data-model declarations from a sample JSON document.
//!
//! The sample is walked once. Every object shape found becomes a model named
//! after its parent and field key (`Person` + `address` -> `PersonAddress`),
//! with one field per key and an initializer that reads each field back out
//! of a JSON value.
//!
//! ```
//! use json_model_gen::{GenerateSettings, generate};
//!
//! let sample = serde_json::json!({ "id": 1, "address": { "city": "NYC" } });
//! let source = generate(&sample, "Person", &GenerateSettings::default()).unwrap();
//! assert!(source.starts_with("class Person {\n"));
//! assert!(source.contains("\nclass PersonAddress {\n"));
//! ```

mod codegen;
mod emitter;
mod error;
mod infer;
mod json_pointer;
mod model;
mod naming;
mod settings;

pub use codegen::render_model;
pub use emitter::Emitter;
pub use error::JsonModelGenError;
pub use infer::build_model;
pub use json_pointer::JsonPointer;
pub use model::{ElementType, FieldDef, FieldType, InitStatement, ModelNode, ScalarKind};
pub use naming::{NameRegistry, build_class_name, check_field_key};
pub use settings::{DEFAULT_INDENT_WIDTH, GenerateSettings};

use std::io::Write;
use std::path::Path;

use tracing::debug;

/// Generate model source for `value`, naming the root model `root_name`.
///
/// # Errors
///
/// Returns `JsonModelGenError` if `root_name` is not an identifier, a nested
/// model cannot be named from its key, or two nested models derive the same
/// name.
pub fn generate(
    value: &serde_json::Value,
    root_name: &str,
    settings: &GenerateSettings,
) -> Result<String, JsonModelGenError> {
    let model: ModelNode = build_model(value, root_name, settings)?;
    Ok(render_model(&model, settings))
}

/// Parse `json_text` and write the generated models to `writer`, preceded by
/// a "generated" header comment.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Cursor<Vec<u8>>`, enabling easy unit testing without file system interaction.
///
/// # Errors
///
/// Returns `JsonModelGenError` if the JSON is invalid, generation fails (see
/// [`generate`]), or writing to the writer fails.
pub fn generate_to_writer<W: Write>(
    json_text: &str,
    root_name: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), JsonModelGenError> {
    let value: serde_json::Value = serde_json::from_str(json_text)?;
    let source: String = generate(&value, root_name, settings)?;
    writeln!(writer, "{}", codegen::GENERATED_HEADER)?;
    writeln!(writer)?;
    writer.write_all(source.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Generate models from a JSON sample file and write them to an output file.
///
/// The output file is left untouched when generation fails.
///
/// # Errors
///
/// Returns `JsonModelGenError` if reading the input file fails, generation
/// fails (see [`generate_to_writer`]), or writing to the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    root_name: &str,
    settings: &GenerateSettings,
) -> Result<(), JsonModelGenError> {
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        "generating from file"
    );
    let json_text: String = std::fs::read_to_string(input_path)?;
    let mut buffer: Vec<u8> = Vec::new();
    generate_to_writer(&json_text, root_name, &mut buffer, settings)?;
    // An existing output file is only replaced once generation has succeeded.
    std::fs::write(output_path, buffer)?;
    Ok(())
}
