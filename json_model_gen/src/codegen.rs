//! Render a [`ModelNode`] tree as source text.
//!
//! Each model becomes a `class` block listing its fields followed by an
//! `init(json:JSONValue)` initializer. Nested models follow their parent,
//! depth-first in field order, separated by a blank line.

use crate::emitter::Emitter;
use crate::model::{ElementType, InitStatement, ModelNode, ScalarKind};
use crate::settings::GenerateSettings;

/// Header written by the writer and file front ends.
pub(crate) const GENERATED_HEADER: &str = "// Generated by json-model-gen. Do not edit manually.";

/// Render `root` and all its nested models.
#[must_use]
pub fn render_model(root: &ModelNode, settings: &GenerateSettings) -> String {
    let mut out: Emitter = Emitter::with_indent_width(settings.indent_width);
    emit_model(root, &mut out);
    out.render()
}

/// Emit one model block followed by the blocks of its children.
fn emit_model(node: &ModelNode, out: &mut Emitter) {
    out.open_block(format!("class {} {{", node.type_name));
    for field in &node.fields {
        out.push_line(format!(
            "var {}:{}",
            field.name,
            field.field_type.declaration()
        ));
    }
    let initializer: Emitter = emit_initializer(node, out.level());
    out.absorb(&initializer);
    out.close_block("}");

    for child in &node.children {
        let mut child_out: Emitter = Emitter::new();
        emit_model(child, &mut child_out);
        out.push_blank().absorb(&child_out);
    }
}

fn emit_initializer(node: &ModelNode, level: usize) -> Emitter {
    let mut init: Emitter = Emitter::nested(level);
    init.open_block("init(json:JSONValue) {");
    for statement in &node.initializer {
        emit_statement(statement, &mut init);
    }
    init.close_block("}");
    init
}

fn emit_statement(statement: &InitStatement, init: &mut Emitter) {
    match statement {
        InitStatement::Scalar { key, kind } => emit_scalar_assignment(key, *kind, init),
        InitStatement::PassThrough { key } => {
            init.push_line(format!("{key} = json[\"{}\"]", escape_key(key)));
        }
        InitStatement::Nested { key, type_name } => {
            init.push_line(format!(
                "{key} = {type_name}(json:json[\"{}\"])",
                escape_key(key)
            ));
        }
        InitStatement::List { key, element } => emit_list_assignment(key, element, init),
        InitStatement::ArrayRootNote => {
            init.push_line("// sample root is an array; no fields generated");
        }
        InitStatement::UnexpectedRootNote => {
            init.push_line("// sample root is not an object; no fields generated");
        }
    }
}

/// `if let value = json["key"].kind { key = value } else { key = default }`
fn emit_scalar_assignment(key: &str, kind: ScalarKind, init: &mut Emitter) {
    init.open_block(format!(
        "if let value = json[\"{}\"].{} {{",
        escape_key(key),
        kind.accessor()
    ))
    .push_line(format!("{key} = value"))
    .close_block("} else {")
    .indent()
    .push_line(format!("{key} = {}", kind.default_literal()))
    .close_block("}");
}

fn emit_list_assignment(key: &str, element: &ElementType, init: &mut Emitter) {
    let conversion: String = match element {
        ElementType::Nested(type_name) => format!("{type_name}(json:v)"),
        ElementType::Scalar(_) | ElementType::RawJson | ElementType::Dynamic => "v".to_string(),
    };
    init.push_line(format!("{key} = []"))
        .open_block(format!("if let xs = json[\"{}\"].array {{", escape_key(key)))
        .open_block("for v in xs {")
        .push_line(format!("{key}.append({conversion})"))
        .close_block("}")
        .close_block("}");
}

/// Escape a key for use inside a double-quoted string literal.
fn escape_key(key: &str) -> String {
    let mut escaped: String = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            other => escaped.push(other),
        }
    }
    escaped
}
