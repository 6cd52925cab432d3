use serde::Serialize;
use symdex_core::IndexTable;
use tera::{Context, Tera};

use crate::config::{Config, Format};
use crate::error::EmitError;
use crate::escape::{c_string, is_identifier, rust_string};

/// Marker placed in the first line of every emitted file.
pub const GENERATED_BY: &str = "@generated by `cargo xtask sym-index`; do not edit.";

const C_TEMPLATE: &str = r#"/* {{ generated_by }} */
static const struct SYM_INDEX {{ name }}[] = {
{% for row in rows %}  {{ "{" }}{{ row.hash }}, {{ row.left }}, {{ row.right }}, {{ row.text }}},
{% endfor %}};
"#;

const RUST_TEMPLATE: &str = r#"// {{ generated_by }}
pub static {{ name }}: [symdex::IndexNode<&str>; {{ rows | length }}] = [
{% for row in rows %}    symdex::IndexNode::new({{ row.hash }}, {{ row.left }}, {{ row.right }}, {{ row.text }}),
{% endfor %}];
"#;

/// One node, already formatted for the target syntax.
#[derive(Serialize)]
struct Row {
    hash: String,
    left: String,
    right: String,
    text: String,
}

/// Render `table` as a static array declaration.
///
/// Every record carries the hash as four hex digits, both links as two hex
/// digits and the quoted symbol text, in that order and in table order.
pub fn render(table: &IndexTable, config: &Config) -> Result<String, EmitError> {
    let name = config.table_name();
    if !is_identifier(name) {
        return Err(EmitError::InvalidName(name.to_string()));
    }

    let quote: fn(&str) -> String = match config.format {
        Format::C => c_string,
        Format::Rust => rust_string,
    };
    let rows: Vec<Row> = table
        .iter()
        .map(|node| Row {
            hash: format!("{:#06x}", node.hash),
            left: format!("{:#04x}", node.left.raw()),
            right: format!("{:#04x}", node.right.raw()),
            text: quote(node.text()),
        })
        .collect();

    let mut context = Context::new();
    context.insert("generated_by", GENERATED_BY);
    context.insert("name", name);
    context.insert("rows", &rows);

    let template = match config.format {
        Format::C => C_TEMPLATE,
        Format::Rust => RUST_TEMPLATE,
    };
    Ok(Tera::one_off(template, &context, false)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_name() {
        let config = Config::new().with_name("base-index");
        let err = render(&IndexTable::default(), &config).unwrap_err();
        assert!(matches!(err, EmitError::InvalidName(name) if name == "base-index"));
    }

    #[test]
    fn test_empty_table() {
        let output = render(&IndexTable::default(), &Config::new()).unwrap();
        insta::assert_snapshot!(output, @r#"
        /* @generated by `cargo xtask sym-index`; do not edit. */
        static const struct SYM_INDEX base_index[] = {
        };
        "#);
    }
}
