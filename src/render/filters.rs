//! Filtros próprios do template.

use liquid_core::Result;
use liquid_core::Runtime;
use liquid_core::{Display_filter, Filter, FilterReflection, ParseFilter};
use liquid_core::{Value, ValueView};

/// Serializa um valor em JSON que pode ser colocado dentro de `<script>`.
///
/// `<`, `>`, `&`, U+2028 e U+2029 viram escapes `\uXXXX`; o literal continua
/// JSON válido e nunca contém `</script>` nem comentários HTML.
pub fn script_safe_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let raw = serde_json::to_string(value)?;
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Ok(out)
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "json",
    description = "Serializes the input to a JSON literal safe to embed in a script block.",
    parsed(JsonFilter)
)]
pub struct Json;

#[derive(Debug, Default, Display_filter)]
#[name = "json"]
struct JsonFilter;

impl Filter for JsonFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        let literal = script_safe_json(&input.to_value())
            .map_err(|e| liquid_core::Error::with_msg(format!("json filter: {}", e)))?;
        Ok(Value::scalar(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(script_safe_json("v1").unwrap(), r#""v1""#);
        assert_eq!(
            script_safe_json(&vec!["v1", "v2"]).unwrap(),
            r#"["v1","v2"]"#
        );
    }

    #[test]
    fn test_html_sensitive_characters_are_escaped() {
        let out = script_safe_json("</script><!-- a & b").unwrap();

        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('&'));
        assert_eq!(out, r#""\u003c/script\u003e\u003c!-- a \u0026 b""#);

        // Continua JSON válido, com o mesmo conteúdo.
        let back: String = serde_json::from_str(&out).unwrap();
        assert_eq!(back, "</script><!-- a & b");
    }

    #[test]
    fn test_line_separators_are_escaped() {
        let out = script_safe_json("a\u{2028}b\u{2029}c").unwrap();
        assert_eq!(out, r#""a\u2028b\u2029c""#);
    }
}
