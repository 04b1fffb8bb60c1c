//! Template renderer implementation.
//!
//! Single-pass scanner over `{{ name }}` markers:
//! - literal text is copied through byte-for-byte
//! - `{{ name }}` and `{{name}}` resolve to the same placeholder
//! - an unresolved placeholder is always a hard error (strict policy)
//!
//! Markers do not nest and substituted values are never re-scanned.

use std::collections::HashSet;

use serde::Serialize;

use crate::{Error, Result};

/// Opening marker delimiter.
const OPEN_DELIM: &str = "{{";

/// Closing marker delimiter.
const CLOSE_DELIM: &str = "}}";

/// A placeholder occurrence extracted from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// The placeholder name, with surrounding whitespace trimmed.
    pub name: String,
    /// Byte offset of the opening delimiter of the first occurrence.
    pub position: usize,
}

/// A span of template text produced by the scanner.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'t> {
    /// Literal text, copied through unchanged.
    Literal(&'t str),
    /// A well-formed marker with its trimmed name.
    Marker { name: &'t str, position: usize },
}

/// Scanner state. `InsideMarker` is entered at `{{` and left at `}}`;
/// reaching end of input while inside a marker is a malformed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    CopyingLiteral,
    InsideMarker { open: usize },
}

/// Splits a template into literal and marker segments in one pass.
fn scan(template: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut state = ScanState::CopyingLiteral;
    let mut cursor = 0;

    loop {
        match state {
            ScanState::CopyingLiteral => {
                let Some(rel) = template[cursor..].find(OPEN_DELIM) else {
                    if cursor < template.len() {
                        segments.push(Segment::Literal(&template[cursor..]));
                    }
                    return Ok(segments);
                };
                let open = cursor + rel;
                if rel > 0 {
                    segments.push(Segment::Literal(&template[cursor..open]));
                }
                cursor = open + OPEN_DELIM.len();
                state = ScanState::InsideMarker { open };
            },
            ScanState::InsideMarker { open } => {
                let Some(rel) = template[cursor..].find(CLOSE_DELIM) else {
                    return Err(Error::MalformedTemplate {
                        position: open,
                        reason: "unterminated marker".to_string(),
                    });
                };
                let name = template[cursor..cursor + rel].trim();
                validate_name(name, open)?;
                segments.push(Segment::Marker { name, position: open });
                cursor += rel + CLOSE_DELIM.len();
                state = ScanState::CopyingLiteral;
            },
        }
    }
}

/// Validates a trimmed placeholder name.
///
/// Names follow identifier rules: non-empty, `[A-Za-z0-9_]` only. A `{`
/// inside a marker body also lands here, so attempted nesting is reported
/// as a malformed template rather than silently mis-parsed.
fn validate_name(name: &str, open: usize) -> Result<()> {
    if name.is_empty() {
        return Err(Error::MalformedTemplate {
            position: open,
            reason: "empty placeholder name".to_string(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(Error::MalformedTemplate {
            position: open,
            reason: format!("invalid placeholder name '{name}'"),
        });
    }
    Ok(())
}

/// Template rendering engine.
///
/// Stateless; each render is a pure function of its inputs, so one
/// renderer may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer {
    _private: (),
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Renders a template by substituting every `{{ name }}` marker.
    ///
    /// Text outside markers is preserved exactly. Names are looked up
    /// case-sensitively; whitespace inside the delimiters is
    /// insignificant.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedTemplate`] for an unterminated marker or an
    ///   empty/invalid placeholder name
    /// - [`Error::UnresolvedPlaceholder`] when a name has no entry in
    ///   `subs` (a failed render yields no partial output)
    pub fn render(&self, template: &str, subs: &super::Substitutions) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        for segment in scan(template)? {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Marker { name, .. } => {
                    let value = subs.get(name).ok_or_else(|| Error::UnresolvedPlaceholder {
                        name: name.to_string(),
                    })?;
                    output.push_str(value);
                },
            }
        }
        Ok(output)
    }
}

/// Extracts the placeholders a template references.
///
/// Names are deduplicated and reported in first-occurrence order, each
/// with the byte offset of its first opening delimiter. Spacing variants
/// of the same name (`{{x}}` / `{{ x }}`) count as one placeholder.
///
/// # Errors
///
/// Returns [`Error::MalformedTemplate`] for the same inputs `render`
/// rejects.
pub fn extract_placeholders(template: &str) -> Result<Vec<Placeholder>> {
    let mut seen = HashSet::new();
    let mut placeholders = Vec::new();

    for segment in scan(template)? {
        if let Segment::Marker { name, position } = segment {
            if seen.insert(name) {
                placeholders.push(Placeholder {
                    name: name.to_string(),
                    position,
                });
            }
        }
    }

    Ok(placeholders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Substitutions;

    fn subs(entries: &[(&str, &str)]) -> Substitutions {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_render_literal_only_is_identity() {
        let renderer = TemplateRenderer::new();
        let template = "public static void main(String[] args) { }";

        let result = renderer.render(template, &Substitutions::new()).unwrap();
        assert_eq!(result, template);
    }

    #[test]
    fn test_render_empty_template() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("", &Substitutions::new()).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_render_simple_substitution() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render("Hello {{name}}!", &subs(&[("name", "World")]))
            .unwrap();
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_render_whitespace_insensitive() {
        let renderer = TemplateRenderer::new();
        let map = subs(&[("name", "X")]);

        let tight = renderer.render("{{name}}", &map).unwrap();
        let spaced = renderer.render("{{ name }}", &map).unwrap();
        let lopsided = renderer.render("{{  name }}", &map).unwrap();

        assert_eq!(tight, "X");
        assert_eq!(spaced, tight);
        assert_eq!(lopsided, tight);
    }

    #[test]
    fn test_render_names_case_sensitive() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("{{ Name }}", &subs(&[("name", "x")]));

        assert!(matches!(
            result,
            Err(Error::UnresolvedPlaceholder { name }) if name == "Name"
        ));
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render("{{x}} and {{ x }} and {{x}}", &subs(&[("x", "y")]))
            .unwrap();
        assert_eq!(result, "y and y and y");
    }

    #[test]
    fn test_render_marker_at_boundaries() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render("{{a}}middle{{b}}", &subs(&[("a", "<"), ("b", ">")]))
            .unwrap();
        assert_eq!(result, "<middle>");
    }

    #[test]
    fn test_render_unresolved_is_strict() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("package {{ package_name }};", &Substitutions::new());

        let err = result.unwrap_err();
        assert!(matches!(
            &err,
            Error::UnresolvedPlaceholder { name } if name == "package_name"
        ));
        assert!(err.to_string().contains("package_name"));
    }

    #[test]
    fn test_render_unterminated_marker() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("{{name", &subs(&[("name", "X")]));

        assert!(matches!(
            result,
            Err(Error::MalformedTemplate { position: 0, .. })
        ));
    }

    #[test]
    fn test_render_unterminated_marker_reports_offset() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("abc {{name", &Substitutions::new());

        assert!(matches!(
            result,
            Err(Error::MalformedTemplate { position: 4, .. })
        ));
    }

    #[test]
    fn test_render_empty_name_is_malformed() {
        let renderer = TemplateRenderer::new();
        for template in ["{{}}", "{{   }}"] {
            let result = renderer.render(template, &Substitutions::new());
            assert!(
                matches!(result, Err(Error::MalformedTemplate { .. })),
                "expected malformed: {template}"
            );
        }
    }

    #[test]
    fn test_render_interior_whitespace_is_malformed() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("{{ foo bar }}", &Substitutions::new());
        assert!(matches!(result, Err(Error::MalformedTemplate { .. })));
    }

    #[test]
    fn test_render_nested_marker_is_malformed() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("{{a{{b}}}}", &subs(&[("a", "1"), ("b", "2")]));
        assert!(matches!(result, Err(Error::MalformedTemplate { .. })));
    }

    #[test]
    fn test_render_single_braces_are_literal() {
        let renderer = TemplateRenderer::new();
        let template = "if (x) { return y; } else { }";

        let result = renderer.render(template, &Substitutions::new()).unwrap();
        assert_eq!(result, template);
    }

    #[test]
    fn test_render_stray_close_delimiter_is_literal() {
        let renderer = TemplateRenderer::new();
        let result = renderer.render("a }} b", &Substitutions::new()).unwrap();
        assert_eq!(result, "a }} b");
    }

    #[test]
    fn test_render_value_not_rescanned() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render("{{outer}}", &subs(&[("outer", "{{inner}}"), ("inner", "nope")]))
            .unwrap();
        // Substituted values are opaque text, never re-rendered.
        assert_eq!(result, "{{inner}}");
    }

    #[test]
    fn test_render_extra_substitutions_ignored() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render("{{used}}", &subs(&[("used", "yes"), ("unused", "no")]))
            .unwrap();
        assert_eq!(result, "yes");
    }

    #[test]
    fn test_render_spring_boot_entry_point() {
        let template = "\
package {{ package_name }};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{ main_class }} {
    public static void main(String[] args) {
        SpringApplication.run({{main_class}}.class, args);
    }
}
";
        let expected = "\
package com.example.app;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class DemoApplication {
    public static void main(String[] args) {
        SpringApplication.run(DemoApplication.class, args);
    }
}
";
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render(
                template,
                &subs(&[
                    ("package_name", "com.example.app"),
                    ("main_class", "DemoApplication"),
                ]),
            )
            .unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_extract_placeholders_order_and_dedup() {
        let placeholders =
            extract_placeholders("{{b}} {{ a }} {{b}} {{ c }}").unwrap();

        let names: Vec<&str> = placeholders.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_extract_placeholders_positions() {
        let placeholders = extract_placeholders("ab{{x}}cd{{y}}").unwrap();

        assert_eq!(placeholders[0], Placeholder { name: "x".to_string(), position: 2 });
        assert_eq!(placeholders[1], Placeholder { name: "y".to_string(), position: 9 });
    }

    #[test]
    fn test_extract_placeholders_spacing_variants_merge() {
        let placeholders = extract_placeholders("{{main_class}} {{ main_class }}").unwrap();
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name, "main_class");
        assert_eq!(placeholders[0].position, 0);
    }

    #[test]
    fn test_extract_placeholders_none() {
        let placeholders = extract_placeholders("no markers here").unwrap();
        assert!(placeholders.is_empty());
    }

    #[test]
    fn test_extract_placeholders_malformed() {
        let result = extract_placeholders("{{oops");
        assert!(matches!(result, Err(Error::MalformedTemplate { .. })));
    }

    #[test]
    fn test_scan_segments() {
        let segments = scan("a{{x}}b").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a"),
                Segment::Marker { name: "x", position: 1 },
                Segment::Literal("b"),
            ]
        );
    }

    #[test]
    fn test_render_multibyte_literal_text() {
        let renderer = TemplateRenderer::new();
        let result = renderer
            .render("café {{name}} naïve", &subs(&[("name", "résumé")]))
            .unwrap();
        assert_eq!(result, "café résumé naïve");
    }
}
