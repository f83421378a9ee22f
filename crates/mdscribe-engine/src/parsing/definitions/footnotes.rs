use std::sync::OnceLock;

use regex::Regex;

use crate::models::{FootnoteDefinition, FootnoteDefinitions};

/// Footnote reference/definition syntax.
pub struct Footnote;

impl Footnote {
    /// Opens both a reference `[^id]` and a definition `[^id]: ..`.
    pub const OPEN: &'static str = "[^";
}

static DEFINITION_RE: OnceLock<Regex> = OnceLock::new();

fn definition_re() -> &'static Regex {
    DEFINITION_RE
        .get_or_init(|| Regex::new(r"^\[\^([^\]]+)\]:\s*(.+)").expect("Invalid footnote regex"))
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !line.trim().is_empty()
}

/// Removes footnote definitions from `lines`.
///
/// A definition owns the indented lines directly after it. One blank line may
/// sit inside a definition when the line after it is indented again.
/// Numbers follow definition order; a repeated id keeps its first definition.
pub fn extract_footnotes<'a>(lines: &[&'a str]) -> (FootnoteDefinitions, Vec<&'a str>) {
    let mut defs = FootnoteDefinitions::new();
    let mut rest = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = definition_re().captures(lines[i]) else {
            rest.push(lines[i]);
            i += 1;
            continue;
        };

        let id = caps[1].to_string();
        let mut content = caps[2].trim().to_string();
        let mut raw = vec![lines[i]];
        i += 1;

        while let Some(line) = lines.get(i) {
            if is_continuation(line) {
                content.push('\n');
                content.push_str(line.trim_start());
            } else if line.trim().is_empty() && lines.get(i + 1).is_some_and(|l| is_continuation(l)) {
                content.push('\n');
            } else {
                break;
            }
            raw.push(*line);
            i += 1;
        }

        if defs.contains_key(&id) {
            continue;
        }
        let number = defs.len() + 1;
        defs.insert(
            id.clone(),
            FootnoteDefinition {
                id,
                number,
                content,
                raw: raw.join("\n"),
            },
        );
    }

    (defs, rest)
}
