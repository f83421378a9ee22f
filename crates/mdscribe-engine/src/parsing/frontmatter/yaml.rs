//! A small YAML subset for document metadata.
//!
//! Supported: `key: value` scalars with type inference, inline `[a, b]`
//! lists, `key: |` literal blocks, nested mappings and block sequences.
//! `key: >` folds its block into one line. Anchors, tags, flow mappings and
//! multi-document streams are not supported; they parse best-effort into
//! whatever structure the rules below produce. Lines that fit no rule are
//! skipped, so parsing never fails.

use serde_json::{Number, Value};

use crate::models::Metadata;

#[derive(Debug)]
enum Body {
    Map(Metadata),
    Seq(Vec<Value>),
}

/// An open container on the indentation stack.
#[derive(Debug)]
struct Frame {
    key: String,
    indent: usize,
    body: Body,
}

impl Frame {
    fn into_value(self) -> (String, Value) {
        let value = match self.body {
            // `key:` with nothing under it is a stub, not an empty object
            Body::Map(m) if m.is_empty() => Value::Null,
            Body::Map(m) => Value::Object(m),
            Body::Seq(items) => Value::Array(items),
        };
        (self.key, value)
    }
}

/// A `key: |` or `key: >` block being collected.
struct Literal<'a> {
    key: String,
    indent: usize,
    folded: bool,
    lines: Vec<&'a str>,
}

impl Literal<'_> {
    fn finish(mut self) -> (String, Value) {
        while self.lines.last().is_some_and(|l| l.trim().is_empty()) {
            self.lines.pop();
        }
        let strip = self
            .lines
            .iter()
            .find(|l| !l.trim().is_empty())
            .map(|l| leading_ws(l))
            .unwrap_or(0);
        let text = self
            .lines
            .iter()
            .map(|l| {
                if l.trim().is_empty() {
                    ""
                } else {
                    let n = strip.min(leading_ws(l));
                    l.get(n..).unwrap_or_else(|| l.trim_start())
                }
            })
            .collect::<Vec<_>>();
        let text = if self.folded {
            text.split(|l| l.is_empty())
                .map(|para| para.join(" "))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            text.join("\n")
        };
        (self.key, Value::String(text))
    }
}

/// Parses the text between the frontmatter delimiters.
pub fn parse(src: &str) -> Metadata {
    let lines: Vec<&str> = src.lines().collect();
    let mut root = Metadata::new();
    let mut stack: Vec<Frame> = vec![];
    let mut literal: Option<Literal<'_>> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();
        let indent = leading_ws(line);

        if let Some(lit) = literal.as_mut() {
            if trimmed.is_empty() || indent > lit.indent {
                lit.lines.push(line);
                i += 1;
                continue;
            }
            if let Some(lit) = literal.take() {
                let (key, value) = lit.finish();
                insert(&mut stack, &mut root, key, value);
            }
            // the terminating line is processed normally below
        }

        i += 1;
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let item = sequence_item(trimmed);
        close_frames(&mut stack, &mut root, indent, item.is_some());

        if let Some(value) = item {
            match stack.last_mut() {
                Some(Frame {
                    body: Body::Seq(items),
                    ..
                }) => items.push(parse_scalar(value)),
                _ => log::debug!("frontmatter line {i}: orphan sequence item skipped"),
            }
            continue;
        }

        let Some((key, value)) = split_key(trimmed) else {
            log::debug!("frontmatter line {i}: no `key:` in {trimmed:?}, skipped");
            continue;
        };

        // a key line never belongs to an open sequence
        while matches!(stack.last(), Some(Frame { body: Body::Seq(_), .. })) {
            pop_frame(&mut stack, &mut root);
        }

        if value == "|" || value == ">" {
            literal = Some(Literal {
                key: key.to_string(),
                indent,
                folded: value == ">",
                lines: vec![],
            });
        } else if !value.is_empty() {
            insert(&mut stack, &mut root, key.to_string(), parse_scalar(value));
        } else {
            let opens_sequence = lines[i..]
                .iter()
                .map(|l| l.trim())
                .find(|l| !l.is_empty() && !l.starts_with('#'))
                .is_some_and(|l| sequence_item(l).is_some());
            let body = if opens_sequence {
                Body::Seq(vec![])
            } else {
                Body::Map(Metadata::new())
            };
            stack.push(Frame {
                key: key.to_string(),
                indent,
                body,
            });
        }
    }

    if let Some(lit) = literal.take() {
        let (key, value) = lit.finish();
        insert(&mut stack, &mut root, key, value);
    }
    while !stack.is_empty() {
        pop_frame(&mut stack, &mut root);
    }
    root
}

/// Pops every frame the line at `indent` closes.
///
/// A sequence item at exactly the indentation of an open sequence key
/// continues that sequence.
fn close_frames(stack: &mut Vec<Frame>, root: &mut Metadata, indent: usize, is_item: bool) {
    while let Some(top) = stack.last() {
        let continues_sequence = is_item && matches!(top.body, Body::Seq(_)) && indent == top.indent;
        if indent > top.indent || continues_sequence {
            break;
        }
        pop_frame(stack, root);
    }
}

fn pop_frame(stack: &mut Vec<Frame>, root: &mut Metadata) {
    if let Some(frame) = stack.pop() {
        let (key, value) = frame.into_value();
        insert(stack, root, key, value);
    }
}

fn insert(stack: &mut [Frame], root: &mut Metadata, key: String, value: Value) {
    match stack.last_mut() {
        Some(Frame {
            body: Body::Map(map),
            ..
        }) => {
            map.insert(key, value);
        }
        // sequences are closed before key lines, so this is unreachable in
        // practice; keep the value rather than drop it
        Some(Frame {
            body: Body::Seq(items),
            ..
        }) => items.push(value),
        None => {
            root.insert(key, value);
        }
    }
}

fn sequence_item(trimmed: &str) -> Option<&str> {
    if trimmed == "-" {
        Some("")
    } else {
        trimmed.strip_prefix("- ").map(str::trim)
    }
}

fn split_key(trimmed: &str) -> Option<(&str, &str)> {
    let idx = trimmed.find(':')?;
    if idx == 0 {
        return None;
    }
    Some((trimmed[..idx].trim(), trimmed[idx + 1..].trim()))
}

/// Infers the type of an inline scalar.
pub fn parse_scalar(raw: &str) -> Value {
    let v = raw.trim();

    if v.len() >= 2
        && ((v.starts_with('"') && v.ends_with('"')) || (v.starts_with('\'') && v.ends_with('\'')))
    {
        return Value::String(v[1..v.len() - 1].to_string());
    }

    if v.starts_with('[') && v.ends_with(']') && v.len() >= 2 {
        let inner = &v[1..v.len() - 1];
        if inner.trim().is_empty() {
            return Value::Array(vec![]);
        }
        return Value::Array(inner.split(',').map(parse_scalar).collect());
    }

    match v {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "~" => return Value::Null,
        _ => {}
    }

    parse_number(v).unwrap_or_else(|| Value::String(v.to_string()))
}

fn parse_number(v: &str) -> Option<Value> {
    let numeric_chars = v
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric_chars || !v.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Ok(n) = v.parse::<i64>() {
        return Some(Value::from(n));
    }
    v.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

fn leading_ws(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
