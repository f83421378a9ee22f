//! `$name: value` directive lines.
//!
//! Directives carry presentation metadata in-band (a quote's author, a code
//! block's icon) and are removed from the content they annotate.

pub struct Directive;

impl Directive {
    pub const SIGIL: char = '$';
    pub const ICON: &'static str = "icon";
    pub const AUTHOR: &'static str = "author";
    pub const AUDIO: &'static str = "audio";
    pub const LINK: &'static str = "link";
    pub const POSITION: &'static str = "position";
}

/// Value of a `$name:` directive line, matched case-insensitively and
/// trimmed. `None` when the line is not that directive.
pub fn directive_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.trim().strip_prefix(Directive::SIGIL)?;
    let head = rest.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    let value = rest[name.len()..].strip_prefix(':')?;
    Some(value.trim())
}
