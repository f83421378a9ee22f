use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, BlockKind, CodeBlock, CodeKind};
use crate::parsing::blocks::directive::{Directive, directive_value};
use crate::parsing::blocks::dispatch::{BlockContext, Matched};
use crate::parsing::lines::LineCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// An opening fence: its character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    pub const INDENT: &'static str = "    ";
    pub const TAB: char = '\t';

    /// Recognises an opening fence at the start of `line`.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let caps = fence_re().captures(line)?;
        let run = caps.get(1)?.as_str();
        let kind = if run.starts_with('`') {
            FenceKind::Backticks
        } else {
            FenceKind::Tildes
        };
        Some(FenceSig {
            kind,
            len: run.len(),
        })
    }

    /// A closing fence uses the same character at least as many times.
    pub fn closes(sig: FenceSig, line: &str) -> bool {
        line.chars().take_while(|&c| c == sig.kind.char()).count() >= sig.len
    }

    /// Strips one level of indented-code indentation.
    pub fn strip_indent(line: &str) -> Option<&str> {
        line.strip_prefix(Self::INDENT)
            .or_else(|| line.strip_prefix(Self::TAB))
    }
}

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| Regex::new(r"^(`{3,}|~{3,})").expect("Invalid code fence regex"))
}

fn code_block(code: CodeBlock, content: String, raw: String) -> Block {
    let kind = match code.kind {
        CodeKind::Fenced => "fenced",
        CodeKind::Indented => "indented",
    };
    let language = code.language.clone();
    let mut block = Block::new(BlockKind::Code(code), content, raw);
    if let Some(language) = language {
        block = block.with_meta("language", language);
    }
    block.with_meta("codeType", kind)
}

/// Fenced or indented code, whichever the current line opens.
pub fn parse<'a>(ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let line = cur.line()?;
    if CodeFence::sig(line).is_some() {
        parse_fenced(ctx, cur)
    } else {
        parse_indented(ctx, cur)
    }
}

/// Fenced code. An unclosed fence is rejected.
pub fn parse_fenced<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let open = cur.line()?;
    let sig = CodeFence::sig(open)?;
    let language = Some(open[sig.len..].trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    let mut body = cur.advance(1);
    let icon = body
        .line()
        .and_then(|l| directive_value(l, Directive::ICON))
        .map(str::to_string);
    if icon.is_some() {
        body = body.advance(1);
    }

    let mut close = body;
    loop {
        match close.line() {
            Some(l) if CodeFence::closes(sig, l) => break,
            Some(_) => close = close.advance(1),
            None => return None,
        }
    }

    let next = close.advance(1);
    let code = CodeBlock {
        language,
        kind: CodeKind::Fenced,
        icon,
    };
    Some(Matched {
        block: code_block(code, body.raw_to(&close), cur.raw_to(&next)),
        next,
    })
}

/// Indented code: lines starting with four spaces or a tab. A blank line
/// stays inside the block only when the following line is indented too.
pub fn parse_indented<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let mut lines = vec![];
    let mut end = cur;
    while let Some(line) = end.line() {
        if let Some(stripped) = CodeFence::strip_indent(line) {
            lines.push(stripped);
        } else if line.trim().is_empty()
            && end.peek(1).and_then(CodeFence::strip_indent).is_some()
        {
            lines.push("");
        } else {
            break;
        }
        end = end.advance(1);
    }
    if lines.is_empty() {
        return None;
    }

    let code = CodeBlock {
        language: None,
        kind: CodeKind::Indented,
        icon: None,
    };
    Some(Matched {
        block: code_block(code, lines.join("\n"), cur.raw_to(&end)),
        next: end,
    })
}

/// Fenced code as recognised inside quotes: a ```` ``` ```` line up to the
/// next ```` ``` ```` line or the end of the quote. No directives.
pub fn parse_simple<'a>(_ctx: &BlockContext<'_>, cur: LineCursor<'a>) -> Option<Matched<'a>> {
    let open = cur.line()?;
    let language = open.strip_prefix(CodeFence::BACKTICKS)?.trim();
    let language = (!language.is_empty()).then(|| language.to_string());

    let body = cur.advance(1);
    let mut close = body;
    while close
        .line()
        .is_some_and(|l| !l.starts_with(CodeFence::BACKTICKS))
    {
        close = close.advance(1);
    }
    let next = close.advance(1);
    let code = CodeBlock {
        language,
        kind: CodeKind::Fenced,
        icon: None,
    };
    Some(Matched {
        block: code_block(code, body.raw_to(&close), cur.raw_to(&next)),
        next,
    })
}
