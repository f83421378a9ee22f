// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **bold**, *italic* and a [link][ref].\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| A | B |\n|:--|--:|\n| 1 | 2 |\n\n> $author: Someone\n> Quoted text\n\n";
    let mut content = String::from("---\ntitle: Bench\ntags: [a, b]\n---\n[[TOC]]\n\n");
    content.push_str(&base.repeat(size));
    content.push_str("[ref]: https://example.com\n");
    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy(size: usize) -> String {
    "Text with `code`, $x^2$, ~~strike~~, H~2~O, ==mark==, ***both*** and [a](b \"t\"). "
        .repeat(size)
}
