use anyhow::{Context, Result};
use clap::Parser;
use mdscribe_config::Config;
use mdscribe_engine::{Block, BlockKind, Document, ListItem, ParseOptions, load_and_parse};
use std::path::PathBuf;

/// Parse a markdown file into a structured document tree.
#[derive(Parser, Debug)]
#[command(name = "mdscribe", version, about)]
struct Cli {
    /// Markdown file to parse.
    file: PathBuf,

    /// Print the full document tree as JSON instead of an outline.
    #[arg(long)]
    json: bool,

    /// Alternate config file (defaults to ~/.config/mdscribe/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    no_frontmatter: bool,
    #[arg(long)]
    no_tables: bool,
    #[arg(long)]
    no_footnotes: bool,
    #[arg(long)]
    no_math: bool,
}

impl Cli {
    /// Applies the `--no-*` flags on top of the configured options.
    fn options(&self, base: ParseOptions) -> ParseOptions {
        ParseOptions {
            enable_frontmatter: base.enable_frontmatter && !self.no_frontmatter,
            enable_tables: base.enable_tables && !self.no_tables,
            enable_footnotes: base.enable_footnotes && !self.no_footnotes,
            enable_math: base.enable_math && !self.no_math,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path);
            Config::load_from_path(&path)
                .with_context(|| format!("loading config from {}", path.display()))?
        }
        None => Config::load().context("loading default config")?,
    };
    Ok(loaded.unwrap_or_default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let options = cli.options(config.parser);
    log::debug!("parsing {} with {options:?}", cli.file.display());
    let document = load_and_parse(&cli.file, &options)
        .with_context(|| format!("parsing {}", cli.file.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&document).context("serializing document")?;
        println!("{json}");
    } else {
        for line in render_outline(&document) {
            println!("{line}");
        }
    }
    Ok(())
}

fn render_outline(document: &Document) -> Vec<String> {
    let mut lines = Vec::new();
    for block in &document.blocks {
        render_block(block, 0, &mut lines);
    }
    lines
}

fn render_block(block: &Block, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match &block.kind {
        BlockKind::Heading(h) => lines.push(format!("{pad}h{} {}", h.level, h.text)),
        BlockKind::Code(code) => lines.push(format!(
            "{pad}code [{}] {} lines",
            code.language.as_deref().unwrap_or("-"),
            block.content.lines().count()
        )),
        BlockKind::List(list) => {
            lines.push(format!("{pad}list ({})", list.list_type.as_str()));
            render_items(&list.items, depth + 1, lines);
        }
        BlockKind::Quote(quote) => {
            let by = quote
                .author
                .as_deref()
                .map(|a| format!(" by {a}"))
                .unwrap_or_default();
            lines.push(format!("{pad}quote{by}"));
            for inner in &quote.blocks {
                render_block(inner, depth + 1, lines);
            }
        }
        BlockKind::Table(table) => lines.push(format!(
            "{pad}table {}x{}",
            table.header.len(),
            table.rows.len()
        )),
        BlockKind::Image(image) => lines.push(format!("{pad}image {} ({})", image.src, image.alt)),
        BlockKind::Toc(toc) => {
            lines.push(format!("{pad}toc"));
            for entry in &toc.entries {
                let indent = "  ".repeat(depth + entry.level as usize);
                lines.push(format!("{indent}{} #{}", entry.text, entry.slug));
            }
        }
        BlockKind::Footnotes(notes) => {
            lines.push(format!("{pad}footnotes"));
            for def in &notes.definitions {
                lines.push(format!("{pad}  [{}] {}", def.number, def.content));
            }
        }
        BlockKind::Math(math) => lines.push(format!("{pad}math {}", math.latex)),
        BlockKind::Frontmatter
        | BlockKind::Paragraph
        | BlockKind::Html
        | BlockKind::HorizontalRule => {
            let first = block.content.lines().next().unwrap_or("");
            lines.push(format!("{pad}{} {first}", block.type_name()).trim_end().to_string());
        }
    }
}

fn render_items(items: &[ListItem], depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    for item in items {
        let mark = match item.checked {
            Some(true) => "[x] ",
            Some(false) => "[ ] ",
            None => "",
        };
        lines.push(format!("{pad}- {mark}{}", item.content));
        render_items(&item.children, depth + 1, lines);
    }
}
