//! Converts a Markdown body to HTML.
//!
//! Parsing and HTML printing are delegated to `markdown-ppp`, which handles
//! CommonMark plus fenced code blocks and GFM tables. On top of that, code
//! blocks can be emitted with `codehilite` markup so a stylesheet can target
//! them:
//!
//! ```html
//! <pre class="codehilite"><code class="language-rust">fn main() {}
//! </code></pre>
//! ```

use crate::error::ConvertError;
use markdown_ppp::ast::{Block, CodeBlock, CodeBlockKind, Document};
use markdown_ppp::html_printer::{config::Config as HtmlConfig, render_html};
use markdown_ppp::parser::{parse_markdown, MarkdownParserState};

/// Options controlling how a Markdown body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    code_highlight: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            code_highlight: true,
        }
    }
}

impl RendererConfig {
    /// Enables or disables `codehilite` markup on code blocks.
    pub fn with_code_highlight(mut self, enabled: bool) -> Self {
        self.code_highlight = enabled;
        self
    }

    pub fn code_highlight(&self) -> bool {
        self.code_highlight
    }
}

/// Renders `markdown` to an HTML fragment.
///
/// The same input and configuration always produce the same output.
pub fn render(markdown: &str, config: &RendererConfig) -> Result<String, ConvertError> {
    let mut doc: Document = parse_markdown(MarkdownParserState::default(), markdown)
        .map_err(|err| ConvertError::MarkdownParse(err.to_string()))?;

    if config.code_highlight() {
        highlight_code_blocks(&mut doc.blocks);
    }

    Ok(render_html(&doc, HtmlConfig::default()))
}

/// Replaces every code block, including nested ones, with `codehilite` markup.
fn highlight_code_blocks(blocks: &mut [Block]) {
    for block in blocks.iter_mut() {
        let replacement = match block {
            Block::CodeBlock(code_block) => Some(codehilite_markup(code_block)),
            Block::BlockQuote(inner) => {
                highlight_code_blocks(inner);
                None
            }
            Block::List(list) => {
                for item in list.items.iter_mut() {
                    highlight_code_blocks(&mut item.blocks);
                }
                None
            }
            Block::FootnoteDefinition(definition) => {
                highlight_code_blocks(&mut definition.blocks);
                None
            }
            Block::GitHubAlert(alert) => {
                highlight_code_blocks(&mut alert.blocks);
                None
            }
            _ => None,
        };

        if let Some(html) = replacement {
            *block = Block::HtmlBlock(html);
        }
    }
}

fn codehilite_markup(code_block: &CodeBlock) -> String {
    let language = match &code_block.kind {
        CodeBlockKind::Fenced { info } => info
            .as_deref()
            .and_then(|info| info.split_whitespace().next()),
        CodeBlockKind::Indented => None,
    };

    let class = language
        .map(|lang| format!(" class=\"language-{}\"", escape_html(lang)))
        .unwrap_or_default();

    format!(
        "<pre class=\"codehilite\"><code{class}>{}</code></pre>",
        escape_html(&code_block.literal)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
