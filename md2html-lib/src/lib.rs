//! `md2html-lib` turns a Markdown post into a standalone HTML page for a
//! static site, powering the `md2html` CLI.
//!
//! A post may start with a `---` delimited block of `key: value` lines. The
//! body is rendered to HTML and embedded into a fixed page template together
//! with the site's shared stylesheet, navbar, and footer fragments.
//!
//! # Example
//!
//! ```rust
//! use md2html_lib::fragments::Fragments;
//! use md2html_lib::render::RendererConfig;
//!
//! # fn demo() -> Result<(), md2html_lib::error::ConvertError> {
//! let page = md2html_lib::convert_str(
//!     "---\ntitle: Hello\ndate: 2024-01-01\n---\n# Hi there\n",
//!     &Fragments::default(),
//!     &RendererConfig::default(),
//! )?;
//!
//! assert_eq!(page.frontmatter.title(), "Hello");
//! assert!(page.html.contains("<title>Hello</title>"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fragments;
pub mod frontmatter;
pub mod render;
pub mod template;

use crate::error::ConvertError;
use crate::fragments::{Fragments, SiteLayout};
use crate::frontmatter::Frontmatter;
use crate::render::RendererConfig;
use std::fs;
use std::path::Path;

/// A converted post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Metadata extracted from the post header, or the defaults.
    pub frontmatter: Frontmatter,
    /// The complete HTML document.
    pub html: String,
}

/// Converts Markdown source into a complete page.
pub fn convert_str(
    source: &str,
    fragments: &Fragments,
    renderer: &RendererConfig,
) -> Result<Page, ConvertError> {
    let parsed = frontmatter::extract(source, &Frontmatter::defaults());
    if !parsed.has_header {
        log::debug!("No frontmatter block found, using default metadata");
    }

    let body_html = render::render(&parsed.body, renderer)?;
    let html = template::assemble(&parsed.frontmatter, &body_html, fragments);

    Ok(Page {
        frontmatter: parsed.frontmatter,
        html,
    })
}

/// Converts the Markdown file at `input` and writes the page to `output`.
///
/// Fragments are loaded from `layout`. An existing output file is replaced.
pub fn convert_file(input: &Path, output: &Path, layout: &SiteLayout) -> Result<Page, ConvertError> {
    log::info!("Reading {}", input.display());
    let source = fs::read_to_string(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    log::debug!("Loading fragments from {}", layout.root().display());
    let fragments = layout.load()?;

    let page = convert_str(&source, &fragments, &RendererConfig::default())?;
    log::info!("Title: {}", page.frontmatter.title());

    write_output(output, &page.html)?;
    log::info!("Wrote {}", output.display());

    Ok(page)
}

fn write_output(path: &Path, contents: &str) -> Result<(), ConvertError> {
    fs::write(path, contents).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
