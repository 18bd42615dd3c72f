//! The page template every post is embedded into.
//!
//! Values are interpolated as raw markup. Titles, dates, fragments, and the
//! rendered body are authored by the site owner and may carry intentional HTML,
//! so nothing here is escaped.

use crate::fragments::Fragments;
use crate::frontmatter::Frontmatter;

/// Builds the complete HTML document for a post.
pub fn assemble(frontmatter: &Frontmatter, body_html: &str, fragments: &Fragments) -> String {
    let title = frontmatter.title();
    let date = frontmatter.date();
    let Fragments {
        stylesheet,
        navbar,
        footer,
    } = fragments;

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{stylesheet}</style>
</head>
<body>
    <div id="navbar">{navbar}</div>
    <main style="max-width:1200px;margin:0 auto;padding:60px 16px;">
        <article>
            <h1>{title}</h1>
            <p style="color:#aaa;font-size:14px;">{date}</p>
            <div>{body_html}</div>
        </article>
    </main>
    <div id="footer">{footer}</div>
</body>
</html>"#
    )
}
