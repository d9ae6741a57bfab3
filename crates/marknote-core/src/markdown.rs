//! Markdown to HTML rendering boundary.
//!
//! The editor never renders markdown itself; it is handed a
//! [`MarkdownRenderer`] and shows whatever HTML that produces.

use comrak::{markdown_to_html, Options};

/// Converts markdown source into an HTML fragment
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, markdown: &str) -> String {
        self(markdown)
    }
}

/// GitHub-flavoured renderer backed by `comrak`.
///
/// Enables tables, bare-URL autolinks, strikethrough and task lists.
/// Raw HTML in notes is escaped rather than passed through.
pub struct GfmRenderer {
    options: Options,
}

impl GfmRenderer {
    #[must_use]
    pub fn new() -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.strikethrough = true;
        options.extension.tasklist = true;
        Self { options }
    }
}

impl Default for GfmRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for GfmRenderer {
    fn render(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.options)
    }
}
