//! Page renderers.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::page::Page;

/// Turns one page into the content a [`MessageSink`](crate::sink::MessageSink) sends.
#[async_trait]
pub trait PageRenderer<T>: Send {
    type Content: Send + Sync;

    /// Render the 0-based page `index` of `page_count`.
    async fn render(&mut self, index: usize, page_count: usize, page: &Page<T>) -> Self::Content;
}

/// Wrapping applied around a rendered text page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Codeblock {
    #[default]
    None,
    Inline,
    Block {
        language: Option<String>,
    },
}

impl Codeblock {
    fn delimiters(&self) -> (String, &'static str) {
        match self {
            Self::None => (String::new(), ""),
            Self::Inline => ("`".to_owned(), "`"),
            Self::Block { language } => (
                format!("```{}\n", language.as_deref().unwrap_or_default()),
                "\n```",
            ),
        }
    }
}

/// Wrap a page body: `start + header + body + footer + end`.
pub fn render_text(header: &str, body: &str, footer: &str, codeblock: &Codeblock) -> String {
    let (start, end) = codeblock.delimiters();
    format!("{start}{header}{body}{footer}{end}")
}

/// Plain-text pages with optional header, footer and code block wrapping.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    pub header: String,
    pub footer: String,
    pub codeblock: Codeblock,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn codeblock(mut self, codeblock: Codeblock) -> Self {
        self.codeblock = codeblock;
        self
    }
}

#[async_trait]
impl<T: Display + Sync> PageRenderer<T> for TextRenderer {
    type Content = String;

    async fn render(&mut self, _index: usize, _page_count: usize, page: &Page<T>) -> String {
        let body = match page {
            Page::Text(text) => text.clone(),
            Page::Items(items) => items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        };

        render_text(&self.header, &body, &self.footer, &self.codeblock)
    }
}

/// Deferred producer of one page body.
pub type PageLoader = Arc<dyn Fn() -> BoxFuture<'static, String> + Send + Sync>;

pub fn page_loader<F, Fut>(load: F) -> PageLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = String> + Send + 'static,
{
    Arc::new(move || Box::pin(load()))
}

/// Renders pages whose bodies are loaded on first view and cached by index.
#[derive(Default)]
pub struct LazyRenderer {
    header: String,
    cache: HashMap<usize, String>,
}

impl LazyRenderer {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            cache: HashMap::new(),
        }
    }

    pub fn cached_pages(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl PageRenderer<PageLoader> for LazyRenderer {
    type Content = String;

    async fn render(
        &mut self,
        index: usize,
        _page_count: usize,
        page: &Page<PageLoader>,
    ) -> String {
        let body = match self.cache.get(&index).cloned() {
            Some(body) => body,
            None => {
                let body = match page {
                    Page::Text(text) => text.clone(),
                    Page::Items(loaders) => {
                        let mut parts = Vec::with_capacity(loaders.len());
                        for load in loaders {
                            parts.push(load().await);
                        }
                        parts.join("\n")
                    }
                };
                self.cache.insert(index, body.clone());
                body
            }
        };

        format!("{}{}", self.header, body)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn wrapping_styles() {
        assert_eq!(render_text("H:", "body", ":F", &Codeblock::None), "H:body:F");
        assert_eq!(render_text("", "x", "", &Codeblock::Inline), "`x`");
        assert_eq!(
            render_text(
                "",
                "fn main() {}",
                "",
                &Codeblock::Block {
                    language: Some("rs".to_owned())
                }
            ),
            "```rs\nfn main() {}\n```"
        );
        assert_eq!(
            render_text("", "x", "", &Codeblock::Block { language: None }),
            "```\nx\n```"
        );
    }

    #[tokio::test]
    async fn text_renderer_joins_listed_items_by_line() {
        let mut renderer = TextRenderer::new().header("# ");
        let page = Page::Items(vec![1, 2, 3]);

        let out = renderer.render(0, 1, &page).await;
        assert_eq!(out, "# 1\n2\n3");
    }

    #[tokio::test]
    async fn lazy_renderer_loads_each_page_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let loader = page_loader(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                "loaded".to_owned()
            }
        });

        let mut renderer = LazyRenderer::new("> ");
        let page = Page::Items(vec![loader]);

        assert_eq!(renderer.render(0, 1, &page).await, "> loaded");
        assert_eq!(renderer.render(0, 1, &page).await, "> loaded");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(renderer.cached_pages(), 1);
    }
}
