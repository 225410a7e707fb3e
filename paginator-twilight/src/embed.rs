use std::fmt::Display;

use async_trait::async_trait;
use paginator_core::{Page, PageRenderer};
use tracing::error;
use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build a standard paginated embed with an optional footer suffix.
///
/// `page` is 1-based. The page counter is only shown when there is more
/// than one page.
pub fn build_paginated_embed(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> Embed {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    let footer_text = if total_pages > 1 {
        match footer_note {
            Some(note) if !note.is_empty() => format!("Page {page}/{total_pages} \u{2022} {note}"),
            _ => format!("Page {page}/{total_pages}"),
        }
    } else {
        footer_note.unwrap_or_default().to_owned()
    };

    let mut builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    if !footer_text.is_empty() {
        builder = builder.footer(EmbedFooterBuilder::new(footer_text).build());
    }

    match builder.clone().validate() {
        Ok(valid) => valid.build(),
        Err(source) => {
            // Let Discord reject it so the failure surfaces through the sink.
            error!(?source, title, page, "paginated embed failed validation");
            builder.build()
        }
    }
}

/// Renders each page as an embed: bulleted items plus a page footer.
#[derive(Debug, Clone)]
pub struct EmbedRenderer {
    title: String,
    footer_note: Option<String>,
}

impl EmbedRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            footer_note: None,
        }
    }

    pub fn footer_note(mut self, note: impl Into<String>) -> Self {
        self.footer_note = Some(note.into());
        self
    }
}

#[async_trait]
impl<T: Display + Sync> PageRenderer<T> for EmbedRenderer {
    type Content = Embed;

    async fn render(&mut self, index: usize, page_count: usize, page: &Page<T>) -> Embed {
        let description = match page {
            Page::Text(text) => text.clone(),
            Page::Items(items) => items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
        };

        build_paginated_embed(
            &self.title,
            description,
            index + 1,
            page_count,
            self.footer_note.as_deref(),
        )
    }
}
