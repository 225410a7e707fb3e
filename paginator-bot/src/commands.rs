//! Message commands that open pagination sessions.

use std::{sync::Arc, time::Duration};

use paginator_core::{
    Codeblock, ConfigError, Invocation, JoinMode, LazyRenderer, Page, PageLoader, PageRenderer,
    PaginationSession, PaginatorConfig, StopAction, TextRenderer, page_loader, paginate,
};
use paginator_twilight::{EmbedRenderer, MessageBody, TwilightSink};
use tracing::info;
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::context::Context;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

const SAMPLE_ITEMS: usize = 24;
const LAZY_PAGES: usize = 5;
const LAZY_LOAD_DELAY: Duration = Duration::from_millis(250);

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    CommandMeta {
        name: "pages",
        desc: "Page through text in a code block.",
        usage: "!pages [page]",
    },
    CommandMeta {
        name: "embeds",
        desc: "Page through a bulleted embed list.",
        usage: "!embeds [page]",
    },
    CommandMeta {
        name: "help",
        desc: "List the pagination demo commands.",
        usage: "!help",
    },
    CommandMeta {
        name: "lazy",
        desc: "Page through pages that load on first view.",
        usage: "!lazy",
    },
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let Some(content) = msg.content.trim().strip_prefix(COMMAND_PREFIX) else {
        return Ok(());
    };

    let mut command_and_rest = content.trim().splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match cmd.as_str() {
        "pages" => run_pages(&ctx, &msg, arg1).await,
        "embeds" => run_embeds(&ctx, &msg, arg1).await,
        "lazy" => run_lazy(&ctx, &msg).await,
        "help" => run_help(&ctx, &msg).await,
        _ => Ok(()),
    }
}

async fn run_pages(ctx: &Context, msg: &MessageCreate, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(initial_page) = parse_one_based_page(arg1) else {
        return reply_usage(ctx, msg, "pages").await;
    };

    let config = session_config(ctx)
        .join(JoinMode::Joined {
            separator: "\n".to_owned(),
        })
        .initial_page(initial_page);
    let renderer = TextRenderer::new()
        .header("Sample items\n")
        .codeblock(Codeblock::Block {
            language: Some("md".to_owned()),
        });

    let pages = match paginate(sample_items(), config.per_page, &config.join) {
        Ok(pages) => pages,
        Err(source) => return reply_config_error(ctx, msg, source).await,
    };
    launch(ctx, msg, pages, config, renderer).await
}

async fn run_embeds(ctx: &Context, msg: &MessageCreate, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(initial_page) = parse_one_based_page(arg1) else {
        return reply_usage(ctx, msg, "embeds").await;
    };

    let config = session_config(ctx)
        .join(JoinMode::Listed)
        .initial_page(initial_page)
        .stop_action(StopAction::Disable);
    let renderer = EmbedRenderer::new("Pagination Test").footer_note("\u{23F9} to close");

    let pages = match paginate(sample_items(), config.per_page, &config.join) {
        Ok(pages) => pages,
        Err(source) => return reply_config_error(ctx, msg, source).await,
    };
    launch(ctx, msg, pages, config, renderer).await
}

async fn run_help(ctx: &Context, msg: &MessageCreate) -> anyhow::Result<()> {
    let out = COMMANDS
        .iter()
        .map(|meta| format!("`{}` {}", meta.usage, meta.desc))
        .collect::<Vec<_>>()
        .join("\n");

    ctx.http.create_message(msg.channel_id).content(&out).await?;
    Ok(())
}

async fn run_lazy(ctx: &Context, msg: &MessageCreate) -> anyhow::Result<()> {
    let pages: Vec<Page<PageLoader>> = (1..=LAZY_PAGES)
        .map(|number| {
            Page::Items(vec![page_loader(move || async move {
                tokio::time::sleep(LAZY_LOAD_DELAY).await;
                format!("Loaded page #{number} on demand.")
            })])
        })
        .collect();

    let config = session_config(ctx)
        .per_page(1)
        .join(JoinMode::Listed)
        .stop_action(StopAction::Delete)
        .timeout_action(StopAction::Replace);

    // Boxed as a `Send` future so the spawned handler's `Send` check sees
    // concrete lifetimes (works around a rustc higher-ranked lifetime limitation).
    let fut: std::pin::Pin<Box<dyn std::future::Future<Output = anyhow::Result<()>> + Send + '_>> =Box::pin(launch(
        ctx,
        msg,
        pages,
        config,
        LazyRenderer::new("**Lazy pages**\n"),
    ));
    fut.await
}

/// Start a session on a reply to `msg` and register it for button routing.
async fn launch<T, R>(
    ctx: &Context,
    msg: &MessageCreate,
    pages: Vec<Page<T>>,
    config: PaginatorConfig,
    renderer: R,
) -> anyhow::Result<()>
where
    T: Send + Sync + 'static,
    R: PageRenderer<T> + 'static,
    R::Content: Clone + Into<MessageBody>,
{
    let key = ctx.sessions.allocate_key();
    let sink = TwilightSink::new(Arc::clone(&ctx.http), msg.channel_id, key).reply_to(msg.id);
    let invocation = Invocation {
        author_id: msg.author.id.get(),
        channel_id: msg.channel_id.get(),
        guild_id: msg.guild_id.map(|id| id.get()),
    };

    let session = match PaginationSession::with_pages(pages, config, renderer, sink, invocation) {
        Ok(session) => Arc::new(session),
        Err(source) => return reply_config_error(ctx, msg, source).await,
    };

    session.start().await?;
    info!(
        session_key = key,
        pages = session.page_count(),
        author_id = invocation.author_id,
        "pagination session opened"
    );
    ctx.sessions.insert(key, session).await;

    Ok(())
}

fn session_config(ctx: &Context) -> PaginatorConfig {
    PaginatorConfig::default()
        .per_page(ctx.config.per_page)
        .timeout(ctx.config.timeout)
}

fn sample_items() -> Vec<String> {
    (1..=SAMPLE_ITEMS)
        .map(|index| format!("Sample pagination item #{index}"))
        .collect()
}

/// Parse a one-based page argument into a 0-based index.
///
/// A missing argument selects the first page; `0` and non-numbers are rejected.
fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .and_then(|page| page.checked_sub(1)),
        None => Some(0),
    }
}

async fn reply_usage(ctx: &Context, msg: &MessageCreate, name: &str) -> anyhow::Result<()> {
    let usage = COMMANDS
        .iter()
        .find(|meta| meta.name == name)
        .map(|meta| format!("Usage: `{}` (page starts at 1)", meta.usage))
        .unwrap_or_default();

    ctx.http
        .create_message(msg.channel_id)
        .content(&usage)
        .await?;
    Ok(())
}

async fn reply_config_error(
    ctx: &Context,
    msg: &MessageCreate,
    source: ConfigError,
) -> anyhow::Result<()> {
    let out = match source {
        ConfigError::InitialPageOutOfRange { page, total } => format!(
            "Page {} does not exist. Available pages: 1-{}.",
            page + 1,
            total
        ),
        other => format!("Unable to paginate: {other}."),
    };

    ctx.http.create_message(msg.channel_id).content(&out).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_pages_become_indices() {
        assert_eq!(parse_one_based_page(None), Some(0));
        assert_eq!(parse_one_based_page(Some("1")), Some(0));
        assert_eq!(parse_one_based_page(Some("4")), Some(3));
        assert_eq!(parse_one_based_page(Some("0")), None);
        assert_eq!(parse_one_based_page(Some("two")), None);
    }

    #[test]
    fn every_command_has_metadata() {
        for name in ["pages", "embeds", "help", "lazy"] {
            assert!(COMMANDS.iter().any(|meta| meta.name == name));
        }
    }
}
