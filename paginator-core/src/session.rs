//! Pagination session lifecycle: start, navigate, stop.

use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::{sync::Mutex, task::AbortHandle};
use tracing::{debug, error, warn};

use crate::access::{AccessCheck, Invocation};
use crate::config::{PaginatorConfig, StopAction, StopReason};
use crate::controls::{ControlAction, ControlKind, ControlSet, Target};
use crate::error::{ConfigError, PaginatorError, PaginatorResult, SinkError};
use crate::page::{Page, paginate};
use crate::render::PageRenderer;
use crate::sink::{EXPIRED_NOTICE, EditContent, MessageSink};

/// Result of a user pressing one of the session's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The actor failed the access check. Nothing changed.
    Unauthorized,
    /// The session has no live message.
    Inactive,
    /// Display-only, disabled or boundary control. Nothing changed.
    Ignored,
    Navigated(usize),
    Stopped,
}

/// Type-erased view of a session for interaction routing.
#[async_trait]
pub trait Interactive: Send + Sync {
    async fn activate(&self, actor_id: u64, kind: ControlKind) -> PaginatorResult<Activation>;

    async fn is_active(&self) -> bool;
}

struct SessionState<R, H> {
    renderer: R,
    current_page: usize,
    message: Option<H>,
    controls: Option<ControlSet>,
    stop_reason: Option<StopReason>,
    timer: Option<AbortHandle>,
}

/// Owns paging state and the single message it is displayed on.
///
/// Every operation runs under one async lock, so a timeout firing while a
/// user presses a control is resolved by whichever gets the lock first; the
/// loser observes an inactive session and does nothing.
pub struct PaginationSession<T, R, S>
where
    R: PageRenderer<T>,
    S: MessageSink<R::Content>,
{
    pages: Vec<Page<T>>,
    config: PaginatorConfig,
    invocation: Invocation,
    access: AccessCheck,
    sink: S,
    state: Mutex<SessionState<R, S::Handle>>,
}

impl<T, R, S> PaginationSession<T, R, S>
where
    T: Send + Sync + 'static,
    R: PageRenderer<T> + 'static,
    S: MessageSink<R::Content> + 'static,
{
    /// Paginate `items` according to `config`.
    pub fn new(
        items: Vec<T>,
        config: PaginatorConfig,
        renderer: R,
        sink: S,
        invocation: Invocation,
    ) -> Result<Self, ConfigError>
    where
        T: Display,
    {
        let pages = paginate(items, config.per_page, &config.join)?;
        Self::with_pages(pages, config, renderer, sink, invocation)
    }

    /// Build a session over already-split pages.
    pub fn with_pages(
        pages: Vec<Page<T>>,
        config: PaginatorConfig,
        renderer: R,
        sink: S,
        invocation: Invocation,
    ) -> Result<Self, ConfigError> {
        if pages.is_empty() {
            return Err(ConfigError::EmptyItems);
        }
        if config.initial_page >= pages.len() {
            return Err(ConfigError::InitialPageOutOfRange {
                page: config.initial_page,
                total: pages.len(),
            });
        }

        let state = SessionState {
            renderer,
            current_page: config.initial_page,
            message: None,
            controls: None,
            stop_reason: None,
            timer: None,
        };

        Ok(Self {
            pages,
            config,
            invocation,
            access: AccessCheck::default(),
            sink,
            state: Mutex::new(state),
        })
    }

    pub fn access_check(mut self, access: AccessCheck) -> Self {
        self.access = access;
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub async fn current_page(&self) -> usize {
        self.state.lock().await.current_page
    }

    pub async fn is_active(&self) -> bool {
        self.state.lock().await.message.is_some()
    }

    pub async fn stop_reason(&self) -> Option<StopReason> {
        self.state.lock().await.stop_reason
    }

    /// Controls currently attached to the message, if any.
    pub async fn controls(&self) -> Option<ControlSet> {
        self.state.lock().await.controls.clone()
    }

    /// Send the message for the current page and arm the timeout.
    ///
    /// Does nothing while a message is live or once the session has stopped.
    pub async fn start(self: &Arc<Self>) -> PaginatorResult<()> {
        let mut state = self.state.lock().await;
        if state.message.is_some() || state.stop_reason.is_some() {
            debug!("pagination session already started");
            return Ok(());
        }

        let page_count = self.page_count();
        let page = state.current_page;
        let controls = ControlSet::snapshot(page, page_count);
        let content = self.render(&mut state, page).await?;

        let handle = self.sink.send(&content, &controls).await?;

        state.message = Some(handle);
        state.controls = Some(controls);
        state.timer = Some(self.spawn_timeout());

        debug!(
            page,
            page_count,
            author_id = self.invocation.author_id,
            "pagination session started"
        );
        Ok(())
    }

    /// Show the 0-based `page`.
    pub async fn navigate_to(&self, page: usize) -> PaginatorResult<()> {
        let mut state = self.state.lock().await;
        self.navigate_locked(&mut state, page).await
    }

    pub async fn first(&self) -> PaginatorResult<()> {
        self.shortcut(Target::First).await
    }

    pub async fn previous(&self) -> PaginatorResult<()> {
        self.shortcut(Target::Offset(-1)).await
    }

    pub async fn next(&self) -> PaginatorResult<()> {
        self.shortcut(Target::Offset(1)).await
    }

    pub async fn last(&self) -> PaginatorResult<()> {
        self.shortcut(Target::Last).await
    }

    /// Apply the stop action configured for `reason` and release the message.
    pub async fn stop(&self, reason: StopReason) -> PaginatorResult<()> {
        let mut state = self.state.lock().await;
        self.stop_locked(&mut state, reason).await
    }

    /// Handle a control press by `actor_id`.
    pub async fn activate(&self, actor_id: u64, kind: ControlKind) -> PaginatorResult<Activation> {
        if !self.access.allows(actor_id, &self.invocation) {
            debug!(actor_id, control = kind.name(), "rejected unauthorized control press");
            return Ok(Activation::Unauthorized);
        }

        let mut state = self.state.lock().await;
        if state.message.is_none() {
            return Ok(Activation::Inactive);
        }

        let enabled = state
            .controls
            .as_ref()
            .is_some_and(|controls| controls.is_enabled(kind));
        if !enabled {
            debug!(actor_id, control = kind.name(), "ignored press on inert control");
            return Ok(Activation::Ignored);
        }

        match kind.action() {
            ControlAction::Label => Ok(Activation::Ignored),
            ControlAction::Stop => {
                self.stop_locked(&mut state, StopReason::UserStopped).await?;
                Ok(Activation::Stopped)
            }
            ControlAction::Navigate(target) => {
                match target.resolve(state.current_page, self.page_count()) {
                    Some(page) => {
                        self.navigate_locked(&mut state, page).await?;
                        Ok(Activation::Navigated(page))
                    }
                    None => Ok(Activation::Ignored),
                }
            }
        }
    }

    async fn shortcut(&self, target: Target) -> PaginatorResult<()> {
        let mut state = self.state.lock().await;
        if state.message.is_none() {
            return Ok(());
        }

        match target.resolve(state.current_page, self.page_count()) {
            Some(page) => self.navigate_locked(&mut state, page).await,
            None => {
                debug!(
                    ?target,
                    page = state.current_page,
                    "navigation target outside page range, ignoring"
                );
                Ok(())
            }
        }
    }

    async fn navigate_locked(
        &self,
        state: &mut SessionState<R, S::Handle>,
        page: usize,
    ) -> PaginatorResult<()> {
        let Some(handle) = state.message.clone() else {
            return Ok(());
        };

        let page_count = self.page_count();
        let content = self.render(state, page).await?;
        let controls = ControlSet::snapshot(page, page_count);

        state.current_page = page;
        state.controls = Some(controls.clone());

        let result = self
            .sink
            .edit(&handle, EditContent::Page(&content), Some(&controls))
            .await;
        swallow_missing(result, "edit")?;

        debug!(page, page_count, "pagination session navigated");
        Ok(())
    }

    async fn stop_locked(
        &self,
        state: &mut SessionState<R, S::Handle>,
        reason: StopReason,
    ) -> PaginatorResult<()> {
        let Some(handle) = state.message.take() else {
            return Ok(());
        };

        let action = self.config.action_for(reason);
        let result = match action {
            StopAction::Disable => {
                let controls = state
                    .controls
                    .take()
                    .unwrap_or_else(|| ControlSet::snapshot(state.current_page, self.page_count()))
                    .disabled();
                self.sink
                    .edit(&handle, EditContent::Unchanged, Some(&controls))
                    .await
            }
            StopAction::Detach => self.sink.edit(&handle, EditContent::Unchanged, None).await,
            StopAction::Replace => {
                self.sink
                    .edit(&handle, EditContent::Notice(EXPIRED_NOTICE), None)
                    .await
            }
            StopAction::Delete => self.sink.delete(&handle).await,
        };

        state.controls = None;
        state.stop_reason = Some(reason);
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }

        debug!(?reason, ?action, "pagination session stopped");
        swallow_missing(result, "stop")
    }

    async fn render(
        &self,
        state: &mut SessionState<R, S::Handle>,
        page: usize,
    ) -> PaginatorResult<R::Content> {
        let page_count = self.page_count();
        let data = self
            .pages
            .get(page)
            .ok_or(PaginatorError::PageOutOfRange {
                page,
                total: page_count,
            })?;

        Ok(state.renderer.render(page, page_count, data).await)
    }

    fn spawn_timeout(self: &Arc<Self>) -> AbortHandle {
        let session = Arc::downgrade(self);
        let timeout = self.config.timeout;

        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;

            let Some(session) = session.upgrade() else {
                return;
            };
            if let Err(source) = session.stop(StopReason::TimedOut).await {
                error!(?source, "failed to stop timed out pagination session");
            }
        })
        .abort_handle()
    }
}

fn swallow_missing(result: Result<(), SinkError>, operation: &'static str) -> PaginatorResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(source) if source.is_ignorable() => {
            warn!(?source, operation, "paginated message is gone, ignoring");
            Ok(())
        }
        Err(source) => Err(source.into()),
    }
}

#[async_trait]
impl<T, R, S> Interactive for PaginationSession<T, R, S>
where
    T: Send + Sync + 'static,
    R: PageRenderer<T> + 'static,
    S: MessageSink<R::Content> + 'static,
{
    async fn activate(&self, actor_id: u64, kind: ControlKind) -> PaginatorResult<Activation> {
        PaginationSession::activate(self, actor_id, kind).await
    }

    async fn is_active(&self) -> bool {
        PaginationSession::is_active(self).await
    }
}
