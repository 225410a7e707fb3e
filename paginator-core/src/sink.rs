//! Message transport seam.

use async_trait::async_trait;

use crate::controls::ControlSet;
use crate::error::SinkError;

/// Text shown in place of the page when a session stops with
/// [`StopAction::Replace`](crate::config::StopAction::Replace).
pub const EXPIRED_NOTICE: &str = "*This message has expired*";

/// Content change requested by an edit.
#[derive(Debug, Clone, Copy)]
pub enum EditContent<'a, C> {
    /// Keep whatever the message currently shows.
    Unchanged,
    /// Show a freshly rendered page.
    Page(&'a C),
    /// Replace everything with a plain-text notice.
    Notice(&'a str),
}

/// Sends and edits the single message a session is bound to.
///
/// `C` is the rendered page type produced by the session's renderer.
#[async_trait]
pub trait MessageSink<C: Sync>: Send + Sync {
    type Handle: Clone + Send + Sync;

    async fn send(&self, content: &C, controls: &ControlSet) -> Result<Self::Handle, SinkError>;

    /// Edit the message. `controls: None` removes every control.
    async fn edit(
        &self,
        handle: &Self::Handle,
        content: EditContent<'_, C>,
        controls: Option<&ControlSet>,
    ) -> Result<(), SinkError>;

    async fn delete(&self, handle: &Self::Handle) -> Result<(), SinkError>;
}
