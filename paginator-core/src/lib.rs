/// Who may operate a session's controls.
pub mod access;
/// Construction-time paginator settings.
pub mod config;
/// Navigation controls and their enablement snapshots.
pub mod controls;
/// Error types shared by every paginator component.
pub mod error;
/// Page chunking.
pub mod page;
/// Page renderers.
pub mod render;
/// Session lifecycle.
pub mod session;
/// Message transport seam.
pub mod sink;

pub use access::{AccessCheck, Invocation};
pub use config::{JoinMode, PaginatorConfig, StopAction, StopReason};
pub use controls::{Control, ControlAction, ControlKind, ControlSet, Target};
pub use error::{ConfigError, PaginatorError, PaginatorResult, SinkError};
pub use page::{Page, paginate, total_pages};
pub use render::{
    Codeblock, LazyRenderer, PageLoader, PageRenderer, TextRenderer, page_loader, render_text,
};
pub use session::{Activation, Interactive, PaginationSession};
pub use sink::{EXPIRED_NOTICE, EditContent, MessageSink};
