/// Button components built from control sets.
pub mod components;
/// Embed page rendering.
pub mod embed;
/// Component-interaction routing.
pub mod interaction;
/// Running session registry.
pub mod registry;
/// Discord HTTP message sink.
pub mod sink;
/// Custom-id encoding for control buttons.
pub mod token;

pub use components::build_control_components;
pub use embed::{DEFAULT_EMBED_COLOR, EmbedRenderer, build_paginated_embed};
pub use interaction::{defer_component_update, handle_component_interaction};
pub use registry::SessionRegistry;
pub use sink::{MessageBody, TwilightSink};
pub use token::{ControlToken, build_custom_id, is_pagination_custom_id, parse_custom_id};
