//! Pagination UI component builders.

use paginator_core::{Control, ControlKind, ControlSet};
use twilight_model::channel::message::{
    EmojiReactionType,
    component::{ActionRow, Button, ButtonStyle, Component},
};

use crate::token::build_custom_id;

/// Build one action row holding a button per control.
pub fn build_control_components(session_key: u64, controls: &ControlSet) -> Vec<Component> {
    if controls.is_empty() {
        return vec![];
    }

    let buttons = controls
        .iter()
        .map(|control| Component::Button(build_button(session_key, control)))
        .collect();

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: buttons,
    })]
}

fn build_button(session_key: u64, control: &Control) -> Button {
    let style = match control.kind {
        ControlKind::Stop => ButtonStyle::Danger,
        ControlKind::Label => ButtonStyle::Primary,
        _ => ButtonStyle::Secondary,
    };

    Button {
        id: None,
        custom_id: Some(build_custom_id(session_key, control.kind)),
        disabled: !control.enabled,
        emoji: control
            .kind
            .emoji()
            .map(|name| EmojiReactionType::Unicode {
                name: name.to_owned(),
            }),
        label: control.label.clone(),
        style,
        url: None,
        sku_id: None,
    }
}
