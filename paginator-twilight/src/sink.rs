//! `MessageSink` over the Discord HTTP API.

use std::sync::Arc;

use async_trait::async_trait;
use paginator_core::{ControlSet, EditContent, MessageSink, SinkError};
use twilight_http::{Client, error::ErrorType};
use twilight_model::{
    channel::message::{component::Component, embed::Embed},
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};

use crate::components::build_control_components;

/// Content and embeds of a paginated message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBody {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
}

impl From<String> for MessageBody {
    fn from(content: String) -> Self {
        Self {
            content: Some(content),
            embeds: vec![],
        }
    }
}

impl From<Embed> for MessageBody {
    fn from(embed: Embed) -> Self {
        Self {
            content: None,
            embeds: vec![embed],
        }
    }
}

/// Sends one session's message into a channel, optionally as a reply.
#[derive(Debug, Clone)]
pub struct TwilightSink {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
    reply_to: Option<Id<MessageMarker>>,
    session_key: u64,
}

impl TwilightSink {
    pub fn new(http: Arc<Client>, channel_id: Id<ChannelMarker>, session_key: u64) -> Self {
        Self {
            http,
            channel_id,
            reply_to: None,
            session_key,
        }
    }

    pub fn reply_to(mut self, message_id: Id<MessageMarker>) -> Self {
        self.reply_to = Some(message_id);
        self
    }

    fn components(&self, controls: Option<&ControlSet>) -> Vec<Component> {
        controls
            .map(|controls| build_control_components(self.session_key, controls))
            .unwrap_or_default()
    }
}

#[async_trait]
impl<C> MessageSink<C> for TwilightSink
where
    C: Clone + Into<MessageBody> + Send + Sync,
{
    type Handle = Id<MessageMarker>;

    async fn send(
        &self,
        content: &C,
        controls: &ControlSet,
    ) -> Result<Id<MessageMarker>, SinkError> {
        let body: MessageBody = content.clone().into();
        let components = self.components(Some(controls));

        let mut request = self
            .http
            .create_message(self.channel_id)
            .embeds(&body.embeds)
            .components(&components);
        if let Some(text) = body.content.as_deref() {
            request = request.content(text);
        }
        if let Some(reply_to) = self.reply_to {
            request = request.reply(reply_to);
        }

        let message = request
            .await
            .map_err(classify)?
            .model()
            .await
            .map_err(SinkError::transport)?;

        Ok(message.id)
    }

    async fn edit(
        &self,
        handle: &Id<MessageMarker>,
        content: EditContent<'_, C>,
        controls: Option<&ControlSet>,
    ) -> Result<(), SinkError> {
        let components = self.components(controls);
        let body = match content {
            EditContent::Unchanged => None,
            EditContent::Page(page) => Some(page.clone().into()),
            EditContent::Notice(notice) => Some(MessageBody::from(notice.to_owned())),
        };

        let mut request = self
            .http
            .update_message(self.channel_id, *handle)
            .components(Some(&components));
        if let Some(body) = body.as_ref() {
            request = request
                .content(body.content.as_deref())
                .embeds(Some(&body.embeds));
        }

        request.await.map_err(classify)?;
        Ok(())
    }

    async fn delete(&self, handle: &Id<MessageMarker>) -> Result<(), SinkError> {
        self.http
            .delete_message(self.channel_id, *handle)
            .await
            .map_err(classify)?;
        Ok(())
    }
}

/// Map an HTTP failure onto the sink's error classes.
pub fn classify(source: twilight_http::Error) -> SinkError {
    let status = match source.kind() {
        ErrorType::Response { status, .. } => Some(status.get()),
        _ => None,
    };

    classify_status(status).unwrap_or_else(|| SinkError::transport(source))
}

fn classify_status(status: Option<u16>) -> Option<SinkError> {
    match status? {
        404 => Some(SinkError::NotFound),
        403 => Some(SinkError::Forbidden),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use twilight_util::builder::embed::EmbedBuilder;

    use super::*;

    #[test]
    fn only_missing_and_forbidden_statuses_are_classified() {
        assert!(matches!(classify_status(Some(404)), Some(SinkError::NotFound)));
        assert!(matches!(classify_status(Some(403)), Some(SinkError::Forbidden)));
        assert!(classify_status(Some(429)).is_none());
        assert!(classify_status(Some(500)).is_none());
        assert!(classify_status(None).is_none());
    }

    #[test]
    fn bodies_from_text_and_embeds() {
        let text = MessageBody::from("hello".to_owned());
        assert_eq!(text.content.as_deref(), Some("hello"));
        assert!(text.embeds.is_empty());

        let embed = EmbedBuilder::new().title("t").build();
        let body = MessageBody::from(embed.clone());
        assert_eq!(body.content, None);
        assert_eq!(body.embeds, vec![embed]);
    }
}
