//! Component-interaction handling for pagination controls.

use paginator_core::Activation;
use tracing::{debug, error};
use twilight_http::Client;
use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
};

use crate::registry::SessionRegistry;
use crate::token::parse_custom_id;

/// Acknowledge a component press without changing the message.
pub async fn defer_component_update(
    http: &Client,
    interaction: &InteractionCreate,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::DeferredUpdateMessage,
        data: None,
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Route a pagination button press to its session.
///
/// Returns `Ok(None)` when the interaction is not a pagination control.
/// Every recognised press is acknowledged with a deferred update, so
/// rejected presses stay invisible to the actor.
pub async fn handle_component_interaction(
    http: &Client,
    registry: &SessionRegistry,
    interaction: &InteractionCreate,
) -> anyhow::Result<Option<Activation>> {
    let Some(InteractionData::MessageComponent(component_data)) = interaction.data.as_ref() else {
        return Ok(None);
    };

    let Some(token) = parse_custom_id(&component_data.custom_id) else {
        return Ok(None);
    };

    defer_component_update(http, interaction).await?;

    let Some(actor_id) = interaction.author_id().map(|id| id.get()) else {
        debug!(
            custom_id = %component_data.custom_id,
            "pagination press without an author"
        );
        return Ok(Some(Activation::Unauthorized));
    };

    let Some(session) = registry.get(token.session_key).await else {
        return Ok(Some(Activation::Inactive));
    };

    let activation = match session.activate(actor_id, token.control).await {
        Ok(activation) => activation,
        Err(source) => {
            error!(
                ?source,
                session_key = token.session_key,
                control = token.control.name(),
                "pagination control failed"
            );
            return Err(source.into());
        }
    };

    if matches!(activation, Activation::Stopped | Activation::Inactive) {
        registry.remove(token.session_key).await;
    }

    Ok(Some(activation))
}
