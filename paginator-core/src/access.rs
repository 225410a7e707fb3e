use std::fmt;
use std::sync::Arc;

/// The command invocation a session was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub author_id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
}

type Predicate = dyn Fn(u64, &Invocation) -> bool + Send + Sync;

/// Decides who may operate a session's controls.
#[derive(Clone, Default)]
pub enum AccessCheck {
    /// Only the invoking author.
    #[default]
    AuthorOnly,
    Custom(Arc<Predicate>),
}

impl AccessCheck {
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(u64, &Invocation) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    pub fn allows(&self, actor_id: u64, invocation: &Invocation) -> bool {
        match self {
            Self::AuthorOnly => actor_id == invocation.author_id,
            Self::Custom(predicate) => predicate(actor_id, invocation),
        }
    }
}

impl fmt::Debug for AccessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthorOnly => f.write_str("AuthorOnly"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVOCATION: Invocation = Invocation {
        author_id: 42,
        channel_id: 7,
        guild_id: Some(1),
    };

    #[test]
    fn default_check_only_allows_author() {
        let check = AccessCheck::default();
        assert!(check.allows(42, &INVOCATION));
        assert!(!check.allows(43, &INVOCATION));
    }

    #[test]
    fn custom_predicate_sees_actor_and_invocation() {
        let check = AccessCheck::custom(|actor, invocation| {
            actor == invocation.author_id || invocation.guild_id == Some(actor)
        });
        assert!(check.allows(1, &INVOCATION));
        assert!(!check.allows(2, &INVOCATION));
    }
}
