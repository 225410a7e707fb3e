//! Button custom-id encoding for registered pagination sessions.

use paginator_core::ControlKind;

const TOKEN_PREFIX: &str = "pgs";

/// Parsed custom id of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlToken {
    /// Registry key of the owning session.
    pub session_key: u64,
    pub control: ControlKind,
}

/// Build the custom id carried by a session's control button.
pub fn build_custom_id(session_key: u64, control: ControlKind) -> String {
    format!("{TOKEN_PREFIX}:{session_key}:{}", control.name())
}

/// Whether a custom id belongs to a pagination session at all.
pub fn is_pagination_custom_id(custom_id: &str) -> bool {
    custom_id
        .split(':')
        .next()
        .is_some_and(|prefix| prefix == TOKEN_PREFIX)
}

/// Parse a pagination control custom id.
pub fn parse_custom_id(custom_id: &str) -> Option<ControlToken> {
    let mut parts = custom_id.split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let session_key = parts.next()?.parse::<u64>().ok()?;
    let control = ControlKind::from_name(parts.next()?)?;

    if parts.next().is_some() {
        return None;
    }

    Some(ControlToken {
        session_key,
        control,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_id_round_trips() {
        let id = build_custom_id(77, ControlKind::Last);
        assert_eq!(id, "pgs:77:last");
        assert_eq!(
            parse_custom_id(&id),
            Some(ControlToken {
                session_key: 77,
                control: ControlKind::Last,
            })
        );
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert_eq!(parse_custom_id("pg:77:last"), None);
        assert_eq!(parse_custom_id("pgs:abc:last"), None);
        assert_eq!(parse_custom_id("pgs:77:jump"), None);
        assert_eq!(parse_custom_id("pgs:77:last:extra"), None);
        assert!(is_pagination_custom_id("pgs:1:next"));
        assert!(!is_pagination_custom_id("terminate:confirm"));
    }
}
