//! Errors surfaced to reactors by behaviour reports.

use std::fmt::Debug;

/// Errors returned by [`PeerBehaviour`](crate::PeerBehaviour) implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeerBehaviourError {
    /// The connection manager does not know the peer. The peer most likely
    /// disconnected already; there is nothing left to act upon.
    #[error("peer not found: {0}")]
    PeerNotFound(String),
}

impl PeerBehaviourError {
    pub(crate) fn peer_not_found(peer: &impl Debug) -> Self {
        Self::PeerNotFound(format!("{peer:?}"))
    }

    /// Whether the report targeted a peer the connection manager does not know.
    pub fn is_peer_not_found(&self) -> bool {
        matches!(self, Self::PeerNotFound(_))
    }
}

/// Error returned when a numeric code does not name a behaviour tag.
pub type InvalidBehaviourCode<T> = num_enum::TryFromPrimitiveError<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_not_found_display() {
        let err = PeerBehaviourError::peer_not_found(&"node-7");
        assert_eq!(err.to_string(), "peer not found: \"node-7\"");
        assert!(err.is_peer_not_found());
    }
}
