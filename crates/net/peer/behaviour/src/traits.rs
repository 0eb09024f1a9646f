//! Capability traits: reporting, inspection, and the connection manager seam.

use std::fmt::Debug;
use std::hash::Hash;

use auto_impl::auto_impl;

use crate::behaviour::{ErrorBehaviour, GoodBehaviour};
use crate::error::PeerBehaviourError;

/// Blanket-implemented for any type with Clone + Eq + Hash + Send + Sync + Debug.
pub trait BehaviourPeerId: Clone + Eq + Hash + Send + Sync + Debug + 'static {}

impl<T> BehaviourPeerId for T where T: Clone + Eq + Hash + Send + Sync + Debug + 'static {}

/// Lets reactors signal the behaviour of peers synchronously.
///
/// Reactors are handed an implementation rather than constructing one, so the
/// same reactor can drive a live connection manager ([`SwitchPeerBehaviour`])
/// or an in-memory log ([`RecordingPeerBehaviour`]). Both methods return only
/// once the report has been applied.
///
/// [`SwitchPeerBehaviour`]: crate::SwitchPeerBehaviour
/// [`RecordingPeerBehaviour`]: crate::RecordingPeerBehaviour
#[auto_impl(&, Box, Arc)]
pub trait PeerBehaviour<Id: BehaviourPeerId>: Send + Sync {
    /// Report a positive contribution by `peer`.
    fn behaved(&self, peer: &Id, reason: GoodBehaviour) -> Result<(), PeerBehaviourError>;

    /// Report erroneous behaviour by `peer`.
    fn errored(&self, peer: &Id, reason: ErrorBehaviour) -> Result<(), PeerBehaviourError>;
}

/// Read access to behaviour recorded by a [`PeerBehaviour`] implementation.
///
/// Returned vectors are copies in report order; a peer with no reports yields
/// an empty vector.
#[auto_impl(&, Box, Arc)]
pub trait GettablePeerBehaviour<Id: BehaviourPeerId>: Send + Sync {
    /// Errors reported for `peer`, oldest first.
    fn get_error_behaviours(&self, peer: &Id) -> Vec<ErrorBehaviour>;

    /// Good behaviour reported for `peer`, oldest first.
    fn get_good_behaviours(&self, peer: &Id) -> Vec<GoodBehaviour>;
}

/// The slice of a connection manager (switch) that behaviour reports act on.
///
/// `stop_peer_for_error` and `mark_peer_as_good` are fire-and-forget and must
/// be safe to call on a peer that was removed after `peer` returned it.
#[auto_impl(&, Box, Arc)]
pub trait ConnectionManager<Id: BehaviourPeerId>: Send + Sync {
    /// Handle to a live peer connection.
    type Peer;

    /// Look up an active peer.
    fn peer(&self, id: &Id) -> Option<Self::Peer>;

    /// Terminate the peer's connection, citing `reason` as the cause.
    fn stop_peer_for_error(&self, peer: Self::Peer, reason: ErrorBehaviour);

    /// Promote the peer to trusted.
    fn mark_peer_as_good(&self, peer: Self::Peer);
}
