//! Live behaviour reporting backed by a connection manager.

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::behaviour::{ErrorBehaviour, GoodBehaviour};
use crate::error::PeerBehaviourError;
use crate::metrics::BehaviourMetrics;
use crate::traits::{BehaviourPeerId, ConnectionManager, PeerBehaviour};

/// Forwards behaviour reports to a [`ConnectionManager`].
///
/// Holds no peer state of its own: every report looks the peer up in the
/// manager and, if present, asks the manager to act. The lookup and the
/// action are not atomic as a pair; the manager tolerates acting on a peer
/// that disconnected in between.
///
/// `M` is usually a shared handle such as `Arc<Switch>` or `&Switch`; the
/// manager must outlive every report made through this value.
pub struct SwitchPeerBehaviour<Id: BehaviourPeerId, M: ConnectionManager<Id>> {
    manager: M,
    metrics: BehaviourMetrics,
    _marker: PhantomData<fn(Id)>,
}

impl<Id: BehaviourPeerId, M: ConnectionManager<Id>> SwitchPeerBehaviour<Id, M> {
    pub fn new(manager: M) -> Self {
        Self {
            manager,
            metrics: BehaviourMetrics::default(),
            _marker: PhantomData,
        }
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    fn lookup(&self, id: &Id) -> Result<M::Peer, PeerBehaviourError> {
        self.manager.peer(id).ok_or_else(|| {
            trace!(peer = ?id, "behaviour reported for unknown peer");
            self.metrics.inc_peer_not_found();
            PeerBehaviourError::peer_not_found(id)
        })
    }
}

impl<Id: BehaviourPeerId, M: ConnectionManager<Id>> PeerBehaviour<Id>
    for SwitchPeerBehaviour<Id, M>
{
    /// Marks the peer as good. Every [`GoodBehaviour`] promotes the same way.
    fn behaved(&self, peer: &Id, reason: GoodBehaviour) -> Result<(), PeerBehaviourError> {
        let handle = self.lookup(peer)?;

        debug!(?peer, %reason, "marking peer as good");
        self.manager.mark_peer_as_good(handle);
        self.metrics.inc_behaved();

        Ok(())
    }

    /// Stops the peer for `reason`. Returns once the stop has been requested,
    /// not once the connection is gone.
    fn errored(&self, peer: &Id, reason: ErrorBehaviour) -> Result<(), PeerBehaviourError> {
        let handle = self.lookup(peer)?;

        debug!(?peer, %reason, "stopping peer for error");
        self.manager.stop_peer_for_error(handle, reason);
        self.metrics.inc_errored();

        Ok(())
    }
}

impl<Id: BehaviourPeerId, M: ConnectionManager<Id> + Clone> Clone for SwitchPeerBehaviour<Id, M> {
    fn clone(&self) -> Self {
        Self {
            manager: self.manager.clone(),
            metrics: self.metrics.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Id: BehaviourPeerId, M: ConnectionManager<Id>> std::fmt::Debug
    for SwitchPeerBehaviour<Id, M>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchPeerBehaviour").finish_non_exhaustive()
    }
}
