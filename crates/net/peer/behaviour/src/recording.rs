//! In-memory behaviour log for reactor tests.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::trace;

use crate::behaviour::{ErrorBehaviour, GoodBehaviour};
use crate::error::PeerBehaviourError;
use crate::traits::{BehaviourPeerId, GettablePeerBehaviour, PeerBehaviour};

#[derive(Debug)]
struct BehaviourLog<Id: BehaviourPeerId> {
    errors: HashMap<Id, Vec<ErrorBehaviour>>,
    goods: HashMap<Id, Vec<GoodBehaviour>>,
}

impl<Id: BehaviourPeerId> Default for BehaviourLog<Id> {
    fn default() -> Self {
        Self {
            errors: HashMap::new(),
            goods: HashMap::new(),
        }
    }
}

/// Records every report in memory instead of acting on it.
///
/// Used in reactor tests to check that reactors emit the right signals in
/// manufactured scenarios. Reports are accepted for any identity, known or
/// not, and never fail. Per-peer logs keep report order and are only ever
/// appended to.
///
/// One lock guards the error and good logs together: reports take it
/// exclusively, reads take it shared.
pub struct RecordingPeerBehaviour<Id: BehaviourPeerId> {
    log: RwLock<BehaviourLog<Id>>,
}

impl<Id: BehaviourPeerId> Default for RecordingPeerBehaviour<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: BehaviourPeerId> RecordingPeerBehaviour<Id> {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(BehaviourLog::default()),
        }
    }

    /// Append `reason` to the error log of `peer`.
    pub fn errored(&self, peer: &Id, reason: ErrorBehaviour) {
        let mut log = self.log.write();
        append(&mut log.errors, peer, reason);
        trace!(?peer, %reason, "recorded error behaviour");
    }

    /// Append `reason` to the good behaviour log of `peer`.
    pub fn behaved(&self, peer: &Id, reason: GoodBehaviour) {
        let mut log = self.log.write();
        append(&mut log.goods, peer, reason);
        trace!(?peer, %reason, "recorded good behaviour");
    }

    /// Errors reported for `peer`, oldest first.
    pub fn get_error_behaviours(&self, peer: &Id) -> Vec<ErrorBehaviour> {
        self.log
            .read()
            .errors
            .get(peer)
            .cloned()
            .unwrap_or_default()
    }

    /// Good behaviour reported for `peer`, oldest first.
    pub fn get_good_behaviours(&self, peer: &Id) -> Vec<GoodBehaviour> {
        self.log
            .read()
            .goods
            .get(peer)
            .cloned()
            .unwrap_or_default()
    }

    /// Every peer with at least one report of either kind, in no particular order.
    pub fn reported_peers(&self) -> Vec<Id> {
        let log = self.log.read();
        let peers: HashSet<&Id> = log.errors.keys().chain(log.goods.keys()).collect();
        peers.into_iter().cloned().collect()
    }
}

/// Insert-or-append without cloning the key when the peer already has entries.
fn append<Id: BehaviourPeerId, T>(logs: &mut HashMap<Id, Vec<T>>, peer: &Id, entry: T) {
    match logs.get_mut(peer) {
        Some(entries) => entries.push(entry),
        None => {
            logs.insert(peer.clone(), vec![entry]);
        }
    }
}

impl<Id: BehaviourPeerId> PeerBehaviour<Id> for RecordingPeerBehaviour<Id> {
    fn behaved(&self, peer: &Id, reason: GoodBehaviour) -> Result<(), PeerBehaviourError> {
        RecordingPeerBehaviour::behaved(self, peer, reason);
        Ok(())
    }

    fn errored(&self, peer: &Id, reason: ErrorBehaviour) -> Result<(), PeerBehaviourError> {
        RecordingPeerBehaviour::errored(self, peer, reason);
        Ok(())
    }
}

impl<Id: BehaviourPeerId> GettablePeerBehaviour<Id> for RecordingPeerBehaviour<Id> {
    fn get_error_behaviours(&self, peer: &Id) -> Vec<ErrorBehaviour> {
        RecordingPeerBehaviour::get_error_behaviours(self, peer)
    }

    fn get_good_behaviours(&self, peer: &Id) -> Vec<GoodBehaviour> {
        RecordingPeerBehaviour::get_good_behaviours(self, peer)
    }
}

impl<Id: BehaviourPeerId> std::fmt::Debug for RecordingPeerBehaviour<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log = self.log.read();
        f.debug_struct("RecordingPeerBehaviour")
            .field("error_peers", &log.errors.len())
            .field("good_peers", &log.goods.len())
            .finish()
    }
}
