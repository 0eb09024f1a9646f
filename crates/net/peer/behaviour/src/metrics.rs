//! Behaviour report metrics

use metrics::Counter;

/// Counters for reports forwarded to the connection manager.
#[derive(Clone, Debug)]
pub(crate) struct BehaviourMetrics {
    /// Number of stop-for-error requests issued
    errored_total: Counter,
    /// Number of mark-as-good requests issued
    behaved_total: Counter,
    /// Number of reports rejected because the peer was unknown
    peer_not_found_total: Counter,
}

impl Default for BehaviourMetrics {
    fn default() -> Self {
        Self {
            errored_total: metrics::counter!("peer_behaviour.errored_total"),
            behaved_total: metrics::counter!("peer_behaviour.behaved_total"),
            peer_not_found_total: metrics::counter!("peer_behaviour.peer_not_found_total"),
        }
    }
}

impl BehaviourMetrics {
    pub(crate) fn inc_errored(&self) {
        self.errored_total.increment(1);
    }

    pub(crate) fn inc_behaved(&self) {
        self.behaved_total.increment(1);
    }

    pub(crate) fn inc_peer_not_found(&self) {
        self.peer_not_found_total.increment(1);
    }
}
