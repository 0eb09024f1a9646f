//! Synchronous peer behaviour reporting for reactors.
//!
//! Reactors observe peers while handling their messages and report what they
//! see through [`PeerBehaviour`], without touching connection state
//! themselves. Two backends sit behind the trait:
//!
//! - [`SwitchPeerBehaviour`] forwards reports to a [`ConnectionManager`]: errors
//!   stop the peer, good behaviour marks it as good.
//! - [`RecordingPeerBehaviour`] appends reports to an in-memory per-peer log
//!   that tests read back through [`GettablePeerBehaviour`].
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vertex_net_peer_behaviour::{ErrorBehaviour, PeerBehaviour, SwitchPeerBehaviour};
//!
//! let reporter: Arc<dyn PeerBehaviour<PeerId>> =
//!     Arc::new(SwitchPeerBehaviour::new(Arc::clone(&switch)));
//!
//! // Inside the reactor: a vanished peer is not worth retrying.
//! if let Err(err) = reporter.errored(&peer_id, ErrorBehaviour::BadMessage) {
//!     debug!(%err, "peer gone before report");
//! }
//! ```

pub mod behaviour;
pub mod error;
pub mod recording;
pub mod switch;
pub mod traits;

mod metrics;

pub use behaviour::{ErrorBehaviour, GoodBehaviour};
pub use error::{InvalidBehaviourCode, PeerBehaviourError};
pub use recording::RecordingPeerBehaviour;
pub use switch::SwitchPeerBehaviour;
pub use traits::{BehaviourPeerId, ConnectionManager, GettablePeerBehaviour, PeerBehaviour};
