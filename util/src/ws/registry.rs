//! Connection registry for the live chat channel.
//!
//! Maps every live connection to at most one `(room, user)` membership and keeps
//! a reverse index from room to connections for fan-out. One registry is created
//! with the application state and shared (cheaply cloned) by every connection task.
//!
//! All mutations and the room snapshot taken for a broadcast go through the same
//! `RwLock`, so `join`/`leave` and `members_of` are serialized with respect to
//! each other.

use axum::extract::ws::Message;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, RwLock, mpsc};

/// Process-unique identity of one live connection.
pub type ConnectionId = u64;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Why a frame could not be queued for a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryFault {
    /// The peer's outbound queue is full (slow reader).
    QueueFull,
    /// The peer's writer has gone away.
    Closed,
}

impl std::fmt::Display for DeliveryFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryFault::QueueFull => f.write_str("outbound queue full"),
            DeliveryFault::Closed => f.write_str("connection closed"),
        }
    }
}

/// Sending side of one connection: its id plus its bounded outbound queue.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    tx: mpsc::Sender<Message>,
}

impl ConnectionHandle {
    /// Wraps the outbound queue of a freshly accepted connection and assigns it a new id.
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self {
            id: NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
            tx,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queues a text frame without waiting. Never blocks on a slow peer.
    pub fn try_deliver(&self, text: &str) -> Result<(), DeliveryFault> {
        self.tx
            .try_send(Message::Text(text.to_owned().into()))
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => DeliveryFault::QueueFull,
                mpsc::error::TrySendError::Closed(_) => DeliveryFault::Closed,
            })
    }

    /// Queues any frame, waiting for queue space. Used for replies to this connection only.
    pub async fn send(&self, msg: Message) -> Result<(), DeliveryFault> {
        self.tx.send(msg).await.map_err(|_| DeliveryFault::Closed)
    }
}

/// The live binding of one connection to one room and one user identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub room_id: String,
    pub user_id: String,
}

struct Entry {
    handle: ConnectionHandle,
    membership: Membership,
}

#[derive(Default)]
struct Inner {
    members: HashMap<ConnectionId, Entry>,
    rooms: HashMap<String, HashSet<ConnectionId>>,
}

impl Inner {
    fn detach(&mut self, id: ConnectionId) -> Option<Entry> {
        let entry = self.members.remove(&id)?;
        let room = &entry.membership.room_id;
        if let Some(conns) = self.rooms.get_mut(room) {
            conns.remove(&id);
            if conns.is_empty() {
                self.rooms.remove(room);
            }
        }
        Some(entry)
    }
}

/// Process-wide registry of live chat memberships.
#[derive(Clone, Default)]
pub struct ChatRegistry {
    inner: Arc<RwLock<Inner>>,
    gates: Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `conn` to `room_id` as `user_id`.
    ///
    /// A connection holds at most one membership: joining again replaces the
    /// previous binding (last join wins), which is returned.
    pub async fn join(
        &self,
        conn: &ConnectionHandle,
        room_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Option<Membership> {
        let membership = Membership {
            room_id: room_id.into(),
            user_id: user_id.into(),
        };

        let mut inner = self.inner.write().await;
        let previous = inner.detach(conn.id()).map(|e| e.membership);
        inner
            .rooms
            .entry(membership.room_id.clone())
            .or_default()
            .insert(conn.id());
        inner.members.insert(
            conn.id(),
            Entry {
                handle: conn.clone(),
                membership,
            },
        );
        previous
    }

    /// Current membership of the connection, if it has joined.
    pub async fn membership_of(&self, id: ConnectionId) -> Option<Membership> {
        let inner = self.inner.read().await;
        inner.members.get(&id).map(|e| e.membership.clone())
    }

    /// Removes the connection's membership. Calling it for an unknown connection is a no-op.
    pub async fn leave(&self, id: ConnectionId) -> Option<Membership> {
        let removed = {
            let mut inner = self.inner.write().await;
            inner.detach(id)
        }?;

        self.prune_gate(&removed.membership.room_id).await;
        Some(removed.membership)
    }

    /// Snapshot of the connections joined to `room_id` right now.
    pub async fn members_of(&self, room_id: &str) -> Vec<ConnectionHandle> {
        let inner = self.inner.read().await;
        inner
            .rooms
            .get(room_id)
            .into_iter()
            .flatten()
            .filter_map(|id| inner.members.get(id).map(|e| e.handle.clone()))
            .collect()
    }

    /// Number of connections that currently hold a membership.
    pub async fn connection_count(&self) -> usize {
        self.inner.read().await.members.len()
    }

    /// Number of rooms with at least one member.
    pub async fn room_count(&self) -> usize {
        self.inner.read().await.rooms.len()
    }

    /// Sequencing gate for `room_id`.
    ///
    /// Holding the gate across "persist then broadcast" keeps a room's live
    /// order identical to its persisted order.
    pub fn room_gate(&self, room_id: &str) -> Arc<Mutex<()>> {
        let mut gates = match self.gates.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        gates
            .entry(room_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Hands back a gate taken with [`room_gate`](Self::room_gate).
    ///
    /// The gate is dropped from the registry once its room has no members and
    /// no other sender holds it.
    pub async fn release_gate(&self, room_id: &str, gate: Arc<Mutex<()>>) {
        drop(gate);
        self.prune_gate(room_id).await;
    }

    async fn prune_gate(&self, room_id: &str) {
        if self.inner.read().await.rooms.contains_key(room_id) {
            return;
        }
        let mut gates = match self.gates.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        if gates.get(room_id).is_some_and(|g| Arc::strong_count(g) == 1) {
            gates.remove(room_id);
        }
    }

    #[cfg(test)]
    fn gate_count(&self) -> usize {
        self.gates.lock().map(|g| g.len()).unwrap_or_default()
    }
}
