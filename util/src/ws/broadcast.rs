//! Room fan-out over the connection registry.

use super::registry::ChatRegistry;

/// Outcome of one broadcast call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Pushes `payload` to every connection joined to `room_id` at the moment of the call.
///
/// Delivery is best-effort per peer: a full or closed queue is logged and skipped,
/// and never prevents delivery to the remaining members.
pub async fn broadcast(registry: &ChatRegistry, room_id: &str, payload: &str) -> BroadcastReport {
    let mut report = BroadcastReport::default();

    for peer in registry.members_of(room_id).await {
        match peer.try_deliver(payload) {
            Ok(()) => report.delivered += 1,
            Err(fault) => {
                report.failed += 1;
                tracing::warn!(
                    room_id,
                    connection_id = peer.id(),
                    "dropping live delivery: {fault}"
                );
            }
        }
    }

    tracing::debug!(
        room_id,
        delivered = report.delivered,
        failed = report.failed,
        "room broadcast"
    );
    report
}
