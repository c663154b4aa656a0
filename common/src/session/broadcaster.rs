use std::future::Future;

use crate::game::{GameEvent, GameSnapshot};

/// Receives every frame the session produces. Implementations must not block the loop.
pub trait SnapshotBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_snapshot(
        &self,
        snapshot: GameSnapshot,
        events: Vec<GameEvent>,
    ) -> impl Future<Output = ()> + Send;

    fn broadcast_shutdown(&self, final_snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
