//! Time series of state snapshots.

use pnp_core::Real;
use pnp_model::State;
use serde::{Deserialize, Serialize};

/// A timestamped copy of the full state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: Real,
    pub state: State,
}

/// Ordered, append-only sequence of snapshots produced by one run.
///
/// The first snapshot is always `(0, initial_state)`; subsequent times
/// are strictly increasing multiples of the step size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    snapshots: Vec<Snapshot>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Variable names in declaration order, from the first snapshot.
    pub fn variable_names(&self) -> Vec<String> {
        self.snapshots
            .first()
            .map(|snap| snap.state.names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
