//! The search's decision variable: one visit sequence per agent.

use uav_core::{AgentId, Position};

/// Ordered visit targets for every agent, indexed by `AgentId`.
///
/// Sequences may be empty and may contain the same cell more than once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    sequences: Vec<Vec<Position>>,
}

impl Assignment {
    pub fn new(sequences: Vec<Vec<Position>>) -> Self {
        Self { sequences }
    }

    /// `agent_count` empty sequences.
    pub fn empty(agent_count: usize) -> Self {
        Self { sequences: vec![Vec::new(); agent_count] }
    }

    pub fn agent_count(&self) -> usize {
        self.sequences.len()
    }

    /// Sum of all sequence lengths.
    pub fn total_targets(&self) -> usize {
        self.sequences.iter().map(Vec::len).sum()
    }

    /// Visit sequence of `agent`.
    ///
    /// # Panics
    ///
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn sequence(&self, agent: AgentId) -> &[Position] {
        &self.sequences[agent.index()]
    }

    #[inline]
    pub fn sequence_mut(&mut self, agent: AgentId) -> &mut Vec<Position> {
        &mut self.sequences[agent.index()]
    }

    /// Disjoint mutable access to two different agents' sequences.
    ///
    /// Returns `None` if `a == b` or either is out of range.
    pub fn pair_mut(
        &mut self,
        a: AgentId,
        b: AgentId,
    ) -> Option<(&mut Vec<Position>, &mut Vec<Position>)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia >= self.sequences.len() || ib >= self.sequences.len() {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.sequences.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.sequences.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    pub fn sequences(&self) -> &[Vec<Position>] {
        &self.sequences
    }

    /// Iterator over `(agent, sequence)` pairs in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &[Position])> {
        AgentId::range(self.sequences.len()).zip(self.sequences.iter().map(Vec::as_slice))
    }

    pub fn into_inner(self) -> Vec<Vec<Position>> {
        self.sequences
    }
}

impl From<Vec<Vec<Position>>> for Assignment {
    fn from(sequences: Vec<Vec<Position>>) -> Self {
        Self::new(sequences)
    }
}
