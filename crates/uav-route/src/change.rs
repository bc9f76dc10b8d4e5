//! Per-agent record of the lowest sequence index a move touched.

use uav_core::AgentId;

/// Which agents a neighbourhood move edited, and from which sequence index.
///
/// The incremental planner resimulates each touched agent from its recorded
/// index; untouched agents keep their trajectory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    first: Vec<Option<usize>>,
}

impl ChangeSet {
    pub fn new(agent_count: usize) -> Self {
        Self { first: vec![None; agent_count] }
    }

    /// Note that `agent`'s sequence changed at `idx`.  Keeps the minimum.
    ///
    /// Agents beyond the set's size are ignored.
    pub fn record(&mut self, agent: AgentId, idx: usize) {
        if let Some(slot) = self.first.get_mut(agent.index()) {
            *slot = Some(slot.map_or(idx, |prev| prev.min(idx)));
        }
    }

    /// Lowest changed index of `agent`, or `None` if untouched.
    #[inline]
    pub fn first_changed(&self, agent: AgentId) -> Option<usize> {
        self.first.get(agent.index()).copied().flatten()
    }

    /// `true` if no agent was touched.
    pub fn is_empty(&self) -> bool {
        self.first.iter().all(Option::is_none)
    }

    /// `(agent, first changed index)` for every touched agent.
    pub fn touched(&self) -> impl Iterator<Item = (AgentId, usize)> + '_ {
        AgentId::range(self.first.len())
            .zip(self.first.iter())
            .filter_map(|(a, f)| f.map(|i| (a, i)))
    }

    /// Forget every record, keeping the agent count.
    pub fn clear(&mut self) {
        self.first.fill(None);
    }
}
