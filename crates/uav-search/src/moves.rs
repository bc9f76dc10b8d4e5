//! Neighbourhood moves.
//!
//! Every move edits a candidate [`Assignment`] in place and records, per
//! agent it touched, the lowest sequence index it changed in a
//! [`ChangeSet`].  A move that cannot act (empty sequence, degenerate pick)
//! returns `false` and leaves both untouched.
//!
//! | Kind               | Edit                                                         |
//! |--------------------|--------------------------------------------------------------|
//! | `WaitInsert`       | insert a hold target for one agent of a collision            |
//! | `Shift`            | rotate one agent's sequence left by one                      |
//! | `ResolveCollision` | longer of two colliding agents donates a target to the other |
//! | `IntraSwap`        | swap two targets of one agent                                |
//! | `Relocate`         | move a target to its cheapest slot in a random agent         |
//! | `InterSwap`        | swap one target between two random agents                    |
//! | `Reverse`          | reverse a random slice (length ≥ 2) of one agent             |
//! | `UpgradeTarget`    | replace an agent's least urgent target with a more urgent cell |

use std::fmt;

use uav_core::{AgentId, Position, SearchRng};
use uav_eval::{first_departure, CollisionRecord};
use uav_grid::Grid;
use uav_route::{Assignment, ChangeSet, RouteTable};

use crate::insertion::insert_best;

// ── MoveKind ──────────────────────────────────────────────────────────────────

/// The neighbourhood operators of the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    WaitInsert,
    Shift,
    ResolveCollision,
    IntraSwap,
    Relocate,
    InterSwap,
    Reverse,
    UpgradeTarget,
}

impl MoveKind {
    /// Moves picked uniformly when no collision-driven move fires.
    pub const GENERIC: [MoveKind; 5] = [
        MoveKind::IntraSwap,
        MoveKind::Relocate,
        MoveKind::InterSwap,
        MoveKind::Reverse,
        MoveKind::UpgradeTarget,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::WaitInsert       => "wait-insert",
            MoveKind::Shift            => "shift",
            MoveKind::ResolveCollision => "resolve-collision",
            MoveKind::IntraSwap        => "intra-swap",
            MoveKind::Relocate         => "relocate",
            MoveKind::InterSwap        => "inter-swap",
            MoveKind::Reverse          => "reverse",
            MoveKind::UpgradeTarget    => "upgrade-target",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MoveContext ───────────────────────────────────────────────────────────────

/// Read-only state a move may consult.
pub(crate) struct MoveContext<'a> {
    pub grid:        &'a Grid,
    /// Base position per agent.
    pub homes:       &'a [Position],
    /// Urgent cells, most urgent first.
    pub by_priority: &'a [Position],
    /// Route table of the current (unedited) assignment.
    pub table:       &'a RouteTable,
    /// Collisions found in `table`.
    pub records:     &'a [CollisionRecord],
}

impl MoveContext<'_> {
    /// Apply `kind` to `assignment`.  Returns `false` if the move could not
    /// act.
    pub fn apply(
        &self,
        kind:       MoveKind,
        assignment: &mut Assignment,
        rng:        &mut SearchRng,
        changes:    &mut ChangeSet,
    ) -> bool {
        let applied = match kind {
            MoveKind::WaitInsert       => self.wait_insert(assignment, rng, changes),
            MoveKind::Shift            => shift(assignment, rng, changes),
            MoveKind::ResolveCollision => self.resolve_collision(assignment, rng, changes),
            MoveKind::IntraSwap        => intra_swap(assignment, rng, changes),
            MoveKind::Relocate         => self.relocate(assignment, rng, changes),
            MoveKind::InterSwap        => inter_swap(assignment, rng, changes),
            MoveKind::Reverse          => reverse(assignment, rng, changes),
            MoveKind::UpgradeTarget    => self.upgrade_target(assignment, rng, changes),
        };
        applied.is_some()
    }

    /// Insert a hold target for one occupant of a random collision.
    ///
    /// If the collision happens at or before the agent's first departure the
    /// agent's base goes to the front of its sequence.  Otherwise the
    /// colliding cell is inserted at the slot proportional to the
    /// collision's tick within the horizon.
    fn wait_insert(
        &self,
        assignment: &mut Assignment,
        rng:        &mut SearchRng,
        changes:    &mut ChangeSet,
    ) -> Option<()> {
        let record = rng.choose(self.records)?;
        let agent = *rng.choose(&record.agents)?;
        let home = *self.homes.get(agent.index())?;
        let tick = record.tick.index();

        let at_start = tick <= first_departure(self.table.route(agent), home);
        let seq = assignment.sequence_mut(agent);
        let (slot, cell) = if at_start {
            (0, home)
        } else {
            let ratio = tick as f64 / self.table.horizon().max(1) as f64;
            (((ratio * seq.len() as f64) as usize).min(seq.len()), record.position)
        };
        seq.insert(slot, cell);
        changes.record(agent, slot);
        Some(())
    }

    /// Move a random target of the longer of two colliding agents' sequences
    /// to its cheapest slot in the other's.
    fn resolve_collision(
        &self,
        assignment: &mut Assignment,
        rng:        &mut SearchRng,
        changes:    &mut ChangeSet,
    ) -> Option<()> {
        let record = rng.choose(self.records)?;
        let n = record.agents.len();
        if n < 2 {
            return None;
        }
        let ia = rng.index(n)?;
        let mut ib = rng.index(n)?;
        if ia == ib {
            ib = (ib + 1) % n;
        }
        let (a, b) = (record.agents[ia], record.agents[ib]);
        let (donor, receiver) = if assignment.sequence(a).len() >= assignment.sequence(b).len() {
            (a, b)
        } else {
            (b, a)
        };

        let (from, to) = assignment.pair_mut(donor, receiver)?;
        let idx = rng.index(from.len())?;
        let cell = from.remove(idx);
        let slot = insert_best(self.grid, self.homes[receiver.index()], to, cell);
        changes.record(donor, idx);
        changes.record(receiver, slot);
        Some(())
    }

    /// Move a random target of a random agent to its cheapest slot in a
    /// random (possibly the same) agent.
    fn relocate(
        &self,
        assignment: &mut Assignment,
        rng:        &mut SearchRng,
        changes:    &mut ChangeSet,
    ) -> Option<()> {
        let agents = assignment.agent_count();
        let origin = AgentId(rng.index(agents)? as u32);
        let len = assignment.sequence(origin).len();
        if len == 0 {
            return None;
        }
        let dest = AgentId(rng.index(agents)? as u32);
        let idx = rng.index(len)?;

        let cell = assignment.sequence_mut(origin).remove(idx);
        changes.record(origin, idx);
        let slot = insert_best(
            self.grid,
            self.homes[dest.index()],
            assignment.sequence_mut(dest),
            cell,
        );
        changes.record(dest, slot);
        Some(())
    }

    /// Replace an agent's least urgent target with the most urgent cell
    /// whose weight strictly exceeds it.
    fn upgrade_target(
        &self,
        assignment: &mut Assignment,
        rng:        &mut SearchRng,
        changes:    &mut ChangeSet,
    ) -> Option<()> {
        if self.by_priority.is_empty() {
            return None;
        }
        let agent = AgentId(rng.index(assignment.agent_count())? as u32);
        let seq = assignment.sequence_mut(agent);

        // First index holding the minimum weight.
        let (idx, min) = seq
            .iter()
            .map(|&p| self.grid.urgency(p))
            .enumerate()
            .fold(None, |best: Option<(usize, u32)>, (i, w)| match best {
                Some((_, bw)) if bw <= w => best,
                _ => Some((i, w)),
            })?;
        let better = *self.by_priority.iter().find(|&&p| self.grid.urgency(p) > min)?;

        seq[idx] = better;
        changes.record(agent, idx);
        Some(())
    }
}

// ── Moves needing no context ──────────────────────────────────────────────────

fn random_agent(assignment: &Assignment, rng: &mut SearchRng) -> Option<AgentId> {
    rng.index(assignment.agent_count()).map(|i| AgentId(i as u32))
}

/// Rotate a random agent's sequence left by one.
fn shift(assignment: &mut Assignment, rng: &mut SearchRng, changes: &mut ChangeSet) -> Option<()> {
    let agent = random_agent(assignment, rng)?;
    let seq = assignment.sequence_mut(agent);
    if seq.len() <= 1 {
        return None;
    }
    seq.rotate_left(1);
    changes.record(agent, 0);
    Some(())
}

/// Swap two distinct positions of one agent's sequence.
fn intra_swap(assignment: &mut Assignment, rng: &mut SearchRng, changes: &mut ChangeSet) -> Option<()> {
    let agent = random_agent(assignment, rng)?;
    let seq = assignment.sequence_mut(agent);
    if seq.len() < 2 {
        return None;
    }
    let i = rng.index(seq.len())?;
    let j = rng.index(seq.len())?;
    if i == j {
        return None;
    }
    seq.swap(i, j);
    changes.record(agent, i.min(j));
    Some(())
}

/// Swap one target between two random, possibly identical, agents.
fn inter_swap(assignment: &mut Assignment, rng: &mut SearchRng, changes: &mut ChangeSet) -> Option<()> {
    let origin = random_agent(assignment, rng)?;
    if assignment.sequence(origin).is_empty() {
        return None;
    }
    let dest = random_agent(assignment, rng)?;
    if assignment.sequence(dest).is_empty() {
        return None;
    }
    let i = rng.index(assignment.sequence(origin).len())?;
    let j = rng.index(assignment.sequence(dest).len())?;

    match assignment.pair_mut(origin, dest) {
        Some((a, b)) => std::mem::swap(&mut a[i], &mut b[j]),
        None => assignment.sequence_mut(origin).swap(i, j),
    }
    changes.record(origin, i);
    changes.record(dest, j);
    Some(())
}

/// Reverse `seq[i..=j]` for a random `i < j` of one agent.
fn reverse(assignment: &mut Assignment, rng: &mut SearchRng, changes: &mut ChangeSet) -> Option<()> {
    let agent = random_agent(assignment, rng)?;
    let seq = assignment.sequence_mut(agent);
    let len = seq.len();
    if len < 2 {
        return None;
    }
    let i = rng.gen_range(0..len - 1);
    let j = rng.gen_range(i + 1..len);
    seq[i..=j].reverse();
    changes.record(agent, i);
    Some(())
}
