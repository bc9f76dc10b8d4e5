//! Unit tests for uav-route.

use uav_core::{AgentId, BaseId, Position, SearchRng, Tick};
use uav_grid::{Grid, GridBuilder};

use crate::{decode, Assignment, ChangeSet, RoutePlanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Obstacle-free 5×5 grid, one base at (0,0).
fn open_5x5() -> Grid {
    let mut b = GridBuilder::new(5, 5);
    b.add_base(BaseId(0), p(0, 0));
    b.build()
}

/// 5×5 grid whose centre (2,2) is ringed by obstacles, base at (0,0).
fn walled_centre() -> Grid {
    let mut b = GridBuilder::new(5, 5);
    for r in 1..=3 {
        for c in 1..=3 {
            if (r, c) != (2, 2) {
                b.set_obstacle(p(r, c));
            }
        }
    }
    b.add_base(BaseId(0), p(0, 0));
    b.build()
}

/// 7×7 grid with a partial wall, an enclosed cell, and two bases.
fn mixed_grid() -> Grid {
    let mut b = GridBuilder::new(7, 7);
    for r in 0..5 {
        b.set_obstacle(p(r, 3));
    }
    for (r, c) in [(5, 5), (5, 6), (6, 5)] {
        b.set_obstacle(p(r, c));
    }
    b.add_base(BaseId(1), p(0, 0));
    b.add_base(BaseId(2), p(0, 6));
    b.build()
}

/// Every non-obstacle cell, the enclosed corner (6,6) included.
fn candidate_cells(grid: &Grid) -> Vec<Position> {
    (0..grid.cell_count())
        .map(|i| grid.position_of(i))
        .filter(|&c| grid.is_traversable(c))
        .collect()
}

fn random_assignment(rng: &mut SearchRng, cells: &[Position], agents: usize, max_len: usize) -> Assignment {
    let sequences = (0..agents)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            (0..len).filter_map(|_| rng.choose(cells).copied()).collect()
        })
        .collect();
    Assignment::new(sequences)
}

// ── Assignment / ChangeSet ────────────────────────────────────────────────────

#[cfg(test)]
mod containers {
    use super::*;

    #[test]
    fn pair_mut_is_disjoint_and_ordered() {
        let mut a = Assignment::new(vec![vec![p(0, 0)], vec![p(1, 1)], vec![]]);
        {
            let (x, y) = a.pair_mut(AgentId(2), AgentId(0)).unwrap();
            y.push(p(9, 9));
            x.push(p(8, 8));
        }
        assert_eq!(a.sequence(AgentId(0)), &[p(0, 0), p(9, 9)]);
        assert_eq!(a.sequence(AgentId(2)), &[p(8, 8)]);
        assert!(a.pair_mut(AgentId(1), AgentId(1)).is_none());
        assert!(a.pair_mut(AgentId(0), AgentId(3)).is_none());
        assert_eq!(a.total_targets(), 4);
    }

    #[test]
    fn change_set_keeps_minimum() {
        let mut cs = ChangeSet::new(3);
        assert!(cs.is_empty());
        cs.record(AgentId(1), 4);
        cs.record(AgentId(1), 2);
        cs.record(AgentId(1), 7);
        cs.record(AgentId(5), 0);
        assert_eq!(cs.first_changed(AgentId(1)), Some(2));
        assert_eq!(cs.first_changed(AgentId(0)), None);
        assert_eq!(cs.touched().collect::<Vec<_>>(), vec![(AgentId(1), 2)]);
        cs.clear();
        assert!(cs.is_empty());
    }
}

// ── Full decode ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod decoding {
    use super::*;
    use crate::RouteError;

    #[test]
    fn single_agent_walks_then_holds() {
        let grid = open_5x5();
        let a = Assignment::new(vec![vec![p(4, 4)]]);
        let table = decode(&grid, &a, 10).unwrap();
        let route = table.route(AgentId(0));
        assert_eq!(route.len(), 10);
        for t in 0..5 {
            assert_eq!(route[t], p(t as i32, t as i32));
        }
        assert!(route[5..].iter().all(|&c| c == p(4, 4)));
        assert_eq!(table.position(AgentId(0), Tick(9)), Some(p(4, 4)));
        assert_eq!(table.position(AgentId(0), Tick(10)), None);
    }

    #[test]
    fn empty_sequence_stays_home() {
        let grid = open_5x5();
        let a = Assignment::empty(2);
        let table = decode(&grid, &a, 4).unwrap();
        for agent in AgentId::range(2) {
            assert!(table.route(agent).iter().all(|&c| c == p(0, 0)));
        }
    }

    #[test]
    fn unreachable_target_stalls_one_tick() {
        let grid = walled_centre();
        let a = Assignment::new(vec![vec![p(2, 2), p(0, 2)]]);
        let table = decode(&grid, &a, 6).unwrap();
        assert_eq!(
            table.route(AgentId(0)),
            &[p(0, 0), p(0, 0), p(0, 1), p(0, 2), p(0, 2), p(0, 2)]
        );
    }

    #[test]
    fn zero_and_one_tick_horizons() {
        let grid = open_5x5();
        let a = Assignment::new(vec![vec![p(4, 4)]]);
        let table = decode(&grid, &a, 0).unwrap();
        assert_eq!(table.horizon(), 0);
        assert!(table.route(AgentId(0)).is_empty());

        let table = decode(&grid, &a, 1).unwrap();
        assert_eq!(table.route(AgentId(0)), &[p(0, 0)]);
    }

    #[test]
    fn agents_cycle_through_bases() {
        let grid = mixed_grid();
        let table = decode(&grid, &Assignment::empty(3), 2).unwrap();
        let starts: Vec<_> = table.at_tick(0).map(|(_, c)| c).collect();
        assert_eq!(starts, vec![p(0, 0), p(0, 6), p(0, 0)]);
    }

    #[test]
    fn no_bases_is_rejected() {
        let grid = GridBuilder::new(3, 3).build();
        let err = decode(&grid, &Assignment::empty(2), 5).unwrap_err();
        assert!(matches!(err, RouteError::NoBases { agents: 2 }));
        assert!(decode(&grid, &Assignment::empty(0), 5).is_ok());
    }
}

// ── Incremental planner ───────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::*;
    use crate::RouteError;

    #[test]
    fn timing_records_start_end_idle() {
        let grid = walled_centre();
        let a = Assignment::new(vec![vec![p(2, 2), p(0, 2)]]);
        let mut planner = RoutePlanner::new(&grid, 6, 1).unwrap();
        planner.build(&a).unwrap();

        let timing = planner.timing(AgentId(0));
        assert_eq!(timing.start, vec![Some(Tick(0)), Some(Tick(1))]);
        assert_eq!(timing.end, vec![Some(Tick(1)), Some(Tick(4))]);
        assert_eq!(timing.idle, Some(Tick(4)));
    }

    #[test]
    fn unfinished_targets_have_no_timing() {
        let grid = open_5x5();
        let a = Assignment::new(vec![vec![p(4, 4), p(0, 4)]]);
        let mut planner = RoutePlanner::new(&grid, 4, 1).unwrap();
        planner.build(&a).unwrap();

        let timing = planner.timing(AgentId(0));
        assert_eq!(timing.start, vec![Some(Tick(0)), None]);
        assert_eq!(timing.end, vec![None, None]);
        assert_eq!(timing.idle, None);
    }

    #[test]
    fn build_matches_decode() {
        let grid = mixed_grid();
        let cells = candidate_cells(&grid);
        let mut rng = SearchRng::new(11);
        for _ in 0..20 {
            let a = random_assignment(&mut rng, &cells, 3, 5);
            let mut planner = RoutePlanner::new(&grid, 30, 3).unwrap();
            planner.build(&a).unwrap();
            assert_eq!(planner.table(), &decode(&grid, &a, 30).unwrap());
        }
    }

    #[test]
    fn agent_count_mismatch_is_rejected() {
        let grid = open_5x5();
        let mut planner = RoutePlanner::new(&grid, 5, 2).unwrap();
        let err = planner.build(&Assignment::empty(3)).unwrap_err();
        assert!(matches!(err, RouteError::AgentCountMismatch { expected: 2, found: 3 }));
    }

    #[test]
    fn untouched_agents_keep_their_routes() {
        let grid = mixed_grid();
        let mut a = Assignment::new(vec![vec![p(6, 0), p(2, 2)], vec![p(6, 4)]]);
        let mut planner = RoutePlanner::new(&grid, 20, 2).unwrap();
        planner.build(&a).unwrap();
        let before = planner.table().route(AgentId(1)).to_vec();

        a.sequence_mut(AgentId(0)).push(p(4, 0));
        a.sequence_mut(AgentId(1))[0] = p(0, 0);
        let mut changes = ChangeSet::new(2);
        changes.record(AgentId(0), 2);
        planner.update(&a, &changes).unwrap();

        assert_eq!(planner.table().route(AgentId(1)), before.as_slice());
    }

    /// Apply one random edit to one agent, returning the lowest index it
    /// touched, or `None` if the edit could not act.
    fn random_edit(rng: &mut SearchRng, seq: &mut Vec<Position>, cells: &[Position]) -> Option<usize> {
        let cell = *rng.choose(cells)?;
        match rng.gen_range(0..5u32) {
            0 => {
                let i = rng.gen_range(0..=seq.len());
                seq.insert(i, cell);
                Some(i)
            }
            1 => {
                let i = rng.index(seq.len())?;
                seq.remove(i);
                Some(i)
            }
            2 => {
                let i = rng.index(seq.len())?;
                let j = rng.index(seq.len())?;
                seq.swap(i, j);
                Some(i.min(j))
            }
            3 => {
                let i = rng.index(seq.len())?;
                seq[i] = cell;
                Some(i)
            }
            _ => {
                if seq.len() < 2 {
                    return None;
                }
                let i = rng.gen_range(0..seq.len() - 1);
                let j = rng.gen_range(i + 1..seq.len());
                seq[i..=j].reverse();
                Some(i)
            }
        }
    }

    #[test]
    fn incremental_matches_full_rebuild() {
        let grid = mixed_grid();
        let cells = candidate_cells(&grid);
        let agents = 3;
        let horizon = 40;
        let mut rng = SearchRng::new(2024);

        let mut a = random_assignment(&mut rng, &cells, agents, 6);
        let mut planner = RoutePlanner::new(&grid, horizon, agents).unwrap();
        planner.build(&a).unwrap();

        for step in 0..400 {
            let agent = AgentId(rng.gen_range(0..agents as u32));
            let mut changes = ChangeSet::new(agents);
            if let Some(i) = random_edit(&mut rng, a.sequence_mut(agent), &cells) {
                changes.record(agent, i);
            }
            planner.update(&a, &changes).unwrap();

            let mut fresh = RoutePlanner::new(&grid, horizon, agents).unwrap();
            fresh.build(&a).unwrap();
            assert_eq!(planner.table(), fresh.table(), "table diverged at step {step}");
            assert_eq!(planner.timings(), fresh.timings(), "timing diverged at step {step}");
        }
    }

    #[test]
    fn candidate_clone_is_independent() {
        let grid = open_5x5();
        let mut a = Assignment::new(vec![vec![p(4, 4)]]);
        let mut current = RoutePlanner::new(&grid, 8, 1).unwrap();
        current.build(&a).unwrap();
        let snapshot = current.table().clone();

        let mut candidate = current.clone();
        a.sequence_mut(AgentId(0)).insert(0, p(0, 4));
        let mut changes = ChangeSet::new(1);
        changes.record(AgentId(0), 0);
        candidate.update(&a, &changes).unwrap();

        assert_ne!(candidate.table(), &snapshot);
        assert_eq!(current.table(), &snapshot);
    }
}
