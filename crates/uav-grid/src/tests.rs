//! Unit tests for uav-grid.
//!
//! All tests use hand-built grids or in-memory instance text.

#[cfg(test)]
mod helpers {
    use uav_core::{BaseId, Position};

    use crate::{Grid, GridBuilder};

    /// Obstacle-free `rows × cols` grid with one base at (0,0).
    pub fn open_grid(rows: usize, cols: usize) -> Grid {
        let mut b = GridBuilder::new(rows, cols);
        b.add_base(BaseId(0), Position::new(0, 0));
        b.build()
    }

    /// 5×5 grid whose centre (2,2) is fully ringed by obstacles.
    pub fn walled_centre() -> Grid {
        let mut b = GridBuilder::new(5, 5);
        for r in 1..=3 {
            for c in 1..=3 {
                if (r, c) != (2, 2) {
                    b.set_obstacle(Position::new(r, c));
                }
            }
        }
        b.add_base(BaseId(0), Position::new(0, 0));
        b.build()
    }
}

// ── Builder & grid queries ────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use uav_core::{AgentId, BaseId, Position};

    use crate::GridBuilder;

    #[test]
    fn empty_build() {
        let grid = GridBuilder::new(3, 4).build();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.urgent_positions().is_empty());
        assert!(grid.bases().is_empty());
        assert_eq!(grid.base_for(AgentId(0)), None);
    }

    #[test]
    fn out_of_bounds_writes_are_noops() {
        let mut b = GridBuilder::new(2, 2);
        assert!(!b.set_obstacle(Position::new(2, 0)));
        assert!(!b.set_obstacle(Position::new(0, -1)));
        assert!(!b.set_urgency(Position::new(5, 5), 3));
        assert!(!b.add_base(BaseId(1), Position::new(-1, 0)));
        assert!(b.set_obstacle(Position::new(1, 1)));

        let grid = b.build();
        assert_eq!(grid.obstacles().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
        assert!(grid.urgent_positions().is_empty());
        assert!(grid.bases().is_empty());
    }

    #[test]
    fn traversability() {
        let mut b = GridBuilder::new(2, 2);
        b.set_obstacle(Position::new(0, 1));
        let grid = b.build();
        assert!(grid.is_traversable(Position::new(0, 0)));
        assert!(!grid.is_traversable(Position::new(0, 1)));
        assert!(!grid.is_traversable(Position::new(2, 0)));
        assert_eq!(grid.urgency(Position::new(9, 9)), 0);
    }

    #[test]
    fn index_roundtrip() {
        let grid = GridBuilder::new(3, 5).build();
        let p = Position::new(2, 3);
        let i = grid.index_of(p).unwrap();
        assert_eq!(i, 13);
        assert_eq!(grid.position_of(i), p);
        assert_eq!(grid.index_of(Position::new(3, 0)), None);
    }

    #[test]
    fn urgent_cells_listed_once_in_input_order() {
        let mut b = GridBuilder::new(4, 4);
        b.set_urgency(Position::new(3, 3), 2);
        b.set_urgency(Position::new(0, 1), 7);
        b.set_urgency(Position::new(3, 3), 9);
        b.set_urgency(Position::new(1, 1), 4);
        b.set_urgency(Position::new(1, 1), 0);
        let grid = b.build();

        assert_eq!(
            grid.urgent_positions(),
            &[Position::new(3, 3), Position::new(0, 1)]
        );
        assert_eq!(grid.urgency(Position::new(3, 3)), 9);
        assert_eq!(grid.urgency(Position::new(1, 1)), 0);
    }

    #[test]
    fn urgent_by_priority_is_stable() {
        let mut b = GridBuilder::new(3, 3);
        b.set_urgency(Position::new(0, 0), 5);
        b.set_urgency(Position::new(0, 1), 8);
        b.set_urgency(Position::new(0, 2), 5);
        b.set_urgency(Position::new(1, 0), 8);
        let grid = b.build();

        assert_eq!(
            grid.urgent_by_priority(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn agents_map_to_bases_modulo_count() {
        let mut b = GridBuilder::new(3, 3);
        b.add_base(BaseId(10), Position::new(0, 0));
        b.add_base(BaseId(20), Position::new(2, 2));
        let grid = b.build();

        assert_eq!(grid.base_for(AgentId(0)), Some(Position::new(0, 0)));
        assert_eq!(grid.base_for(AgentId(1)), Some(Position::new(2, 2)));
        assert_eq!(grid.base_for(AgentId(4)), Some(Position::new(0, 0)));
        assert!(grid.is_base(Position::new(2, 2)));
        assert!(!grid.is_base(Position::new(1, 1)));
    }
}

// ── Pathfinding ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfind {
    use uav_core::Position;

    use super::helpers::{open_grid, walled_centre};
    use crate::{AStar, GridBuilder, PathFinder};

    #[test]
    fn trivial_same_cell() {
        let grid = walled_centre();
        for p in [Position::new(0, 0), Position::new(2, 2), Position::new(4, 1)] {
            let path = AStar.find_path(&grid, p, p);
            assert_eq!(path.cells, vec![p]);
            assert_eq!(path.next_step(), None);
        }
    }

    #[test]
    fn open_grid_paths_match_chebyshev() {
        for (rows, cols) in [(3, 5), (5, 5), (5, 7)] {
            let grid = open_grid(rows, cols);
            let cells: Vec<_> = (0..grid.cell_count()).map(|i| grid.position_of(i)).collect();
            for &start in &cells {
                for &goal in &cells {
                    let path = AStar.find_path(&grid, start, goal);
                    assert_eq!(
                        path.len() - 1,
                        start.chebyshev(goal) as usize,
                        "{rows}x{cols}: {start} -> {goal}"
                    );
                    assert_eq!(path.cells.first(), Some(&start));
                    assert_eq!(path.cells.last(), Some(&goal));
                }
            }
        }
    }

    #[test]
    fn diagonal_path_is_deterministic() {
        let grid = open_grid(5, 5);
        let path = AStar.find_path(&grid, Position::new(0, 0), Position::new(4, 4));
        let expected: Vec<_> = (0..5).map(|i| Position::new(i, i)).collect();
        assert_eq!(path.cells, expected);
    }

    #[test]
    fn consecutive_cells_are_adjacent() {
        let grid = walled_centre();
        let path = AStar.find_path(&grid, Position::new(0, 0), Position::new(4, 4));
        assert!(!path.is_empty());
        for w in path.cells.windows(2) {
            assert_eq!(w[0].chebyshev(w[1]), 1);
            assert!(grid.is_traversable(w[1]));
        }
    }

    #[test]
    fn enclosed_goal_unreachable() {
        let grid = walled_centre();
        let path = AStar.find_path(&grid, Position::new(0, 0), Position::new(2, 2));
        assert!(path.is_empty());
        assert_eq!(path.next_step(), None);
    }

    #[test]
    fn obstacle_or_outside_goal_unreachable() {
        let grid = walled_centre();
        assert!(AStar.find_path(&grid, Position::new(0, 0), Position::new(1, 1)).is_empty());
        assert!(AStar.find_path(&grid, Position::new(0, 0), Position::new(5, 0)).is_empty());
    }

    #[test]
    fn wall_forces_detour() {
        // Column 2 is blocked except for row 4.
        let mut b = GridBuilder::new(5, 5);
        for r in 0..4 {
            b.set_obstacle(Position::new(r, 2));
        }
        let grid = b.build();
        let path = AStar.find_path(&grid, Position::new(0, 0), Position::new(0, 4));
        assert!(path.cells.contains(&Position::new(4, 2)));
        assert!(path.len() - 1 > 4);
    }
}

// ── Instance loader ───────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use uav_core::{AgentId, BaseId, Position};

    use crate::{load_grid_file, load_grid_reader, GridError};

    const SAMPLE: &str = "\
ROWS 5
COLS 6
OBSTACLES 3
1 1
2 2
9 9
URGENCIES 3
4 4 10
0 5 3
-1 0 7
BASES 2
7 0 0
8 4 0
";

    #[test]
    fn parses_sample_instance() {
        let grid = load_grid_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (5, 6));
        assert_eq!(
            grid.obstacles().collect::<Vec<_>>(),
            vec![Position::new(1, 1), Position::new(2, 2)]
        );
        assert_eq!(
            grid.urgent_positions(),
            &[Position::new(4, 4), Position::new(0, 5)]
        );
        assert_eq!(grid.urgency(Position::new(4, 4)), 10);
        assert_eq!(grid.bases().len(), 2);
        assert_eq!(grid.bases()[1].id, BaseId(8));
        assert_eq!(grid.base_for(AgentId(3)), Some(Position::new(4, 0)));
    }

    #[test]
    fn labels_are_free_form() {
        let text = "r 2 c 2 o 0 u 1 1 1 4 b 1 0 0 0";
        let grid = load_grid_reader(text.as_bytes()).unwrap();
        assert_eq!(grid.urgency(Position::new(1, 1)), 4);
    }

    #[test]
    fn truncated_input_is_parse_error() {
        let err = load_grid_reader("ROWS 5 COLS 5 OBSTACLES 2 1 1".as_bytes()).unwrap_err();
        assert!(matches!(err, GridError::Parse { expected: "row", .. }));
    }

    #[test]
    fn non_numeric_token_is_parse_error() {
        let err = load_grid_reader("ROWS five".as_bytes()).unwrap_err();
        match err {
            GridError::Parse { expected, found } => {
                assert_eq!(expected, "row count");
                assert_eq!(found, "`five`");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_grid_file(std::path::Path::new("/nonexistent/instance.txt")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
