//! Property tests over arbitrary small grids.

use proptest::prelude::*;

use gem_swap::matching::{find_shapes, merge, scan, Axis};
use gem_swap::{Board, Grid, Move, Position, Token};

/// Few colors so runs are common.
fn token() -> impl Strategy<Value = Token> {
    prop::sample::select(vec![Token::Red, Token::Blue, Token::Green, Token::Empty])
}

fn grid() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(|(width, height)| {
        prop::collection::vec(token(), width * height).prop_map(move |cells| {
            let rows = cells.chunks(width).map(<[Token]>::to_vec).collect();
            Grid::from_rows(rows).unwrap()
        })
    })
}

fn position() -> impl Strategy<Value = Position> {
    (0usize..10, 0usize..10).prop_map(|(x, y)| Position::new(x, y))
}

/// Cell one step before (`-1`) or after (`+1`) `pos` along `axis`.
fn step(pos: Position, axis: Axis, forward: bool) -> Option<Position> {
    match (axis, forward) {
        (Axis::Horizontal, true) => Some(Position::new(pos.x + 1, pos.y)),
        (Axis::Vertical, true) => Some(Position::new(pos.x, pos.y + 1)),
        (Axis::Horizontal, false) => pos.x.checked_sub(1).map(|x| Position::new(x, pos.y)),
        (Axis::Vertical, false) => pos.y.checked_sub(1).map(|y| Position::new(pos.x, y)),
    }
}

proptest! {
    #[test]
    fn read_after_write(mut grid in grid(), x in 0usize..8, y in 0usize..8, t in token()) {
        let pos = Position::new(x, y);
        if grid.contains(pos) {
            grid.set(pos, t).unwrap();
            prop_assert_eq!(grid.get(pos), Some(t));
        } else {
            prop_assert!(grid.set(pos, t).is_err());
            prop_assert_eq!(grid.get(pos), None);
        }
    }

    #[test]
    fn non_adjacent_moves_are_illegal(grid in grid(), from in position(), to in position()) {
        prop_assume!(from.manhattan_distance(to) != 1);
        let board = Board::from_grid(grid, 3).unwrap();
        prop_assert!(!board.is_legal_move(Move::new(from, to)));
    }

    #[test]
    fn make_move_swaps_exactly_or_not_at_all(grid in grid(), from in position(), to in position()) {
        let mut board = Board::from_grid(grid, 3).unwrap();
        let before = board.clone();
        let mv = Move::new(from, to);

        if board.make_move(mv) {
            for pos in board.grid().positions() {
                let source = if pos == from { to } else if pos == to { from } else { pos };
                prop_assert_eq!(board.get(pos), before.get(source));
            }
        } else {
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn runs_are_long_uniform_and_maximal(grid in grid(), min_length in 2usize..5) {
        for run in scan(&grid, min_length) {
            prop_assert!(run.len() >= min_length);
            for &pos in &run.cells {
                prop_assert_eq!(grid.get(pos), Some(run.color));
            }

            let axis = run.axis().unwrap();
            let first = run.cells[0];
            let last = run.cells[run.len() - 1];
            for neighbour in [step(first, axis, false), step(last, axis, true)].into_iter().flatten() {
                prop_assert_ne!(grid.get(neighbour), Some(run.color));
            }
        }
    }

    #[test]
    fn merge_partitions_runs(grid in grid()) {
        let runs = scan(&grid, 3);
        let shapes = merge(&runs);

        let total: usize = shapes.iter().map(|s| s.runs().len()).sum();
        prop_assert_eq!(total, runs.len());
        for run in &runs {
            let owners = shapes.iter().filter(|s| s.runs().contains(run)).count();
            prop_assert_eq!(owners, 1);
        }
        for shape in &shapes {
            prop_assert_eq!(shape.is_compound(), shape.runs().len() > 1);
        }
    }

    #[test]
    fn shapes_are_idempotent(grid in grid()) {
        prop_assert_eq!(find_shapes(&grid, 3), find_shapes(&grid, 3));
    }

    #[test]
    fn resolve_leaves_no_playable_runs(grid in grid()) {
        let mut board = Board::from_grid(grid, 3).unwrap();
        board.resolve();

        for shape in board.shapes() {
            for run in shape.runs() {
                prop_assert!(!run.color.is_playable());
            }
        }
    }
}
