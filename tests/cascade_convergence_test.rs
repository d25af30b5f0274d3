//! Cascade tests - random boards always settle, gravity keeps column order

use match3::core::refill::collapse;
use match3::core::{find_matches, BoardEngine, Grid, Palette, PieceSource, Refill, SimpleRng};
use match3::types::{Cell, EngineState, RefillPolicy};

fn random_grid(width: u8, height: u8, palette: Palette, seed: u32) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    RefillPolicy::Respawn.refill(&mut grid, &mut PieceSource::new(palette, seed));
    grid
}

#[test]
fn test_random_boards_converge_under_both_policies() {
    let mut rng = SimpleRng::new(31337);
    for round in 0..120u32 {
        let width = 3 + rng.next_range(18) as u8;
        let height = 3 + rng.next_range(18) as u8;
        let palette = Palette::new(4 + rng.next_range(5) as u8).unwrap();
        let seed = rng.next_u32();

        for policy in [RefillPolicy::Respawn, RefillPolicy::Gravity] {
            let grid = random_grid(width, height, palette, seed);
            let had_matches = !find_matches(&grid).is_empty();
            let mut engine = BoardEngine::with_grid(grid, palette, policy, seed);

            let gained = engine.resolve_cascade().unwrap_or_else(|e| {
                panic!("round {} {}x{} {:?}: {}", round, width, height, policy, e)
            });

            assert_eq!(engine.state(), EngineState::Idle);
            assert!(engine.grid().is_full());
            assert!(find_matches(engine.grid()).is_empty());
            assert_eq!(gained > 0, had_matches);
            assert_eq!(engine.score(), gained);
        }
    }
}

#[test]
fn test_gravity_preserves_column_order() {
    let mut rng = SimpleRng::new(5);
    let palette = Palette::new(6).unwrap();
    for seed in 1..=100u32 {
        let mut grid = random_grid(6, 9, palette, seed);

        // Punch random holes, remembering the survivors of each column.
        let mut survivors: Vec<Vec<_>> = Vec::new();
        for x in 0..6i16 {
            let mut column = Vec::new();
            for y in 0..9i16 {
                let cell = Cell::new(x, y);
                if rng.next_range(3) == 0 {
                    grid.set(cell, None).unwrap();
                } else {
                    column.push(grid.piece_at(cell).unwrap());
                }
            }
            survivors.push(column);
        }

        let mut source = PieceSource::new(palette, seed);
        collapse(&mut grid, &mut source);

        assert!(grid.is_full());
        for (x, column) in survivors.iter().enumerate() {
            for (y, piece) in column.iter().enumerate() {
                assert_eq!(
                    grid.piece_at(Cell::new(x as i16, y as i16)),
                    Some(*piece),
                    "seed {} column {}",
                    seed,
                    x
                );
            }
        }
    }
}

#[test]
fn test_respawn_keeps_survivors_in_place() {
    let palette = Palette::new(5).unwrap();
    let mut grid = random_grid(5, 5, palette, 9);
    let holes = [Cell::new(0, 0), Cell::new(2, 3), Cell::new(4, 4)];
    for cell in holes {
        grid.set(cell, None).unwrap();
    }
    let before = grid.clone();

    RefillPolicy::Respawn.refill(&mut grid, &mut PieceSource::new(palette, 9));

    for cell in before.cells() {
        if !holes.contains(&cell) {
            assert_eq!(grid.piece_at(cell), before.piece_at(cell));
        }
        assert!(palette.contains(grid.piece_at(cell).unwrap()));
    }
}
