//! Match finder tests - run lengths and maximality on random boards

use match3::core::{find_matches, has_any_match, Grid, Palette, PieceSource, Refill};
use match3::types::{Axis, Cell, RefillPolicy};

fn random_grid(width: u8, height: u8, palette: u8, seed: u32) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    let mut source = PieceSource::new(Palette::new(palette).unwrap(), seed);
    RefillPolicy::Respawn.refill(&mut grid, &mut source);
    grid
}

#[test]
fn test_every_reported_run_is_uniform_and_maximal() {
    for seed in 1..=200u32 {
        let grid = random_grid(9, 9, 3 + (seed % 3) as u8, seed);
        for m in find_matches(&grid) {
            assert!(m.len >= 3, "seed {}: short run {:?}", seed, m);
            for cell in m.cells() {
                assert_eq!(grid.piece_at(cell), Some(m.piece));
            }

            let (dx, dy) = m.axis.step();
            let before = m.start.offset(-dx, -dy);
            let after = m.start.offset(dx * m.len as i16, dy * m.len as i16);
            assert_ne!(grid.piece_at(before), Some(m.piece), "seed {}: not maximal", seed);
            assert_ne!(grid.piece_at(after), Some(m.piece), "seed {}: not maximal", seed);
        }
    }
}

#[test]
fn test_every_triple_is_covered() {
    for seed in 1..=200u32 {
        let grid = random_grid(7, 10, 3, seed);
        let matches = find_matches(&grid);
        assert_eq!(has_any_match(&grid), !matches.is_empty());

        for cell in grid.cells() {
            let Some(piece) = grid.piece_at(cell) else {
                continue;
            };
            for axis in [Axis::Horizontal, Axis::Vertical] {
                let (dx, dy) = axis.step();
                let triple = grid.piece_at(cell.offset(dx, dy)) == Some(piece)
                    && grid.piece_at(cell.offset(2 * dx, 2 * dy)) == Some(piece);
                if triple {
                    assert!(
                        matches.iter().any(|m| m.axis == axis && m.contains(cell)),
                        "seed {}: triple at {:?} missed",
                        seed,
                        cell
                    );
                }
            }
        }
    }
}

#[test]
fn test_plus_shape_counts_center_twice() {
    let grid = Grid::from_rows(&["gbrgb", "bgrbg", "rrrrr", "gbrgb", "bgrbg"]).unwrap();
    let matches = find_matches(&grid);
    assert_eq!(matches.len(), 2);
    let center = Cell::new(2, 2);
    assert!(matches.iter().all(|m| m.contains(center)));
    assert_eq!(match3::core::pass_score(&matches), 10);
}
