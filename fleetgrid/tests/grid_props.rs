use fleetgrid::{
    board::{Coordinate, Dimensions, GridManager, Marker, RectDimensions},
    fleet::Fleet,
    ships::{Orientation, Ship},
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const N: i32 = 10;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Vertical), Just(Orientation::Horizontal)]
}

/// Any single component outside of `0..N`.
fn far() -> impl Strategy<Value = i32> {
    prop_oneof![i32::min_value()..0, N..i32::max_value()]
}

/// Any coordinate with at least one component outside `0..N`.
fn outside() -> impl Strategy<Value = Coordinate> {
    prop_oneof![
        (far(), any::<i32>()).prop_map(|(row, col)| Coordinate::new(row, col)),
        (any::<i32>(), far()).prop_map(|(row, col)| Coordinate::new(row, col)),
    ]
}

fn random_grid(seed: u64) -> GridManager {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut setup = Fleet::standard().into_setup(RectDimensions::default());
    setup.place_randomly(&mut rng).unwrap();
    match setup.start() {
        Ok(grid) => grid,
        Err(_) => panic!("random placement left ships pending"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fresh_cells_are_water_and_valid(row in 0..N, col in 0..N) {
        let grid = GridManager::default();
        let coord = Coordinate::new(row, col);
        prop_assert_eq!(grid.get(coord), Some(Marker::Water));
        prop_assert!(grid.check_placement(&[coord]).is_valid());
    }

    #[test]
    fn outside_cells_are_out_of_bounds(seed in any::<u64>(), coord in outside()) {
        for grid in [GridManager::default(), random_grid(seed)].iter() {
            let check = grid.check_placement(&[coord]);
            prop_assert!(check.out_of_bounds());
            prop_assert!(!check.is_valid());
            prop_assert_eq!(grid.get(coord), None);
        }
    }

    #[test]
    fn committed_cells_block_intersecting_candidates(
        row in 0..N,
        col in 0..N,
        dir in orientation(),
        len in 1usize..=5,
        other_row in 0..N,
        other_col in 0..N,
        other_dir in orientation(),
        other_len in 1usize..=5,
    ) {
        let mut grid = GridManager::default();
        let a = Ship::new("A", len, 'A');
        let a_cells = a.project(Coordinate::new(row, col), dir);
        prop_assume!(grid.check_placement(&a_cells).is_valid());
        grid.place_ship(a, a_cells.clone()).unwrap();

        let b_cells = dir_cells(other_row, other_col, other_dir, other_len);
        let check = grid.check_placement(&b_cells);
        let intersects = b_cells.iter().any(|c| a_cells.contains(c));
        prop_assert_eq!(check.overlapping(), intersects);

        let fresh = GridManager::default().check_placement(&b_cells);
        if !intersects {
            prop_assert_eq!(check, fresh);
        }
    }

    #[test]
    fn render_is_idempotent(seed in any::<u64>()) {
        let grid = random_grid(seed);
        prop_assert_eq!(grid.render(), grid.render());
    }

    #[test]
    fn random_placement_fills_fleet_without_overlap(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let dim = grid.dimensions();
        let occupied = (0..dim.total_size())
            .map(|idx| dim.un_linearize(idx))
            .filter(|&coord| grid.get(coord) != Some(Marker::Water))
            .count();
        prop_assert_eq!(occupied, 15);
        prop_assert_eq!(grid.placed_ships().len(), 5);
        for ship in grid.placed_ships() {
            prop_assert_eq!(ship.cells().len(), ship.len());
            for &cell in ship.cells() {
                prop_assert_eq!(grid.get(cell), Some(Marker::Ship(ship.symbol())));
            }
        }
    }
}

fn dir_cells(row: i32, col: i32, dir: Orientation, len: usize) -> Vec<Coordinate> {
    dir.project(Coordinate::new(row, col), len)
}
