use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use seabattle::{
    Board, Cell, Coordinate, FireOutcome, GameStatus, ValidationError, BOARD_SIZE, FLEET,
    NUM_SHIPS, TOTAL_DECKS,
};

type Layout = Vec<(Coordinate, Coordinate)>;

const LAYOUTS: [[(Coordinate, Coordinate); 10]; 2] = [
    [
        ((0, 0), (0, 3)),
        ((2, 0), (2, 2)),
        ((4, 0), (4, 2)),
        ((6, 0), (6, 1)),
        ((8, 0), (8, 1)),
        ((0, 5), (0, 6)),
        ((9, 3), (9, 3)),
        ((9, 5), (9, 5)),
        ((7, 9), (7, 9)),
        ((5, 9), (5, 9)),
    ],
    [
        ((0, 9), (3, 9)),
        ((0, 0), (2, 0)),
        ((0, 2), (2, 2)),
        ((4, 0), (5, 0)),
        ((4, 2), (5, 2)),
        ((7, 0), (8, 0)),
        ((9, 9), (9, 9)),
        ((9, 5), (9, 5)),
        ((5, 5), (5, 5)),
        ((7, 7), (7, 7)),
    ],
];

/// Transposing, mirroring and swapping endpoints all keep a fleet legal.
fn transform(
    layout: &[(Coordinate, Coordinate)],
    transpose: bool,
    flip_rows: bool,
    flip_cols: bool,
    reverse: bool,
) -> Layout {
    let map = |(r, c): Coordinate| {
        let (r, c) = if transpose { (c, r) } else { (r, c) };
        let r = if flip_rows { BOARD_SIZE - 1 - r } else { r };
        let c = if flip_cols { BOARD_SIZE - 1 - c } else { c };
        (r, c)
    };
    layout
        .iter()
        .map(|&(a, b)| {
            if reverse {
                (map(b), map(a))
            } else {
                (map(a), map(b))
            }
        })
        .collect()
}

fn valid_layout() -> impl Strategy<Value = Layout> {
    (
        0..LAYOUTS.len(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(idx, t, fr, fc, rev)| transform(&LAYOUTS[idx], t, fr, fc, rev))
}

/// Ships of the right classes dropped anywhere on the board; most of these
/// collide.
fn scattered_fleet() -> impl Strategy<Value = Layout> {
    let lengths: Vec<usize> = FLEET
        .iter()
        .flat_map(|class| std::iter::repeat(class.length()).take(class.count()))
        .collect();
    proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE, any::<bool>()), NUM_SHIPS).prop_map(
        move |origins| {
            origins
                .iter()
                .zip(&lengths)
                .map(|(&(r, c, vertical), &len)| {
                    if vertical {
                        let r = r.min(BOARD_SIZE - len);
                        ((r, c), (r + len - 1, c))
                    } else {
                        let c = c.min(BOARD_SIZE - len);
                        ((r, c), (r, c + len - 1))
                    }
                })
                .collect::<Layout>()
        },
    )
}

fn cells_between((r1, c1): Coordinate, (r2, c2): Coordinate) -> Vec<Coordinate> {
    (r1.min(r2)..=r1.max(r2))
        .flat_map(|r| (c1.min(c2)..=c1.max(c2)).map(move |c| (r, c)))
        .collect()
}

fn touches(a: Coordinate, b: Coordinate) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

fn ship_cells(layout: &[(Coordinate, Coordinate)]) -> Vec<Vec<Coordinate>> {
    layout.iter().map(|&(s, e)| cells_between(s, e)).collect()
}

fn owner(cells: &[Vec<Coordinate>], target: Coordinate) -> Option<usize> {
    cells.iter().position(|ship| ship.contains(&target))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn valid_fleet_composition(layout in valid_layout()) {
        let board = Board::new(&layout).unwrap();
        for class in FLEET.iter() {
            let found = board.ships().iter().filter(|s| s.len() == class.length()).count();
            prop_assert_eq!(found, class.count());
        }
        let decks: usize = board.ships().iter().map(|s| s.len()).sum();
        prop_assert_eq!(decks, TOTAL_DECKS);
        prop_assert_eq!(board.fleet_mask().count_ones(), TOTAL_DECKS);
        prop_assert_eq!(board.status(), GameStatus::Active);

        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for da in a.decks() {
                    for db in b.decks() {
                        prop_assert!(!touches(da.coordinate(), db.coordinate()));
                    }
                }
            }
        }
    }

    #[test]
    fn construction_matches_spacing_oracle(layout in scattered_fleet()) {
        let cells = ship_cells(&layout);
        let clash = (0..cells.len()).any(|i| {
            (i + 1..cells.len())
                .any(|j| cells[i].iter().any(|&a| cells[j].iter().any(|&b| touches(a, b))))
        });
        match Board::new(&layout) {
            Ok(board) => {
                prop_assert!(!clash);
                prop_assert_eq!(board.fleet_mask().count_ones(), TOTAL_DECKS);
            }
            Err(err) => {
                prop_assert!(clash);
                let spacing = matches!(
                    err,
                    ValidationError::Overlap { .. } | ValidationError::Adjacent { .. }
                );
                prop_assert!(spacing, "unexpected error {:?}", err);
            }
        }
    }

    #[test]
    fn miss_changes_nothing(
        layout in valid_layout(),
        row in 0..BOARD_SIZE + 2,
        col in 0..BOARD_SIZE + 2
    ) {
        let mut board = Board::new(&layout).unwrap();
        prop_assume!(owner(&ship_cells(&layout), (row, col)).is_none());
        let before = board.render();
        prop_assert_eq!(board.fire((row, col)), FireOutcome::Miss);
        prop_assert_eq!(board.render(), before);
        prop_assert_eq!(board.ships_afloat(), NUM_SHIPS);
    }

    #[test]
    fn shots_follow_fleet_model(
        layout in valid_layout(),
        shots in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..80)
    ) {
        let mut board = Board::new(&layout).unwrap();
        let cells = ship_cells(&layout);
        let mut struck: Vec<Vec<Coordinate>> = vec![Vec::new(); cells.len()];
        let mut sunk = vec![false; cells.len()];

        for shot in shots {
            let outcome = board.fire(shot);
            match owner(&cells, shot) {
                None => prop_assert_eq!(outcome, FireOutcome::Miss),
                Some(idx) => {
                    if !struck[idx].contains(&shot) {
                        struck[idx].push(shot);
                    }
                    let expected = if struck[idx].len() == cells[idx].len() {
                        FireOutcome::Sunk
                    } else {
                        FireOutcome::Hit
                    };
                    if sunk[idx] {
                        prop_assert_eq!(outcome, FireOutcome::Sunk);
                    }
                    prop_assert_eq!(outcome, expected);
                    sunk[idx] = outcome == FireOutcome::Sunk;
                    let shown = if sunk[idx] { Cell::Sunk } else { Cell::Hit };
                    prop_assert_eq!(board.cell(shot.0, shot.1), Some(shown));
                }
            }
        }
        let afloat = sunk.iter().filter(|s| !**s).count();
        prop_assert_eq!(board.ships_afloat(), afloat);
    }

    #[test]
    fn full_sweep_sinks_everything(layout in valid_layout(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut order: Vec<Coordinate> = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .collect();
        order.shuffle(&mut rng);

        let mut board = Board::new(&layout).unwrap();
        let outcomes: Vec<_> = order.iter().map(|&cell| board.fire(cell)).collect();
        let count = |o: FireOutcome| outcomes.iter().filter(|x| **x == o).count();
        prop_assert_eq!(count(FireOutcome::Sunk), NUM_SHIPS);
        prop_assert_eq!(count(FireOutcome::Hit), TOTAL_DECKS - NUM_SHIPS);
        prop_assert_eq!(count(FireOutcome::Miss), BOARD_SIZE * BOARD_SIZE - TOTAL_DECKS);
        prop_assert_eq!(board.status(), GameStatus::Won);
        prop_assert!(!board.render().contains('□'));
    }
}
