use gridlife::{CellState, Grid, TransitionEngine};

#[test]
fn lone_center_cell_leaves_an_empty_board() {
    let grid = Grid::new(3, 3).with_cell(1, 1, CellState::On);
    let next = TransitionEngine::default().step(&grid);

    assert_eq!(next.dimensions(), (3, 3));
    assert_eq!(next.population(), 0);
    // input board is untouched
    assert_eq!(grid.get(1, 1), CellState::On);
}

#[test]
fn single_cell_board_turns_off() {
    let grid = Grid::new(1, 1).with_cell(0, 0, CellState::On);
    let next = TransitionEngine::default().step(&grid);

    assert_eq!(next.dimensions(), (1, 1));
    assert_eq!(next.get(0, 0), CellState::Off);
}

#[test]
fn every_outside_coordinate_reads_off() {
    let grid = Grid::from_fn(4, 3, |_, _| CellState::On);
    for y in -2..5 {
        for x in -2..6 {
            let inside = (0..4).contains(&x) && (0..3).contains(&y);
            assert_eq!(grid.get(x, y).is_on(), inside, "({x}, {y})");
        }
    }
}

#[test]
fn repeated_steps_agree() {
    let grid = Grid::parse("1 1 . 1\n. 1 1 .\n1 . 1 1\n").unwrap();
    let engine = TransitionEngine::default();
    for _ in 0..3 {
        assert_eq!(engine.step(&grid), engine.step(&grid));
    }
    assert_eq!(engine.step(&grid).dimensions(), (4, 3));
}
