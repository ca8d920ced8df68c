use grid_search::{BfsSolver, Cell, Grid, GridSolver};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  T|
//  ___
// where
// - # marks a wall
// - S marks the source
// - T marks the target

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut grid = Grid::new(3, 3);
    grid.set_wall(Cell::new(1, 1));
    grid.set_source(Cell::new(0, 0));
    grid.set_target(Cell::new(2, 2));
    println!("{}", grid);
    let result = BfsSolver.solve(&grid);
    println!("Path:");
    for c in &result.path {
        println!("{}", c);
    }
    print!("{}", grid.render_with(&result));
}
