use grid_search::{Algorithm, Cell, Grid};

// Runs every algorithm on the same maze-like grid and reports explored cells and path length.

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut grid = Grid::new(15, 15);
    for row in (2..15).step_by(4) {
        for column in 0..13 {
            grid.set_wall(Cell::new(row, column));
        }
    }
    for row in (4..15).step_by(4) {
        for column in 2..15 {
            grid.set_wall(Cell::new(row, column));
        }
    }
    grid.set_source(Cell::new(0, 0));
    grid.set_target(Cell::new(14, 14));
    println!("{}", grid);
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&grid);
        match result.edge_count() {
            Some(length) => println!(
                "{:>16}: {:>3} explored, path of {} steps",
                algorithm.name(),
                result.explored.len(),
                length
            ),
            None => println!("{:>16}: no path", algorithm.name()),
        }
    }
}
