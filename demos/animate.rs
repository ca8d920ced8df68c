use grid_search::{Algorithm, Cell, Grid, Heuristic, Role};

// Advances an A* search a few frontier pops per frame and redraws the grid in between, the way
// an interactive front end would drive it.

const POPS_PER_FRAME: usize = 8;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut grid = Grid::new(12, 24);
    grid.set_source(Cell::new(6, 1));
    grid.set_target(Cell::new(6, 22));
    for row in 0..10 {
        grid.set_wall(Cell::new(row, 8));
        grid.set_wall(Cell::new(11 - row, 16));
    }

    let mut frontier = Vec::new();
    let mut search = Algorithm::AStar(Heuristic::Euclidean).start(&grid);
    let mut frame = 0;
    while !search.state().is_terminal() {
        for _ in 0..POPS_PER_FRAME {
            search.step_observed(&mut |cell, role| {
                if role == Role::Frontier {
                    frontier.push(cell);
                }
            });
        }
        frame += 1;
        println!(
            "Frame {frame}: {} explored, {} queued",
            search.explored().len(),
            search.frontier_len()
        );
    }
    let result = search.into_result();
    println!("{:?} after {} frames", result.state, frame);
    print!("{}", grid.render_with(&result));
    println!("{} cells were pushed in total", frontier.len());
}
