// A* route search demo on a synthetic road grid

use route_planner::{MemoryGraph, Point2D, RoutePlanner};

const GRID_SIZE: usize = 11;

/// Build a GRID_SIZE x GRID_SIZE road grid over the unit square with a
/// vertical wall in the middle, leaving one gap to route through
fn build_road_grid() -> MemoryGraph {
    let spacing = 1.0 / (GRID_SIZE - 1) as f64;
    // 1 normalized unit ~ 1 km
    let mut graph = MemoryGraph::with_metric_scale(1000.0);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            graph.add_node(Point2D::new(col as f64 * spacing, row as f64 * spacing));
        }
    }

    let blocked = |row: usize, col: usize| col == GRID_SIZE / 2 && row != GRID_SIZE - 2;
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if blocked(row, col) {
                continue;
            }
            let id = row * GRID_SIZE + col;
            if col + 1 < GRID_SIZE && !blocked(row, col + 1) {
                graph.add_edge(id, id + 1);
            }
            if row + 1 < GRID_SIZE && !blocked(row + 1, col) {
                graph.add_edge(id, id + GRID_SIZE);
            }
        }
    }

    graph
}

fn main() {
    println!("A* route search start!!");

    let graph = build_road_grid();
    println!("Road grid: {} nodes", graph.len());

    let start = (5.0, 5.0); // percent of bounding box
    let goal = (95.0, 95.0);
    println!("Start: ({}%, {}%), Goal: ({}%, {}%)", start.0, start.1, goal.0, goal.1);

    let mut planner = match RoutePlanner::new(&graph, start, goal) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("Planner setup failed: {}", e);
            return;
        }
    };

    match planner.search() {
        Ok(route) => {
            println!("Route found with {} nodes after expanding {} nodes", route.len(), planner.expanded());
            for node in &route.nodes {
                println!("  node {:3} at ({:.2}, {:.2})", node.id, node.position.x, node.position.y);
            }
            println!("Total distance: {:.1} m", route.distance);
        }
        Err(e) => {
            println!("Route search failed: {}", e);
        }
    }

    println!("A* route search finish!!");
}
