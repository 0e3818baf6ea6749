use disjoint_paths_flow::disjoint_paths::graph::Graph;
use disjoint_paths_flow::disjoint_paths::status::Status;
use disjoint_paths_flow::disjoint_paths::successive_shortest_path::SuccessiveShortestPath;
use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    // two detections per time step over three time steps, source 0 and sink 7
    let edges = vec![(0, 1), (0, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 5), (3, 6), (4, 5), (4, 6), (5, 7), (6, 7)];
    let lengths = vec![0.0, 0.0, -1.0, 0.5, 0.5, -2.0, -1.5, 0.5, 0.5, -1.0, 0.0, 0.0];

    let mut graph = match Graph::new(8, &edges, 0, 7) {
        Ok(graph) => graph,
        Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidInput, e)),
    };

    let mut solver = SuccessiveShortestPath::default();
    match solver.solve(&mut graph, &lengths) {
        Status::Optimal => {
            println!("total length:{}", graph.total_length());
            for (i, path) in graph.retrieve_disjoint_paths().iter().enumerate() {
                println!("path {} length {} nodes {:?}", i, path.length(), path.nodes());
            }
            println!("clamped:{:?}", solver.clamped());
        }
        status => println!("{}", status),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    graph.write_edges(&mut out)?;
    graph.write_dot(&mut out)
}
