mod dag_distance;
mod dijkstra;
pub mod export;
pub mod graph;
mod indexed_heap;
pub mod path;
pub mod reduced_cost;
pub mod status;
pub mod successive_shortest_path;
mod topological_order;
