pub mod disjoint_paths;
