pub mod example_graphs;
