//! Validation and shortest-path search for small, undirected transit
//! networks.
//!
//! ```
//! use transitroute_core::util::example_graphs::london_underground;
//!
//! let graph = london_underground();
//! graph.check().unwrap();
//!
//! let paths = graph.shortest_paths_from("Bank");
//! let route = &paths["Aldgate East"];
//! assert_eq!(Some(4), route.distance);
//! assert_eq!("Bank->Tower Hill->Aldgate East", route.stops("Aldgate East").join("->"));
//! ```
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod dijkstra;
pub mod errors;
pub mod graph;
pub mod planner;
pub mod types;
pub mod util;

pub use graph::Graph;
pub use planner::{Journey, RoutePlanner};
