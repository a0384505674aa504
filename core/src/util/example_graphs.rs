use crate::graph::Graph;

/// Creates the central London underground network with travel times in
/// minutes between neighboring stations.
pub fn london_underground() -> Graph<u32> {
    Graph::from_edges([
        ("Paddington", "Baker Street", 6),
        ("Paddington", "Notting Hill Gate", 4),
        ("Notting Hill Gate", "Bond Street", 7),
        ("Notting Hill Gate", "South Kensington", 7),
        ("South Kensington", "Green Park", 7),
        ("South Kensington", "Victoria", 4),
        ("Baker Street", "Bond Street", 2),
        ("Baker Street", "Oxford Circus", 4),
        ("Baker Street", "Kings Cross", 7),
        ("Bond Street", "Green Park", 2),
        ("Bond Street", "Oxford Circus", 1),
        ("Green Park", "Oxford Circus", 2),
        ("Green Park", "Piccadilly Circus", 1),
        ("Green Park", "Westminster", 3),
        ("Green Park", "Victoria", 2),
        ("Victoria", "Westminster", 4),
        ("Oxford Circus", "Warren Street", 2),
        ("Oxford Circus", "Tottenham Court Road", 2),
        ("Oxford Circus", "Piccadilly Circus", 2),
        ("Piccadilly Circus", "Leicester Square", 2),
        ("Piccadilly Circus", "Charing Cross", 2),
        ("Westminster", "Embankment", 2),
        ("Westminster", "Waterloo", 2),
        ("Warren Street", "Kings Cross", 3),
        ("Warren Street", "Tottenham Court Road", 3),
        ("Tottenham Court Road", "Holborn", 2),
        ("Tottenham Court Road", "Leicester Square", 1),
        ("Leicester Square", "Charing Cross", 2),
        ("Leicester Square", "Holborn", 2),
        ("Charing Cross", "Embankment", 1),
        ("Embankment", "Blackfriars", 4),
        ("Embankment", "Waterloo", 2),
        ("Waterloo", "London Bridge", 3),
        ("Waterloo", "Elephant and Castle", 4),
        ("Elephant and Castle", "London Bridge", 3),
        ("Holborn", "Kings Cross", 4),
        ("Holborn", "Bank", 5),
        ("Kings Cross", "Moorgate", 6),
        ("Kings Cross", "Old Street", 6),
        ("Blackfriars", "Bank", 4),
        ("Old Street", "Moorgate", 1),
        ("Moorgate", "Liverpool Street", 2),
        ("Moorgate", "Bank", 3),
        ("Bank", "Liverpool Street", 2),
        ("Bank", "Tower Hill", 2),
        ("Bank", "London Bridge", 2),
        ("Liverpool Street", "Tower Hill", 6),
        ("Liverpool Street", "Aldgate East", 4),
        ("Tower Hill", "Aldgate East", 2),
    ])
}

/// Creates a small graph with four stations:
///
/// ```plain
/// Paddington --1-- Kings Cross
///      \              |
///       6             4
///        \            |
///         +------- Euston --8-- Waterloo
/// ```
pub fn four_stations() -> Graph<u32> {
    Graph::from_edges([
        ("Paddington", "Kings Cross", 1),
        ("Paddington", "Euston", 6),
        ("Kings Cross", "Euston", 4),
        ("Euston", "Waterloo", 8),
    ])
}

/// Creates an example graph with the following structure:
///
/// ```plain
/// A --4-- B --4-- C --3-- E
///  \      |      /       /
///   2     1     1       /
///    \    |    /       /
///     +-- D --+---7---+
/// ```
pub fn five_node_mesh() -> Graph<u32> {
    Graph::from_edges([
        ("A", "B", 4),
        ("A", "D", 2),
        ("B", "C", 4),
        ("B", "D", 1),
        ("C", "D", 1),
        ("C", "E", 3),
        ("D", "E", 7),
    ])
}

/// Creates an example graph with seven nodes and twelve edges.
pub fn seven_node_mesh() -> Graph<u32> {
    Graph::from_edges([
        ("A", "B", 12),
        ("A", "F", 16),
        ("A", "G", 14),
        ("B", "C", 10),
        ("B", "F", 7),
        ("C", "D", 3),
        ("C", "E", 5),
        ("C", "F", 6),
        ("D", "E", 4),
        ("E", "F", 2),
        ("E", "G", 8),
        ("F", "G", 9),
    ])
}
