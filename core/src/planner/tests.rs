use super::*;
use crate::errors::ValidationError;
use crate::util::example_graphs::london_underground;
use pretty_assertions::assert_eq;

fn planner() -> RoutePlanner<u32> {
    RoutePlanner::new(london_underground()).unwrap()
}

#[test]
fn route_between_stations() {
    let journey = planner().route("Bank", "Aldgate East").unwrap();
    assert_eq!("Bank", journey.start.as_str());
    assert_eq!("Aldgate East", journey.end.as_str());
    assert_eq!(4, journey.distance);
    assert_eq!("Bank->Tower Hill->Aldgate East", journey.to_string());
}

#[test]
fn route_to_same_station() {
    let journey = planner().route("Victoria", "Victoria").unwrap();
    assert_eq!(0, journey.distance);
    assert_eq!("Victoria", journey.to_string());
}

#[test]
fn unknown_stations_are_rejected() {
    let p = planner();
    assert!(matches!(
        p.route("Hogwarts", "Bank"),
        Err(TransitRouteError::UnknownNode(name)) if name == "Hogwarts"
    ));
    assert!(matches!(
        p.route("Bank", "bank"),
        Err(TransitRouteError::UnknownNode(name)) if name == "bank"
    ));
    assert!(matches!(
        p.routes_from("Nowhere"),
        Err(TransitRouteError::UnknownNode(_))
    ));
}

#[test]
fn unreachable_destination() {
    let p = RoutePlanner::new(Graph::from_edges([("A", "B", 1u32), ("C", "D", 1)])).unwrap();
    assert!(matches!(
        p.route("A", "D"),
        Err(TransitRouteError::Unreachable { .. })
    ));
}

#[test]
fn invalid_graph_is_rejected() {
    let graph: Graph<u32> = Graph::from_adjacency(vec![("A", vec![("B", 5)]), ("B", vec![])]);
    let err = RoutePlanner::new(graph).unwrap_err();
    match err {
        TransitRouteError::InvalidGraph(source) => {
            let validation = source.downcast_ref::<ValidationError<u32>>().unwrap();
            assert_eq!(
                &ValidationError::MissingReciprocalEdge {
                    node: "A".into(),
                    neighbor: "B".into(),
                },
                validation
            );
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn stations_are_sorted() {
    let stations = planner().stations();
    assert_eq!(27, stations.len());
    assert_eq!("Aldgate East", stations[0].as_str());
    assert_eq!("Westminster", stations[26].as_str());
}

#[test]
fn routes_from_station() {
    let paths = planner().routes_from("Paddington").unwrap();
    assert_eq!(Some(9), paths.distance("Oxford Circus"));
}
