use std::thread;

use rand::{SeedableRng, rngs::StdRng};
use waypoint_routing::{
    AStar, Dijkstra, GraphError, RoutingError, ShortestPathAlgorithm, ShortestPathOptions,
    SpatialGraph, astar::HaversineHeuristic, astar_heuristic::AStarHeuristic, batch::find_paths,
};

mod setup;

#[test]
fn test_adjacency_is_symmetric() {
    let graph = setup::create_random_graph(7, "N", 40, 3);

    for name in setup::node_names(&graph) {
        for (neighbor, weight) in graph.neighbors(&name) {
            let back = graph
                .neighbors(neighbor)
                .filter(|(other, _)| *other == name)
                .collect::<Vec<_>>();
            assert_eq!(back, vec![(name.as_str(), weight)]);
        }
    }
}

#[test]
fn test_astar_is_optimal() {
    for seed in [1, 2, 3, 4, 5] {
        let graph = setup::create_random_graph(seed, "N", 25, 2);
        let names = setup::node_names(&graph);

        let mut astar = AStar::new(&graph);
        let mut dijkstra = Dijkstra::new(&graph);

        for start in names.iter().step_by(3) {
            for goal in &names {
                let expected = dijkstra.calc_path(&graph, start, goal, None).unwrap();
                let actual = astar.calc_path(&graph, start, goal, None).unwrap();

                assert_eq!(
                    actual.path.as_ref().map(|path| path.distance()),
                    expected.path.as_ref().map(|path| path.distance()),
                    "seed {seed}: {start} -> {goal}"
                );
            }
        }
    }
}

#[test]
fn test_returned_paths_follow_existing_roads() {
    let graph = setup::create_random_graph(11, "N", 30, 2);
    let names = setup::node_names(&graph);

    for goal in &names {
        let Some(path) = graph.find_path(&names[0], goal).unwrap() else {
            continue;
        };

        assert_eq!(path.start(), names[0]);
        assert_eq!(path.end(), goal.as_str());

        for pair in path.nodes().windows(2) {
            assert!(
                graph
                    .neighbors(&pair[0])
                    .any(|(neighbor, _)| neighbor == pair[1])
            );
        }
    }
}

#[test]
fn test_astar_is_optimal_with_short_roads() {
    for seed in 0..3000 {
        let graph = setup::create_short_road_graph(seed, 8, 6);
        let names = setup::node_names(&graph);

        let mut astar = AStar::new(&graph);
        let mut dijkstra = Dijkstra::new(&graph);

        for goal in &names {
            let expected = dijkstra.calc_path(&graph, &names[0], goal, None).unwrap();
            let actual = astar.calc_path(&graph, &names[0], goal, None).unwrap();

            assert_eq!(
                actual.path.as_ref().map(|path| path.distance()),
                expected.path.as_ref().map(|path| path.distance()),
                "seed {seed}: N0 -> {goal}"
            );
        }
    }
}

fn assert_heuristic_is_consistent(graph: &SpatialGraph) {
    let names = setup::node_names(graph);
    let mut dijkstra = Dijkstra::new(graph);

    for goal in &names {
        let goal_id = graph.node_id(goal).unwrap();

        for node in &names {
            let node_id = graph.node_id(node).unwrap();
            let estimate = HaversineHeuristic.estimate(graph, node_id, goal_id);

            if let Some(path) = dijkstra.calc_path(graph, node, goal, None).unwrap().path {
                assert!(
                    estimate <= path.distance(),
                    "{node} -> {goal}: {estimate} > {}",
                    path.distance()
                );
            }

            for edge in graph.node_edges(node_id) {
                let next = HaversineHeuristic.estimate(graph, edge.adj_node(), goal_id);
                assert!(estimate <= edge.weight() + next, "{node} -> {goal}");
            }
        }
    }
}

#[test]
fn test_heuristic_never_overestimates() {
    assert_heuristic_is_consistent(&setup::create_random_graph(3, "N", 30, 3));

    for seed in 0..200 {
        assert_heuristic_is_consistent(&setup::create_short_road_graph(seed, 8, 6));
    }
}

#[test]
fn test_no_path_between_components() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = SpatialGraph::new();
    setup::add_random_component(&mut graph, &mut rng, "West", 10, 2);
    setup::add_random_component(&mut graph, &mut rng, "East", 10, 2);

    let mut astar = AStar::new(&graph);
    for i in 0..10 {
        let result = astar
            .calc_path(
                &graph,
                &setup::node_name("West", i),
                &setup::node_name("East", 9 - i),
                None,
            )
            .unwrap();
        assert!(result.path.is_none());
    }
}

#[test]
fn test_repeated_searches_are_deterministic() {
    let graph = setup::create_random_graph(9, "N", 30, 3);
    let names = setup::node_names(&graph);

    let first = graph.find_path(&names[0], &names[29]).unwrap();
    for _ in 0..10 {
        assert_eq!(graph.find_path(&names[0], &names[29]).unwrap(), first);
    }
}

#[test]
fn test_line_scenario() {
    let graph = setup::create_graph(
        &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", 0.0, 2.0)],
        &[("A", "B"), ("B", "C")],
    );

    let path = graph.find_path("A", "C").unwrap().unwrap();

    assert_eq!(path.nodes(), ["A", "B", "C"]);
    assert_eq!(
        path.distance(),
        graph.distance("A", "B").unwrap() + graph.distance("B", "C").unwrap()
    );

    let trivial = graph.find_path("A", "A").unwrap().unwrap();
    assert_eq!(trivial.nodes(), ["A"]);
    assert_eq!(trivial.distance().value(), 0.0);

    assert_eq!(
        graph.find_path("A", "Nowhere"),
        Err(RoutingError::UnknownNode("Nowhere".to_string()))
    );
}

#[test]
fn test_edge_to_unknown_node_fails() {
    let mut graph = setup::create_graph(&[("A", 0.0, 0.0)], &[]);

    assert_eq!(
        graph.add_edge("A", "B"),
        Err(GraphError::UnknownNode("B".to_string()))
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_concurrent_searches_share_the_graph() {
    let graph = setup::create_random_graph(5, "N", 30, 3);
    let names = setup::node_names(&graph);

    let expected = graph.find_path(&names[1], &names[20]).unwrap();

    thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| graph.find_path(&names[1], &names[20]).unwrap()))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_batch_queries_keep_order() {
    let graph = setup::create_random_graph(13, "N", 20, 2);
    let names = setup::node_names(&graph);

    let queries = names
        .iter()
        .zip(names.iter().rev())
        .map(|(start, goal)| (start.clone(), goal.clone()))
        .collect::<Vec<_>>();

    let results = find_paths(&graph, &queries, None);

    for ((start, goal), result) in queries.iter().zip(results) {
        assert_eq!(result, graph.find_path(start, goal));
    }
}

#[test]
fn test_iteration_limit_is_deterministic() {
    let graph = setup::create_graph(
        &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", 0.0, 2.0)],
        &[("A", "B"), ("B", "C")],
    );
    let options = Some(ShortestPathOptions {
        max_iterations: Some(1),
        ..Default::default()
    });

    let mut astar = AStar::new(&graph);
    let first = astar.calc_path(&graph, "A", "C", options);
    let second = astar.calc_path(&graph, "A", "C", options);

    assert_eq!(first.as_ref().err(), second.as_ref().err());
    assert_eq!(first.err(), Some(RoutingError::IterationLimitExceeded(1)));

    let unlimited = astar.calc_path(&graph, "A", "C", None).unwrap();
    assert!(unlimited.path.is_some());
}
