pub mod test_graph {
    use crate::{geopoint::GeoPoint, graph::SpatialGraph};

    /// A(0, 0) - B(0, 1) - C(0, 2) along the equator, without an A-C road.
    pub fn create_line_graph() -> SpatialGraph {
        let mut graph = SpatialGraph::new();
        graph.add_node("A", GeoPoint::new(0.0, 0.0));
        graph.add_node("B", GeoPoint::new(0.0, 1.0));
        graph.add_node("C", GeoPoint::new(0.0, 2.0));
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph
    }

    fn get_romania_cities() -> Vec<(&'static str, GeoPoint)> {
        vec![
            ("Arad", GeoPoint::new(46.1866, 21.3123)),
            ("Bucharest", GeoPoint::new(44.4268, 26.1025)),
            ("Craiova", GeoPoint::new(44.3302, 23.7949)),
            ("Dobreta", GeoPoint::new(44.6369, 22.6597)),
            ("Eforie", GeoPoint::new(44.0491, 28.6527)),
            ("Fagaras", GeoPoint::new(45.8416, 24.9731)),
            ("Giurgiu", GeoPoint::new(43.9037, 25.9699)),
            ("Hirsova", GeoPoint::new(44.6893, 27.9457)),
            ("Iasi", GeoPoint::new(47.1585, 27.6014)),
            ("Lugoj", GeoPoint::new(45.6886, 21.9031)),
            ("Mehadia", GeoPoint::new(44.9041, 22.3645)),
            ("Neamt", GeoPoint::new(46.9275, 26.3708)),
            ("Oradea", GeoPoint::new(47.0465, 21.9189)),
            ("Pitesti", GeoPoint::new(44.8565, 24.8692)),
            ("RimnicuVilcea", GeoPoint::new(45.0997, 24.3693)),
            ("Sibiu", GeoPoint::new(45.7983, 24.1256)),
            ("Timisoara", GeoPoint::new(45.7489, 21.2087)),
            ("Urziceni", GeoPoint::new(44.7165, 26.6411)),
            ("Vaslui", GeoPoint::new(46.6407, 27.7276)),
            ("Zerind", GeoPoint::new(46.6225, 21.5174)),
        ]
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn get_romania_roads() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Oradea", "Zerind"),
            ("Oradea", "Sibiu"),
            ("Zerind", "Arad"),
            ("Arad", "Sibiu"),
            ("Arad", "Timisoara"),
            ("Timisoara", "Lugoj"),
            ("Lugoj", "Mehadia"),
            ("Mehadia", "Dobreta"),
            ("Dobreta", "Craiova"),
            ("Craiova", "RimnicuVilcea"),
            ("Craiova", "Pitesti"),
            ("RimnicuVilcea", "Pitesti"),
            ("RimnicuVilcea", "Sibiu"),
            ("Sibiu", "Fagaras"),
            ("Fagaras", "Bucharest"),
            ("Pitesti", "Bucharest"),
            ("Bucharest", "Giurgiu"),
            ("Bucharest", "Urziceni"),
            ("Urziceni", "Hirsova"),
            ("Hirsova", "Eforie"),
            ("Urziceni", "Vaslui"),
            ("Vaslui", "Iasi"),
            ("Iasi", "Neamt"),
        ]
    }

    /// The classic Romania road map, weighted with real great-circle distances.
    pub fn create_romania_graph() -> SpatialGraph {
        let mut graph = SpatialGraph::new();

        for (name, coordinate) in get_romania_cities() {
            graph.add_node(name, coordinate);
        }

        for (from, to) in get_romania_roads() {
            graph.add_edge(from, to).unwrap();
        }

        graph
    }
}
