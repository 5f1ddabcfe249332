use geo_types::{LineString, Point};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject};
use serde_json::json;
use waypoint_routing::{RoutingPath, SpatialGraph};

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        geometry: Some(geometry),
        properties: Some(properties),
        id: None,
        bbox: None,
        foreign_members: None,
    }
}

fn properties(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Every location as a Point, every road as a LineString and, when given,
/// the path as a single LineString drawn last.
pub fn render_network(graph: &SpatialGraph, path: Option<&RoutingPath>) -> GeoJson {
    let mut features: Vec<Feature> = graph
        .locations()
        .map(|(name, coordinate)| {
            feature(
                Geometry::new((&Point::from(coordinate)).into()),
                properties(json!({ "kind": "location", "name": name })),
            )
        })
        .collect();

    features.extend(graph.edges().map(|(from, to, weight)| {
        let line: LineString = [from, to]
            .iter()
            .filter_map(|name| graph.coordinate(name))
            .map(|coordinate| Point::from(coordinate).0)
            .collect();

        feature(
            Geometry::new((&line).into()),
            properties(json!({
                "kind": "road",
                "from": from,
                "to": to,
                "distance_km": weight.value(),
            })),
        )
    }));

    if let Some(path) = path {
        let line: LineString = path
            .nodes()
            .iter()
            .filter_map(|name| graph.coordinate(name))
            .map(|coordinate| Point::from(coordinate).0)
            .collect();

        features.push(feature(
            Geometry::new((&line).into()),
            properties(json!({
                "kind": "path",
                "nodes": path.nodes(),
                "distance_km": path.distance().value(),
            })),
        ));
    }

    GeoJson::FeatureCollection(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}
