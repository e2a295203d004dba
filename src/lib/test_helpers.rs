// GeoJSON samples taken from RFC 7946, appendix A.

use super::geo::Location;
use super::geojson::Geometry;

pub const POINT_GEOJSON: &str = r#"
{
    "type": "Point",
    "coordinates": [100.0, 0.0]
}
"#;

pub const LINE_STRING_GEOJSON: &str = r#"
{
    "type": "LineString",
    "coordinates": [
        [100.0, 0.0],
        [101.0, 1.0]
    ]
}
"#;

pub const POLYGON_GEOJSON: &str = r#"
{
    "type": "Polygon",
    "coordinates": [
        [
            [100.0, 0.0],
            [101.0, 0.0],
            [101.0, 1.0],
            [100.0, 1.0],
            [100.0, 0.0]
        ],
        [
            [100.8, 0.8],
            [100.8, 0.2],
            [100.2, 0.2],
            [100.2, 0.8],
            [100.8, 0.8]
        ]
    ]
}
"#;

fn locations(coordinates: &[(f64, f64)]) -> Vec<Location> {
    coordinates
        .iter()
        .map(|&(lat, lon)| Location::new(lat, lon))
        .collect()
}

pub fn point_geometry() -> Geometry {
    Geometry::Point {
        coordinates: Location::new(0., 100.),
    }
}

pub fn line_string_geometry() -> Geometry {
    Geometry::LineString {
        coordinates: locations(&[(0., 100.), (1., 101.)]),
    }
}

pub fn polygon_geometry() -> Geometry {
    let outer = locations(&[(0., 100.), (0., 101.), (1., 101.), (1., 100.), (0., 100.)]);
    let inner = locations(&[(0.8, 100.8), (0.2, 100.8), (0.2, 100.2), (0.8, 100.2), (0.8, 100.8)]);
    Geometry::Polygon {
        coordinates: vec![outer, inner],
    }
}
