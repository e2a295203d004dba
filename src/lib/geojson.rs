use super::codec::{encode, Decoder};
use super::error::{DecodeError, UnsupportedGeometry};
use super::geo::Location;
use geo_types::Coordinate;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The geometry types of the supported GeoJSON subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
}

impl GeometryType {
    /// The value of the `type` member.
    pub fn name(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
        }
    }

    /// Looks up a `type` member, which is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Point" => Some(GeometryType::Point),
            "LineString" => Some(GeometryType::LineString),
            "Polygon" => Some(GeometryType::Polygon),
            _ => None,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A GeoJSON geometry.
///
/// Sequences keep the order of the source document. The first ring of a
/// polygon is its exterior, any further rings are holes. Neither ring closure
/// nor minimum lengths are checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point { coordinates: Location },
    LineString { coordinates: Vec<Location> },
    Polygon { coordinates: Vec<Vec<Location>> },
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point { .. } => GeometryType::Point,
            Geometry::LineString { .. } => GeometryType::LineString,
            Geometry::Polygon { .. } => GeometryType::Polygon,
        }
    }
}

fn positions(locations: &[Location]) -> Vec<[f64; 2]> {
    locations.iter().map(<[f64; 2]>::from).collect()
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Geometry", 2)?;
        state.serialize_field("type", self.geometry_type().name())?;
        match self {
            Geometry::Point { coordinates } => {
                state.serialize_field("coordinates", &<[f64; 2]>::from(coordinates))?
            }
            Geometry::LineString { coordinates } => {
                state.serialize_field("coordinates", &positions(coordinates))?
            }
            Geometry::Polygon { coordinates } => {
                let rings: Vec<_> = coordinates.iter().map(|ring| positions(ring)).collect();
                state.serialize_field("coordinates", &rings)?
            }
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Decoder::default()
            .decode_node(&value)
            .map_err(de::Error::custom)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Geometry {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decoder::default().try_decode(s)
    }
}

fn line_string(locations: &[Location]) -> geo_types::LineString<f64> {
    let coordinates: Vec<Coordinate<f64>> = locations.iter().map(|&loc| loc.into()).collect();
    geo_types::LineString(coordinates)
}

fn locations(line_string: &geo_types::LineString<f64>) -> Vec<Location> {
    line_string.0.iter().map(|&c| c.into()).collect()
}

impl From<&Geometry> for geo_types::Geometry<f64> {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point { coordinates } => geo_types::Geometry::Point((*coordinates).into()),
            Geometry::LineString { coordinates } => {
                geo_types::Geometry::LineString(line_string(coordinates))
            }
            Geometry::Polygon { coordinates } => {
                let mut rings = coordinates.iter().map(|ring| line_string(ring));
                let exterior = rings.next().unwrap_or_else(|| geo_types::LineString(vec![]));
                let polygon = geo_types::Polygon::new(exterior, rings.collect());
                geo_types::Geometry::Polygon(polygon)
            }
        }
    }
}

impl From<Geometry> for geo_types::Geometry<f64> {
    fn from(geometry: Geometry) -> Self {
        (&geometry).into()
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geometry {
    type Error = UnsupportedGeometry;

    fn try_from(geometry: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            geo_types::Geometry::Point(point) => Ok(Geometry::Point {
                coordinates: point.into(),
            }),
            geo_types::Geometry::LineString(ls) => Ok(Geometry::LineString {
                coordinates: locations(&ls),
            }),
            geo_types::Geometry::Polygon(polygon) => {
                let exterior = polygon.exterior();
                let interiors = polygon.interiors();
                if exterior.0.is_empty() && interiors.is_empty() {
                    return Ok(Geometry::Polygon {
                        coordinates: vec![],
                    });
                }
                let coordinates = std::iter::once(exterior)
                    .chain(interiors)
                    .map(locations)
                    .collect();
                Ok(Geometry::Polygon { coordinates })
            }
            geo_types::Geometry::Line(_) => Err(UnsupportedGeometry("Line")),
            geo_types::Geometry::MultiPoint(_) => Err(UnsupportedGeometry("MultiPoint")),
            geo_types::Geometry::MultiLineString(_) => {
                Err(UnsupportedGeometry("MultiLineString"))
            }
            geo_types::Geometry::MultiPolygon(_) => Err(UnsupportedGeometry("MultiPolygon")),
            geo_types::Geometry::GeometryCollection(_) => {
                Err(UnsupportedGeometry("GeometryCollection"))
            }
            geo_types::Geometry::Rect(_) => Err(UnsupportedGeometry("Rect")),
            geo_types::Geometry::Triangle(_) => Err(UnsupportedGeometry("Triangle")),
        }
    }
}
