use super::error::{DecodeError, Result};
use super::geo::Location;
use super::geojson::{Geometry, GeometryType};
use super::json::JsonNode;
use super::options::{DecodeOptions, ExtraDimensions};
use log::{debug, trace};
use serde_json::Value;

/// Decodes GeoJSON geometries using a fixed set of [`DecodeOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Decoder { options }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decodes `text`, returning `None` for anything that is not a valid
    /// geometry of the supported subset.
    pub fn decode(&self, text: &str) -> Option<Geometry> {
        log_rejection(self.try_decode(text))
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Option<Geometry> {
        log_rejection(self.try_decode_slice(bytes))
    }

    pub fn try_decode(&self, text: &str) -> Result<Geometry> {
        let value: Value = serde_json::from_str(text)?;
        self.decode_node(&value)
    }

    pub fn try_decode_slice(&self, bytes: &[u8]) -> Result<Geometry> {
        let text = std::str::from_utf8(bytes)?;
        self.try_decode(text)
    }

    /// Decodes a geometry from an already parsed JSON tree.
    ///
    /// Members other than `type` and `coordinates` are ignored.
    pub fn decode_node<N: JsonNode>(&self, node: &N) -> Result<Geometry> {
        if !node.is_object() {
            return Err(DecodeError::NotAnObject);
        }
        let name = node
            .get("type")
            .ok_or(DecodeError::MissingMember("type"))?
            .as_str()
            .ok_or(DecodeError::InvalidMember {
                member: "type",
                expected: "a string",
            })?;
        let coordinates = node
            .get("coordinates")
            .ok_or(DecodeError::MissingMember("coordinates"))?;
        if coordinates.as_array().is_none() {
            return Err(DecodeError::InvalidMember {
                member: "coordinates",
                expected: "an array",
            });
        }
        let geometry_type =
            GeometryType::from_name(name).ok_or_else(|| DecodeError::UnknownType(name.into()))?;

        let mut path = vec![];
        let geometry = match geometry_type {
            GeometryType::Point => Geometry::Point {
                coordinates: self.position(coordinates, &mut path)?,
            },
            GeometryType::LineString => Geometry::LineString {
                coordinates: self.positions(coordinates, &mut path)?,
            },
            GeometryType::Polygon => Geometry::Polygon {
                coordinates: each(coordinates, &mut path, |ring, path| {
                    self.positions(ring, path)
                })?,
            },
        };
        trace!("decoded {}", geometry_type);
        Ok(geometry)
    }

    fn positions<N: JsonNode>(&self, node: &N, path: &mut Vec<usize>) -> Result<Vec<Location>> {
        each(node, path, |position, path| self.position(position, path))
    }

    fn position<N: JsonNode>(&self, node: &N, path: &mut Vec<usize>) -> Result<Location> {
        let elements = array(node, path)?;
        let len = elements.len();
        let (arity_ok, expected) = match self.options.extra_dimensions {
            ExtraDimensions::Reject => (len == 2, "2"),
            ExtraDimensions::Ignore => (len >= 2, "at least 2"),
        };
        if !arity_ok {
            return Err(DecodeError::PositionArity {
                path: pointer(path),
                len,
                expected,
            });
        }

        let mut position = [0.; 2];
        for (i, element) in elements.iter().enumerate() {
            let value = element.as_f64().ok_or_else(|| {
                path.push(i);
                let err = DecodeError::NotANumber {
                    path: pointer(path),
                };
                path.pop();
                err
            })?;
            if i < 2 {
                position[i] = value;
            }
        }
        Ok(position.into())
    }
}

/// Decodes every element of the array `node` with `f`, tracking the index path.
fn each<N, T, F>(node: &N, path: &mut Vec<usize>, mut f: F) -> Result<Vec<T>>
where
    N: JsonNode,
    F: FnMut(&N, &mut Vec<usize>) -> Result<T>,
{
    let elements = array(node, path)?;
    let mut items = Vec::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        path.push(i);
        let item = f(element, path);
        path.pop();
        items.push(item?);
    }
    Ok(items)
}

fn array<'a, N: JsonNode>(node: &'a N, path: &[usize]) -> Result<&'a [N]> {
    node.as_array().ok_or_else(|| DecodeError::ExpectedArray {
        path: pointer(path),
    })
}

fn pointer(path: &[usize]) -> String {
    path.iter()
        .fold(String::from("/coordinates"), |mut pointer, i| {
            pointer.push('/');
            pointer.push_str(&i.to_string());
            pointer
        })
}

fn log_rejection(result: Result<Geometry>) -> Option<Geometry> {
    match result {
        Ok(geometry) => Some(geometry),
        Err(err) => {
            debug!("rejected geometry: {}", err);
            None
        }
    }
}

/// Decodes a geometry with the default options.
///
/// # Example
///
/// ```
/// use geojson_geometry::{decode, Geometry, Location};
///
/// let geometry = decode(r#"{"type": "Point", "coordinates": [100.0, 0.0]}"#);
/// let expected = Geometry::Point {
///     coordinates: Location { lat: 0.0, lon: 100.0 },
/// };
/// assert_eq!(geometry, Some(expected));
/// assert_eq!(decode("{a: 1}"), None);
/// ```
pub fn decode(text: &str) -> Option<Geometry> {
    Decoder::default().decode(text)
}

/// Like [`decode`], but reports why a document was rejected.
pub fn try_decode(text: &str) -> Result<Geometry> {
    Decoder::default().try_decode(text)
}

pub fn decode_slice(bytes: &[u8]) -> Option<Geometry> {
    Decoder::default().decode_slice(bytes)
}

// Serializing a `Geometry` writes only strings, arrays and floats, none of
// which serde_json can refuse.
const INFALLIBLE: &str = "geometry serialization cannot fail";

/// Builds the GeoJSON object for `geometry`, positions in `[lon, lat]` order.
pub fn to_value(geometry: &Geometry) -> Value {
    serde_json::to_value(geometry).expect(INFALLIBLE)
}

/// Serializes `geometry` as GeoJSON text, `type` first.
///
/// # Example
///
/// ```
/// use geojson_geometry::{encode, Geometry, Location};
///
/// let geometry = Geometry::LineString {
///     coordinates: vec![Location::new(0., 100.), Location::new(1., 101.)],
/// };
/// let text = encode(&geometry);
/// assert_eq!(text, r#"{"type":"LineString","coordinates":[[100.0,0.0],[101.0,1.0]]}"#);
/// ```
pub fn encode(geometry: &Geometry) -> String {
    serde_json::to_string(geometry).expect(INFALLIBLE)
}

pub fn encode_pretty(geometry: &Geometry) -> String {
    serde_json::to_string_pretty(geometry).expect(INFALLIBLE)
}
