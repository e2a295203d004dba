//! A strict codec for the `Point`, `LineString` and `Polygon` geometries of
//! GeoJSON ([RFC 7946](https://tools.ietf.org/html/rfc7946)).
//!
//! GeoJSON positions are `[longitude, latitude]`, a decoded [`Location`] is
//! latitude first. Malformed or unsupported input decodes to `None`, use
//! [`try_decode`] to learn why.

pub use self::codec::{decode, decode_slice, encode, encode_pretty, to_value, try_decode, Decoder};
pub use self::error::{DecodeError, Result, UnsupportedGeometry};
pub use self::geo::Location;
pub use self::geojson::{Geometry, GeometryType};
pub use self::json::JsonNode;
pub use self::options::{DecodeOptions, ExtraDimensions};

mod codec;
pub mod error;
mod geo;
mod geojson;
pub mod json;
pub mod options;
#[cfg(test)]
mod test_helpers;
