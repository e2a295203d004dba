use geo_types::{Coordinate, Point};

/// A geographic position, latitude first.
///
/// GeoJSON puts the longitude first (`[lon, lat]`). The conversions from and
/// into `[f64; 2]` follow the wire order, the struct fields don't.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Location { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<[f64; 2]> for Location {
    fn from(position: [f64; 2]) -> Self {
        Location {
            lon: position[0],
            lat: position[1],
        }
    }
}

impl From<Location> for [f64; 2] {
    fn from(loc: Location) -> Self {
        [loc.lon, loc.lat]
    }
}

impl From<&Location> for [f64; 2] {
    fn from(loc: &Location) -> Self {
        [loc.lon, loc.lat]
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Location {
            lat: point.lat(),
            lon: point.lng(),
        }
    }
}

impl From<Location> for Point<f64> {
    fn from(loc: Location) -> Self {
        Point::new(loc.lon, loc.lat)
    }
}

impl From<Coordinate<f64>> for Location {
    fn from(coordinate: Coordinate<f64>) -> Self {
        Location {
            lat: coordinate.y,
            lon: coordinate.x,
        }
    }
}

impl From<Location> for Coordinate<f64> {
    fn from(loc: Location) -> Self {
        Coordinate {
            x: loc.lon,
            y: loc.lat,
        }
    }
}
