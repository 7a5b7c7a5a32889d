use crate::domain::{Geometry, Position};

/// Bounding box in lon/lat degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Create bounds from a set of positions
    pub fn from_positions(points: &[Position]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;

        let mut bounds = Self {
            min_lon: first.0,
            max_lon: first.0,
            min_lat: first.1,
            max_lat: first.1,
        };
        bounds.expand(rest);
        Some(bounds)
    }

    /// Bounds over every ring of a geometry
    pub fn of_geometry(geometry: &Geometry) -> Option<Self> {
        let mut bounds: Option<Self> = None;

        for ring in geometry.rings() {
            match bounds.as_mut() {
                Some(b) => b.expand(ring),
                None => bounds = Self::from_positions(ring),
            }
        }

        bounds
    }

    /// Expand bounds to include another set of positions
    pub fn expand(&mut self, points: &[Position]) {
        for &(lon, lat) in points {
            self.min_lon = self.min_lon.min(lon);
            self.max_lon = self.max_lon.max(lon);
            self.min_lat = self.min_lat.min(lat);
            self.max_lat = self.max_lat.max(lat);
        }
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_positions() {
        let points = vec![(-3.0, 54.0), (-1.5, 55.5), (-2.0, 53.0)];
        let bounds = Bounds::from_positions(&points).unwrap();

        assert_eq!(bounds.min_lon, -3.0);
        assert_eq!(bounds.max_lon, -1.5);
        assert_eq!(bounds.min_lat, 53.0);
        assert_eq!(bounds.max_lat, 55.5);
        assert_eq!(bounds.width(), 1.5);
        assert_eq!(bounds.height(), 2.5);
    }

    #[test]
    fn test_bounds_of_multipolygon() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]],
            vec![vec![(5.0, -2.0), (6.0, -2.0), (6.0, -1.0), (5.0, -2.0)]],
        ]);
        let bounds = Bounds::of_geometry(&geometry).unwrap();
        assert_eq!(bounds.min_lon, 0.0);
        assert_eq!(bounds.max_lon, 6.0);
        assert_eq!(bounds.min_lat, -2.0);
        assert_eq!(bounds.max_lat, 1.0);
    }

    #[test]
    fn test_empty() {
        assert!(Bounds::from_positions(&[]).is_none());
        assert!(Bounds::of_geometry(&Geometry::Polygon(vec![])).is_none());
    }
}
