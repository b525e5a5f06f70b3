//! Geographic boundaries: GeoJSON types, boundary-name resolution, and a
//! Mercator projection fitted to the map frame.
//!
//! The boundary file covers every state; the dataset covers only the
//! metropolitan regions the index is compiled for. Boundaries without a
//! table entry are a normal "no data" outcome, not an error.

use anyhow::Context;
use ipca_core::normalize::normalize;
use serde::Deserialize;
use std::f64::consts::FRAC_PI_4;

/// Boundary name (as carried by the GeoJSON `name` property) → dataset
/// region key. Only regions the dataset actually covers are listed.
const GEO_TO_DATASET: [(&str, &str); 16] = [
    ("Acre", "Rio Branco (AC)"),
    ("Bahia", "Salvador (BA)"),
    ("Ceará", "Fortaleza (CE)"),
    ("Distrito Federal", "Brasília (DF)"),
    ("Espírito Santo", "Grande Vitória (ES)"),
    ("Goiás", "Goiânia (GO)"),
    ("Maranhão", "São Luís (MA)"),
    ("Mato Grosso do Sul", "Campo Grande (MS)"),
    ("Minas Gerais", "Belo Horizonte (MG)"),
    ("Pará", "Belém (PA)"),
    ("Paraná", "Curitiba (PR)"),
    ("Pernambuco", "Recife (PE)"),
    ("Rio de Janeiro", "Rio de Janeiro (RJ)"),
    ("Rio Grande do Sul", "Porto Alegre (RS)"),
    ("Sergipe", "Aracaju (SE)"),
    ("São Paulo", "São Paulo (SP)"),
];

/// Resolve an external boundary name to its dataset region key. Matching
/// is on normalized keys; a miss means the boundary has no dataset
/// coverage ("no data"), never an error.
pub fn resolve_boundary(name: &str) -> Option<&'static str> {
    let key = normalize(name);
    GEO_TO_DATASET
        .iter()
        .find(|(boundary, _)| normalize(boundary) == key)
        .map(|(_, dataset_key)| *dataset_key)
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub name: Option<String>,
    /// Short state code carried by some boundary files.
    #[serde(default)]
    pub sigla: Option<String>,
}

/// Positions are `[lon, lat, ...]`; trailing elements are ignored.
type Ring = Vec<Vec<f64>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    /// All rings of the geometry, outer and holes alike.
    pub fn rings(&self) -> Vec<&Ring> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.iter().collect(),
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().collect()
            }
        }
    }
}

/// Parse a GeoJSON FeatureCollection body.
pub fn parse_feature_collection(body: &str) -> anyhow::Result<FeatureCollection> {
    serde_json::from_str(body).context("failed to parse boundary GeoJSON")
}

/// Spherical Mercator projection fitted to a fixed output frame, with
/// screen y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    tx: f64,
    ty: f64,
}

/// Raw Mercator: x = λ, y = ln(tan(π/4 + φ/2)).
fn project_raw(lon: f64, lat: f64) -> (f64, f64) {
    // clamp away from the poles where the projection diverges
    let lat = lat.clamp(-85.0, 85.0);
    let x = lon.to_radians();
    let y = (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

impl Projection {
    /// Fit the projection so the collection's bounds fill `width`×`height`
    /// centered. Degenerate bounds (empty collection, single point) fall
    /// back to a unit scale rather than dividing by zero.
    pub fn fit(width: f64, height: f64, collection: &FeatureCollection) -> Projection {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for feature in &collection.features {
            let Some(geometry) = &feature.geometry else {
                continue;
            };
            for ring in geometry.rings() {
                for position in ring {
                    if position.len() < 2 {
                        continue;
                    }
                    let (x, y) = project_raw(position[0], position[1]);
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }

        let dx = max_x - min_x;
        let dy = max_y - min_y;
        if !dx.is_finite() || !dy.is_finite() || dx <= 0.0 || dy <= 0.0 {
            return Projection {
                scale: 1.0,
                tx: width / 2.0,
                ty: height / 2.0,
            };
        }

        let scale = (width / dx).min(height / dy);
        let cx = (min_x + max_x) / 2.0;
        let cy = (min_y + max_y) / 2.0;
        Projection {
            scale,
            tx: width / 2.0 - scale * cx,
            ty: height / 2.0 + scale * cy,
        }
    }

    /// Project a (lon, lat) position into frame pixels.
    pub fn apply(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = project_raw(lon, lat);
        (self.tx + x * self.scale, self.ty - y * self.scale)
    }
}

/// SVG path for one feature's rings under the given projection.
pub fn feature_path(feature: &Feature, projection: &Projection) -> String {
    let Some(geometry) = &feature.geometry else {
        return String::new();
    };
    let mut path = String::new();
    for ring in geometry.rings() {
        for (i, position) in ring.iter().enumerate() {
            if position.len() < 2 {
                continue;
            }
            let (x, y) = projection.apply(position[0], position[1]);
            let command = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{command}{x:.2},{y:.2}"));
        }
        if !ring.is_empty() {
            path.push('Z');
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_boundaries() {
        assert_eq!(resolve_boundary("São Paulo"), Some("São Paulo (SP)"));
        assert_eq!(resolve_boundary("Ceará"), Some("Fortaleza (CE)"));
        // casing and accents don't matter
        assert_eq!(resolve_boundary("sao paulo"), Some("São Paulo (SP)"));
        assert_eq!(resolve_boundary("  PARÁ "), Some("Belém (PA)"));
    }

    #[test]
    fn test_resolve_uncovered_boundary_is_none() {
        // in the boundary file but not in the dataset
        assert_eq!(resolve_boundary("Tocantins"), None);
        assert_eq!(resolve_boundary("Amazonas"), None);
        assert_eq!(resolve_boundary(""), None);
    }

    const SQUARE_GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "Quadrado"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-10.0, -10.0], [10.0, -10.0], [10.0, 10.0], [-10.0, 10.0], [-10.0, -10.0]]]
            }
        }]
    }"#;

    #[test]
    fn test_parse_and_fit() {
        let fc = parse_feature_collection(SQUARE_GEOJSON).unwrap();
        assert_eq!(fc.features.len(), 1);
        let projection = Projection::fit(800.0, 600.0, &fc);
        // the square is centered on the origin, so its center maps to the
        // frame center
        let (cx, cy) = projection.apply(0.0, 0.0);
        assert!((cx - 400.0).abs() < 1e-6);
        assert!((cy - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_flips_y() {
        let fc = parse_feature_collection(SQUARE_GEOJSON).unwrap();
        let projection = Projection::fit(800.0, 600.0, &fc);
        let (_, y_north) = projection.apply(0.0, 5.0);
        let (_, y_south) = projection.apply(0.0, -5.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn test_fit_degenerate_bounds() {
        let fc = FeatureCollection { features: vec![] };
        let projection = Projection::fit(800.0, 600.0, &fc);
        let (x, y) = projection.apply(0.0, 0.0);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_feature_path_closed() {
        let fc = parse_feature_collection(SQUARE_GEOJSON).unwrap();
        let projection = Projection::fit(800.0, 600.0, &fc);
        let path = feature_path(&fc.features[0], &projection);
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
        assert!(path.contains('L'));
    }

    #[test]
    fn test_multipolygon_rings() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Ilhas"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                        [[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]]
                    ]
                }
            }]
        }"#;
        let fc = parse_feature_collection(body).unwrap();
        let geometry = fc.features[0].geometry.as_ref().unwrap();
        assert_eq!(geometry.rings().len(), 2);
        let projection = Projection::fit(100.0, 100.0, &fc);
        let path = feature_path(&fc.features[0], &projection);
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
    }
}
