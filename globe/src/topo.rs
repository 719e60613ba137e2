//! TopoJSON landmass decoding.
//!
//! The landmass dataset (`world-atlas` `land-110m.json`) is a TopoJSON
//! topology: shared, optionally quantized and delta-encoded arcs plus named
//! objects that reference arcs by index. This module turns the `land` object
//! into plain polygons of longitude/latitude rings ready for projection.
//!
//! ERROR HANDLING
//! ==============
//! Decoding is strict: malformed JSON, a missing `objects.land`, or an arc
//! reference outside the arc table is a [`TopoError`]. The host treats any
//! error as "no landmass" and keeps rendering markers on a bare globe.

#[cfg(test)]
#[path = "topo_test.rs"]
mod topo_test;

use std::collections::HashMap;

use serde::Deserialize;

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

/// A polygon: the first ring is the exterior, the rest are holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub rings: Vec<Vec<LngLat>>,
}

/// Error returned by [`decode_land`].
#[derive(Debug, thiserror::Error)]
pub enum TopoError {
    #[error("invalid topology json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("topology has no `{0}` object")]
    MissingObject(String),
    #[error("arc index {index} out of range ({len} arcs)")]
    ArcOutOfRange { index: i64, len: usize },
    #[error("arc position has fewer than two coordinates")]
    ShortPosition,
}

#[derive(Debug, Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: HashMap<String, Geometry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    GeometryCollection { geometries: Vec<Geometry> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
    #[serde(other)]
    Other,
}

/// Decode the `land` object of a TopoJSON topology.
///
/// # Errors
///
/// See [`TopoError`].
pub fn decode_land(json: &str) -> Result<Vec<Polygon>, TopoError> {
    decode_object(json, "land")
}

/// Decode the polygons of the named object of a TopoJSON topology.
///
/// Non-polygonal geometries in the object are skipped.
///
/// # Errors
///
/// See [`TopoError`].
pub fn decode_object(json: &str, name: &str) -> Result<Vec<Polygon>, TopoError> {
    let topology: Topology = serde_json::from_str(json)?;
    let arcs = decode_arcs(&topology.arcs, topology.transform)?;
    let object = topology
        .objects
        .get(name)
        .ok_or_else(|| TopoError::MissingObject(name.to_owned()))?;

    let mut out = Vec::new();
    collect_polygons(object, &arcs, &mut out)?;
    Ok(out)
}

/// Absolute coordinates for every arc, undoing quantization when present.
fn decode_arcs(raw: &[Vec<Vec<f64>>], transform: Option<Transform>) -> Result<Vec<Vec<LngLat>>, TopoError> {
    raw.iter()
        .map(|arc| {
            let mut x = 0.0;
            let mut y = 0.0;
            arc.iter()
                .map(|position| {
                    let (&px, &py) = match position.as_slice() {
                        [px, py, ..] => (px, py),
                        _ => return Err(TopoError::ShortPosition),
                    };
                    Ok(match transform {
                        Some(t) => {
                            x += px;
                            y += py;
                            LngLat { lng: x * t.scale[0] + t.translate[0], lat: y * t.scale[1] + t.translate[1] }
                        }
                        None => LngLat { lng: px, lat: py },
                    })
                })
                .collect()
        })
        .collect()
}

fn collect_polygons(geometry: &Geometry, arcs: &[Vec<LngLat>], out: &mut Vec<Polygon>) -> Result<(), TopoError> {
    match geometry {
        Geometry::GeometryCollection { geometries } => {
            for child in geometries {
                collect_polygons(child, arcs, out)?;
            }
        }
        Geometry::Polygon { arcs: rings } => out.push(polygon(rings, arcs)?),
        Geometry::MultiPolygon { arcs: polygons } => {
            for rings in polygons {
                out.push(polygon(rings, arcs)?);
            }
        }
        Geometry::Other => {}
    }
    Ok(())
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<LngLat>]) -> Result<Polygon, TopoError> {
    let rings = rings
        .iter()
        .map(|ring| stitch_ring(ring, arcs))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon { rings })
}

/// Join the referenced arcs into one ring.
///
/// A negative index `i` refers to arc `!i` traversed backwards. Consecutive
/// arcs share their joint point, so each arc after the first drops it.
fn stitch_ring(indices: &[i64], arcs: &[Vec<LngLat>]) -> Result<Vec<LngLat>, TopoError> {
    let mut ring: Vec<LngLat> = Vec::new();
    for &index in indices {
        let (slot, reversed) = if index < 0 { (!index, true) } else { (index, false) };
        let arc = match usize::try_from(slot) {
            Ok(slot) => arcs.get(slot),
            Err(_) => None,
        }
        .ok_or(TopoError::ArcOutOfRange { index, len: arcs.len() })?;

        let skip = usize::from(!ring.is_empty());
        if reversed {
            ring.extend(arc.iter().rev().skip(skip).copied());
        } else {
            ring.extend(arc.iter().skip(skip).copied());
        }
    }
    Ok(ring)
}
