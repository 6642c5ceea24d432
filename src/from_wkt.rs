use crate::geometry::{Geometry, Polygon};
use crate::Coordinate;
use wkt::types;
use wkt::types::Coord;

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

fn coords_from_wkt(linestring: types::LineString<f64>) -> Vec<Coordinate> {
    linestring.0.into_iter().map(Coordinate::from).collect()
}

/// None for a polygon with no rings at all.
fn polygon_from_wkt(poly: types::Polygon<f64>) -> Option<Polygon> {
    let mut rings = poly.0.into_iter().map(coords_from_wkt);
    let shell = rings.next()?;
    Some(Polygon::new(shell, rings.collect()))
}

fn geometry_from_wkt(geom: wkt::Geometry<f64>) -> Result<Geometry, &'static str> {
    let geom = match geom {
        wkt::Geometry::Point(p) => match p.0 {
            None => Geometry::Empty,
            Some(coord) => Geometry::Point(coord.into()),
        },
        wkt::Geometry::MultiPoint(mp) => Geometry::MultiPoint(
            mp.0.into_iter()
                .filter_map(|p| p.0)
                .map(Coordinate::from)
                .collect(),
        ),
        wkt::Geometry::LineString(ls) => Geometry::LineString(coords_from_wkt(ls)),
        wkt::Geometry::MultiLineString(mls) => {
            Geometry::MultiLineString(mls.0.into_iter().map(coords_from_wkt).collect())
        }
        wkt::Geometry::Polygon(poly) => match polygon_from_wkt(poly) {
            None => Geometry::Empty,
            Some(poly) => Geometry::Polygon(poly),
        },
        wkt::Geometry::MultiPolygon(mpoly) => {
            Geometry::MultiPolygon(mpoly.0.into_iter().filter_map(polygon_from_wkt).collect())
        }
        _ => return Err("GeometryCollection is not supported"),
    };
    Ok(geom)
}

pub fn parse_wkt(wkt_str: &str) -> Result<Vec<Geometry>, &'static str> {
    let wkt_geoms = wkt::Wkt::from_str(wkt_str)?;
    wkt_geoms.items.into_iter().map(geometry_from_wkt).collect()
}

pub fn parse_single_wkt(wkt_str: &str) -> Result<Geometry, &'static str> {
    let mut geoms = parse_wkt(wkt_str)?;
    if geoms.len() != 1 {
        return Err("Expected exactly one geometry");
    }
    Ok(geoms.remove(0))
}
