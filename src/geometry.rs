use crate::Coordinate;

#[derive(PartialEq, Debug, Clone)]
pub struct Polygon {
    pub shell: Vec<Coordinate>,
    pub holes: Vec<Vec<Coordinate>>,
}

impl Polygon {
    pub fn new(shell: Vec<Coordinate>, holes: Vec<Vec<Coordinate>>) -> Self {
        Polygon { shell, holes }
    }

    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }

    pub fn rings(&self) -> impl Iterator<Item = &Vec<Coordinate>> {
        std::iter::once(&self.shell).chain(self.holes.iter())
    }
}

impl<IP: Into<Coordinate>> From<Vec<IP>> for Polygon {
    fn from(shell: Vec<IP>) -> Self {
        Polygon {
            shell: shell.into_iter().map(|ip| ip.into()).collect(),
            holes: Vec::new(),
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum Geometry {
    Empty,
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
    LineString(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Empty => "Empty",
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Empty => true,
            Geometry::Point(_) => false,
            Geometry::MultiPoint(points) => points.is_empty(),
            Geometry::LineString(coords) => coords.is_empty(),
            Geometry::MultiLineString(lines) => lines.iter().all(|l| l.is_empty()),
            Geometry::Polygon(poly) => poly.is_empty(),
            Geometry::MultiPolygon(polys) => polys.iter().all(|p| p.is_empty()),
        }
    }

    pub fn is_polygonal(&self) -> bool {
        matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
    }

    pub fn is_puntal(&self) -> bool {
        matches!(self, Geometry::Point(_) | Geometry::MultiPoint(_))
    }
}

impl From<Polygon> for Geometry {
    fn from(poly: Polygon) -> Self {
        Geometry::Polygon(poly)
    }
}

impl From<Coordinate> for Geometry {
    fn from(point: Coordinate) -> Self {
        Geometry::Point(point)
    }
}
