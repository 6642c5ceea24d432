use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("Cannot build an interval tree without a geometry")]
    MissingGeometry,

    #[error("Cannot build an interval tree on a {kind}; expected Polygon or MultiPolygon")]
    NotAPolygon { kind: &'static str },
}

#[derive(Error, Debug, PartialEq)]
pub enum PredicateError {
    #[error("Expected a Point or MultiPoint, got {kind}")]
    NotPoints { kind: &'static str },

    #[error("Arguments must be a point and a polygon, got {first} and {second}")]
    Unsupported {
        first: &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Build(#[from] BuildError),
}
