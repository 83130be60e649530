use thiserror::Error;

/// Top-level error type for beam-pipe construction.
#[derive(Debug, Error)]
pub enum BeamPipeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    PointFile(#[from] PointFileError),
}

/// Errors raised by the solid store and primitive constructors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{solid}: {parameter} = {value} must be finite and non-negative")]
    InvalidDimension {
        solid: String,
        parameter: &'static str,
        value: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("solid not found: {0}")]
    SolidNotFound(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Fatal configuration problems, reported with the offending element name.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(
        "{element}: {shape} beam pipe thickness {thickness} mm is below the minimum {minimum} mm"
    )]
    ThicknessTooSmall {
        element: String,
        shape: &'static str,
        thickness: f64,
        minimum: f64,
    },

    #[error(
        "{element}: angled faces would intersect within the solid: length {length} mm, \
         radius {radius} mm, face separation shrinks by {shrink} mm at the worst point"
    )]
    FacesIntersect {
        element: String,
        length: f64,
        radius: f64,
        shrink: f64,
    },

    #[error("{element}: {face} face normal ({x}, {y}, {z}) points the wrong way along z")]
    InvalidFaceNormal {
        element: String,
        face: &'static str,
        x: f64,
        y: f64,
        z: f64,
    },

    #[error("unknown aperture type \"{0}\"")]
    UnknownApertureType(String),

    #[error("{shape} aperture: {reason}")]
    InvalidAperture { shape: &'static str, reason: String },

    #[error("{element}: aperture type pointsfile requires a point file")]
    MissingPointFile { element: String },
}

/// Errors from reading and caching external aperture point files.
#[derive(Debug, Error)]
pub enum PointFileError {
    #[error("cannot read point file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: expected two numbers, found \"{content}\"")]
    Malformed {
        path: String,
        line: usize,
        content: String,
    },

    #[error("point file {path} contains {count} points, at least 3 are required")]
    TooFewPoints { path: String, count: usize },

    #[error("unknown unit \"{0}\" for point file scaling")]
    UnknownUnit(String),

    #[error("point file {path} [{unit}] is already cached with different content")]
    CacheConflict { path: String, unit: String },
}

/// Convenience type alias for results using [`BeamPipeError`].
pub type Result<T> = std::result::Result<T, BeamPipeError>;
