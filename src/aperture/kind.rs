use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Prefix of the compound `pointsfile:<path>[:<unit>]` aperture type string.
pub const POINTS_FILE_PREFIX: &str = "pointsfile";

/// The closed set of beam-pipe cross-section families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApertureType {
    Circular,
    Elliptical,
    Rectangular,
    Lhc,
    LhcDetailed,
    RectEllipse,
    RaceTrack,
    Octagonal,
    CircularVacuum,
    ClicPcl,
    Rhombus,
    PointsFile,
}

impl ApertureType {
    /// Every aperture type, in declaration order.
    pub const ALL: [ApertureType; 12] = [
        Self::Circular,
        Self::Elliptical,
        Self::Rectangular,
        Self::Lhc,
        Self::LhcDetailed,
        Self::RectEllipse,
        Self::RaceTrack,
        Self::Octagonal,
        Self::CircularVacuum,
        Self::ClicPcl,
        Self::Rhombus,
        Self::PointsFile,
    ];

    /// Canonical lower-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Elliptical => "elliptical",
            Self::Rectangular => "rectangular",
            Self::Lhc => "lhc",
            Self::LhcDetailed => "lhcdetailed",
            Self::RectEllipse => "rectellipse",
            Self::RaceTrack => "racetrack",
            Self::Octagonal => "octagonal",
            Self::CircularVacuum => "circularvacuum",
            Self::ClicPcl => "clicpcl",
            Self::Rhombus => "rhombus",
            Self::PointsFile => POINTS_FILE_PREFIX,
        }
    }

    /// Number of leading aperture parameters the shape reads.
    #[must_use]
    pub fn parameter_count(self) -> usize {
        match self {
            Self::PointsFile => 0,
            Self::Circular | Self::CircularVacuum => 1,
            Self::Elliptical | Self::Rectangular => 2,
            Self::Lhc | Self::LhcDetailed | Self::RaceTrack | Self::Rhombus => 3,
            Self::RectEllipse | Self::Octagonal | Self::ClicPcl => 4,
        }
    }

    /// Whether the cross-section is built from sampled boundary points
    /// rather than primitive solids.
    #[must_use]
    pub fn is_point_based(self) -> bool {
        matches!(
            self,
            Self::RaceTrack | Self::Octagonal | Self::ClicPcl | Self::Rhombus | Self::PointsFile
        )
    }

    /// Parses a type name, falling back to [`ApertureType::Circular`] with a
    /// warning when the name is not recognised.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ConfigurationError| {
            tracing::warn!(%err, "falling back to circular aperture");
            Self::Circular
        })
    }
}

impl fmt::Display for ApertureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApertureType {
    type Err = ConfigurationError;

    /// Case-insensitive. Accepts the compound `pointsfile:<path>[:<unit>]`
    /// form as [`ApertureType::PointsFile`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let head = lower.split(':').next().unwrap_or_default();
        if lower.contains(':') {
            return if head == POINTS_FILE_PREFIX {
                Ok(Self::PointsFile)
            } else {
                Err(ConfigurationError::UnknownApertureType(s.to_owned()))
            };
        }
        Self::ALL
            .into_iter()
            .find(|t| t.name() == head)
            .ok_or_else(|| ConfigurationError::UnknownApertureType(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for t in ApertureType::ALL {
            assert_eq!(t.name().parse::<ApertureType>().unwrap(), t);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("LHCDetailed".parse::<ApertureType>().unwrap(), ApertureType::LhcDetailed);
        assert_eq!(" RectEllipse ".parse::<ApertureType>().unwrap(), ApertureType::RectEllipse);
    }

    #[test]
    fn compound_points_file() {
        assert_eq!(
            "PointsFile:aper.dat:mm".parse::<ApertureType>().unwrap(),
            ApertureType::PointsFile
        );
        assert!("circular:foo".parse::<ApertureType>().is_err());
    }

    #[test]
    fn unknown_name_is_error_when_strict() {
        assert!(matches!(
            "hexagonal".parse::<ApertureType>(),
            Err(ConfigurationError::UnknownApertureType(_))
        ));
    }

    #[test]
    fn unknown_name_falls_back_to_circular() {
        assert_eq!(ApertureType::from_name_or_default("hexagonal"), ApertureType::Circular);
        assert_eq!(ApertureType::from_name_or_default("octagonal"), ApertureType::Octagonal);
    }

    #[test]
    fn parameter_counts() {
        assert_eq!(ApertureType::Circular.parameter_count(), 1);
        assert_eq!(ApertureType::Octagonal.parameter_count(), 4);
        assert!(ApertureType::Rhombus.is_point_based());
        assert!(!ApertureType::Lhc.is_point_based());
    }
}
