//! Construction settings shared by every beam-pipe build.

/// RGBA colour used for visualization attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Colour {
    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BEAM_PIPE: Colour = Colour::rgb(0.4, 0.4, 0.4);
    pub const COPPER: Colour = Colour::rgb(0.722, 0.451, 0.2);
    pub const COLD_BORE: Colour = Colour::rgb(0.82, 0.84, 0.86);
    pub const COOLING_PIPE: Colour = Colour::rgb(0.6, 0.7, 0.8);
    pub const CONTAINER: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.1,
    };
}

/// Fixed material thicknesses of the detailed LHC beam screen assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LhcDetailedConfig {
    /// Wall thickness of the cold bore.
    pub cold_bore_thickness: f64,
    /// Thickness of the copper coating on the inside of the beam screen.
    pub copper_skin_thickness: f64,
    /// Inner radius of each cooling pipe.
    pub cooling_pipe_radius: f64,
    /// Wall thickness of each cooling pipe.
    pub cooling_pipe_thickness: f64,
    /// Material of the copper skin.
    pub copper_material: &'static str,
    /// Material of the cold bore and cooling pipes.
    pub cold_bore_material: &'static str,
}

impl Default for LhcDetailedConfig {
    fn default() -> Self {
        Self {
            cold_bore_thickness: 1.5,
            copper_skin_thickness: 0.075,
            cooling_pipe_radius: 1.85,
            cooling_pipe_thickness: 0.53,
            copper_material: "copper",
            cold_bore_material: "stainlesssteel",
        }
    }
}

/// Parameters controlling beam-pipe construction.
///
/// All lengths are in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamPipeConfig {
    /// Longitudinal clearance between nested solids.
    pub length_safety: f64,
    /// Transverse clearance between nested boundary curves.
    pub length_safety_large: f64,
    /// Points used to sample a full turn of a curved section.
    pub points_per_full_turn: usize,
    /// Maximum step in the vacuum and wall volumes, as a fraction of the
    /// segment length.
    pub max_step_length_factor: f64,
    /// Mark the beam-pipe wall volumes as sensitive.
    pub sensitive_beam_pipe: bool,
    /// Mark the vacuum volume as sensitive.
    pub sensitive_vacuum: bool,
    /// Record where primaries hit the aperture.
    pub store_aperture_impacts: bool,
    /// Reject sub-minimum wall thickness for every shape, not only the
    /// shapes that always check it.
    pub check_thickness_all_shapes: bool,
    /// Draw containers instead of hiding them.
    pub visible_containers: bool,
    /// Colour of the beam-pipe wall.
    pub beam_pipe_colour: Colour,
    /// Detailed LHC constants.
    pub lhc: LhcDetailedConfig,
}

impl Default for BeamPipeConfig {
    fn default() -> Self {
        Self {
            length_safety: 1e-6,
            length_safety_large: 1e-3,
            points_per_full_turn: 40,
            max_step_length_factor: 1.0,
            sensitive_beam_pipe: true,
            sensitive_vacuum: false,
            store_aperture_impacts: true,
            check_thickness_all_shapes: false,
            visible_containers: false,
            beam_pipe_colour: Colour::BEAM_PIPE,
            lhc: LhcDetailedConfig::default(),
        }
    }
}

impl BeamPipeConfig {
    /// Smallest wall thickness accepted where thickness is validated.
    #[must_use]
    pub fn minimum_thickness(&self) -> f64 {
        self.length_safety_large
    }

    /// Sets the number of points per full turn of a curved section.
    #[must_use]
    pub fn with_points_per_full_turn(mut self, points: usize) -> Self {
        self.points_per_full_turn = points;
        self
    }

    /// Sets the transverse clearance between nested curves.
    #[must_use]
    pub fn with_length_safety_large(mut self, safety: f64) -> Self {
        self.length_safety_large = safety;
        self
    }

    /// Enables thickness validation for every aperture shape.
    #[must_use]
    pub fn with_thickness_check_all_shapes(mut self, check: bool) -> Self {
        self.check_thickness_all_shapes = check;
        self
    }

    /// Sets the sensitivity flags.
    #[must_use]
    pub fn with_sensitivity(mut self, beam_pipe: bool, vacuum: bool) -> Self {
        self.sensitive_beam_pipe = beam_pipe;
        self.sensitive_vacuum = vacuum;
        self
    }

    /// Sets the step-limit factor.
    #[must_use]
    pub fn with_max_step_length_factor(mut self, factor: f64) -> Self {
        self.max_step_length_factor = factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_nest_safeties() {
        let config = BeamPipeConfig::default();
        assert!(config.length_safety < config.length_safety_large);
        assert!((config.minimum_thickness() - config.length_safety_large).abs() < f64::EPSILON);
        assert_eq!(config.points_per_full_turn, 40);
    }

    #[test]
    fn builder_setters() {
        let config = BeamPipeConfig::default()
            .with_points_per_full_turn(64)
            .with_thickness_check_all_shapes(true)
            .with_sensitivity(false, true)
            .with_max_step_length_factor(0.5);
        assert_eq!(config.points_per_full_turn, 64);
        assert!(config.check_thickness_all_shapes);
        assert!(!config.sensitive_beam_pipe);
        assert!(config.sensitive_vacuum);
        assert!((config.max_step_length_factor - 0.5).abs() < f64::EPSILON);
    }
}
