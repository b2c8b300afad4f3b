/// Scene layout data — every radius, position, and spin rate in one
/// table keyed by body name, instead of literals scattered through the
/// builder.
///
/// Spin rates follow relative orbital periods (88 / 225 / 365 / 687
/// Earth days), so the magnitude ordering is mercury > venus > earth >
/// mars. Venus spins the opposite direction. No further physical
/// accuracy is intended — distances and sizes are readable, not real.

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const PLANET_COUNT: usize = 4;

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 30.0;

// ── Lights ───────────────────────────────────────────────────────────

/// Two white point lights, far in front of and far behind the scene,
/// so bodies read from both straight on and at an angle.
pub const LIGHT_FRONT: (f32, f32, f32) = (-30.0, 20.0, 100000.0);
pub const LIGHT_BACK: (f32, f32, f32) = (-30.0, 20.0, -100000.0);

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 20.0;
pub const SUN_Z: f32 = -50.0;

/// Sphere tessellation for the sun and planets.
pub const SPHERE_SEGMENTS: u32 = 32;

// ── Orbit rings ──────────────────────────────────────────────────────

/// All rings share the sun's depth and lie flat in the orbital plane.
pub const ORBIT_Z: f32 = -50.0;
pub const ORBIT_TUBE: f32 = 0.1;
pub const ORBIT_RADIAL_SEGMENTS: u32 = 30;
pub const ORBIT_TUBULAR_SEGMENTS: u32 = 200;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 400;
pub const STAR_RADIUS: f32 = 0.06;
pub const STAR_SEGMENTS: u32 = 24;
/// Stars scatter uniformly in a cube of this edge length, centered on
/// the origin (each coordinate in ±STAR_SPREAD/2).
pub const STAR_SPREAD: f32 = 600.0;

// ── Planets ──────────────────────────────────────────────────────────

/// Layout and animation data for one planet.
pub struct PlanetDesc {
    pub name: &'static str,
    /// Sphere radius.
    pub radius: f32,
    /// Radius of the decorative orbit ring.
    pub orbit_radius: f32,
    /// Fixed depth-axis position.
    pub position_z: f32,
    /// Y-rotation increment per tick, radians (sign = spin direction).
    pub spin_per_tick: f32,
}

/// The planet table (indexed by planet constant).
pub const PLANETS: [PlanetDesc; PLANET_COUNT] = [
    PlanetDesc { name: "mercury", radius: 2.5, orbit_radius: 35.0,  position_z: -15.0, spin_per_tick: 1.0 / 88.0 },
    PlanetDesc { name: "venus",   radius: 5.0, orbit_radius: 117.0, position_z: 67.0,  spin_per_tick: -1.0 / 225.0 },
    PlanetDesc { name: "earth",   radius: 5.0, orbit_radius: 143.0, position_z: 93.0,  spin_per_tick: 1.0 / 365.0 },
    PlanetDesc { name: "mars",    radius: 3.0, orbit_radius: 192.0, position_z: 142.0, spin_per_tick: 1.0 / 687.0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_magnitudes_follow_orbital_period_ordering() {
        let spins: Vec<f32> = PLANETS.iter().map(|p| p.spin_per_tick.abs()).collect();
        for pair in spins.windows(2) {
            assert!(pair[0] > pair[1], "inner planets must spin faster: {pair:?}");
        }
    }

    #[test]
    fn venus_spins_retrograde() {
        assert!(PLANETS[VENUS].spin_per_tick < 0.0);
        assert!(PLANETS[MERCURY].spin_per_tick > 0.0);
        assert!(PLANETS[EARTH].spin_per_tick > 0.0);
        assert!(PLANETS[MARS].spin_per_tick > 0.0);
    }

    #[test]
    fn orbit_radii_match_documented_constants() {
        assert_eq!(PLANETS[MERCURY].orbit_radius, 35.0);
        assert_eq!(PLANETS[VENUS].orbit_radius, 117.0);
        assert_eq!(PLANETS[EARTH].orbit_radius, 143.0);
        assert_eq!(PLANETS[MARS].orbit_radius, 192.0);
    }
}
