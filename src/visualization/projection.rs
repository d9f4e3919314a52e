//! Affine mapping from simulation space (SI meters) to screen pixels.
//!
//! This is a rendering concern: the physics core never sees a `Viewport`.
//! A host builds a [`Display`] from the scenario config, then after each step
//! asks it for one [`BodyFrame`] per body and draws those however it likes.

use crate::configuration::config::{DisplayConfig, ScenarioConfig};
use crate::simulation::params::AU;
use crate::simulation::states::{NVec2, System, Trail};

/// Paths with this many points or fewer are not drawn
const MIN_PATH_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixels_per_au: f64,
}

impl Viewport {
    /// Pixels per meter
    pub fn scale(&self) -> f64 {
        self.pixels_per_au / AU
    }

    /// Screen position of `p`, origin at the centre of the surface
    pub fn to_screen(&self, p: &NVec2) -> NVec2 {
        *p * self.scale() + NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Polyline for a trail, or `None` while it is too short to draw
    pub fn trail_path(&self, trail: &Trail) -> Option<Vec<NVec2>> {
        (trail.len() > MIN_PATH_POINTS).then(|| trail.iter().map(|p| self.to_screen(p)).collect())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for Viewport {
    fn from(cfg: &DisplayConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            pixels_per_au: cfg.pixels_per_au,
        }
    }
}

/// How one body is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub radius: f64, // [px]
    pub color: [u8; 3],
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: [255, 255, 255],
        }
    }
}

/// Everything a host needs to draw one body this frame
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame {
    pub name: String,
    pub center: NVec2, // [px]
    pub radius: f64, // [px]
    pub color: [u8; 3],
    pub path: Option<Vec<NVec2>>, // projected trail
}

/// Viewport plus per-body sprites, indexed like the system's bodies
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    pub viewport: Viewport,
    pub sprites: Vec<Sprite>,
}

impl Display {
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let sprites = cfg
            .bodies
            .iter()
            .map(|bc| {
                let fallback = Sprite::default();
                Sprite {
                    radius: bc.radius.unwrap_or(fallback.radius),
                    color: bc.color.unwrap_or(fallback.color),
                }
            })
            .collect();

        Self {
            viewport: Viewport::from(&cfg.display),
            sprites,
        }
    }

    /// Read-only projection of the current system state
    /// Bodies without a sprite get the default one
    pub fn frame(&self, sys: &System) -> Vec<BodyFrame> {
        sys.bodies()
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let sprite = self.sprites.get(i).copied().unwrap_or_default();
                BodyFrame {
                    name: b.name().to_owned(),
                    center: self.viewport.to_screen(&b.position()),
                    radius: sprite.radius,
                    color: sprite.color,
                    path: self.viewport.trail_path(b.trail()),
                }
            })
            .collect()
    }
}
