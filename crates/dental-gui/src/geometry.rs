//! Tooth outline geometry.
//!
//! A static catalogue of drawable outlines, one per tooth position, in
//! chart-local coordinates. Permanent teeth form the outer upper and lower
//! arches, deciduous teeth the nested inner arches, as on a standard
//! anatomical chart. Consumers treat the catalogue as opaque data; nothing
//! here depends on chart state.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::sync::OnceLock;

use egui::{Pos2, Vec2, pos2, vec2};

use dental_model::{Dentition, ToothPosition};

/// Chart-local canvas size, before zoom.
pub const CHART_SIZE: Vec2 = Vec2::new(290.0, 371.0);

/// Outline segments per tooth.
const OUTLINE_POINTS: usize = 16;

/// One drawable tooth: a closed convex outline and its center (used as the
/// label anchor).
#[derive(Debug, Clone)]
pub struct ToothShape {
    pub position: ToothPosition,
    pub outline: Vec<Pos2>,
    pub center: Pos2,
}

impl ToothShape {
    /// Axis-aligned bounds of the outline, for hit testing.
    pub fn bounds(&self) -> egui::Rect {
        egui::Rect::from_points(&self.outline)
    }
}

/// All 52 tooth shapes, built once per process.
pub fn chart_shapes() -> &'static [ToothShape] {
    static SHAPES: OnceLock<Vec<ToothShape>> = OnceLock::new();
    SHAPES.get_or_init(|| ToothPosition::ALL.iter().map(|&p| tooth_shape(p)).collect())
}

/// One dental arch: a semi-elliptic arc the quadrant's teeth sit on.
struct Arch {
    center: Pos2,
    radii: Vec2,
    teeth_per_quadrant: f32,
    /// Arc swept by one quadrant, from the midline outwards, in radians.
    sweep: f32,
}

fn arch_for(position: ToothPosition) -> Arch {
    let upper = matches!(position.quadrant(), 1 | 2 | 5 | 6);
    match position.dentition() {
        Dentition::Permanent => Arch {
            center: if upper { pos2(145.0, 160.0) } else { pos2(145.0, 211.0) },
            radii: vec2(128.0, 140.0),
            teeth_per_quadrant: 8.0,
            sweep: 1.62,
        },
        Dentition::Deciduous => Arch {
            center: if upper { pos2(145.0, 150.0) } else { pos2(145.0, 221.0) },
            radii: vec2(76.0, 84.0),
            teeth_per_quadrant: 5.0,
            sweep: 1.55,
        },
    }
}

/// Outline half-extents across (width) and along (height) the arch radius.
fn tooth_radii(position: ToothPosition) -> (f32, f32) {
    match (position.dentition(), position.position_in_quadrant()) {
        // Incisors, canines, premolars, molars.
        (Dentition::Permanent, 1..=2) => (7.5, 10.0),
        (Dentition::Permanent, 3) => (8.0, 10.5),
        (Dentition::Permanent, 4..=5) => (8.5, 10.5),
        (Dentition::Permanent, _) => (10.0, 11.5),
        (Dentition::Deciduous, 1..=2) => (6.0, 8.0),
        (Dentition::Deciduous, 3) => (6.5, 8.5),
        (Dentition::Deciduous, _) => (7.5, 9.5),
    }
}

fn tooth_shape(position: ToothPosition) -> ToothShape {
    let arch = arch_for(position);

    // Quadrants 1/4 (and their deciduous counterparts 5/8) are the
    // patient's right, which is the viewer's left.
    let side = match position.quadrant() {
        1 | 4 | 5 | 8 => -1.0,
        _ => 1.0,
    };
    let vertical = if matches!(position.quadrant(), 1 | 2 | 5 | 6) {
        -1.0
    } else {
        1.0
    };

    let index = f32::from(position.position_in_quadrant());
    let theta = (index - 0.5) / arch.teeth_per_quadrant * arch.sweep;
    let center = arch.center
        + vec2(
            side * arch.radii.x * theta.sin(),
            vertical * arch.radii.y * theta.cos(),
        );

    // Long axis of the tooth points away from the arch center.
    let radial = (center - arch.center).normalized();
    let rotation = radial.angle() - FRAC_PI_2;
    let (across, along) = tooth_radii(position);

    let outline = (0..OUTLINE_POINTS)
        .map(|segment| {
            let phi = segment as f32 / OUTLINE_POINTS as f32 * TAU;
            let local = vec2(across * phi.cos(), along * phi.sin());
            let rotated = vec2(
                local.x * rotation.cos() - local.y * rotation.sin(),
                local.x * rotation.sin() + local.y * rotation.cos(),
            );
            center + rotated
        })
        .collect();

    ToothShape {
        position,
        outline,
        center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_every_position() {
        let shapes = chart_shapes();
        assert_eq!(shapes.len(), 52);
        for position in ToothPosition::ALL {
            assert!(shapes.iter().any(|shape| shape.position == position));
        }
    }

    #[test]
    fn outlines_stay_on_canvas() {
        let canvas = egui::Rect::from_min_size(Pos2::ZERO, CHART_SIZE);
        for shape in chart_shapes() {
            assert!(
                canvas.contains_rect(shape.bounds()),
                "tooth {} leaves the canvas: {:?}",
                shape.position,
                shape.bounds()
            );
        }
    }

    #[test]
    fn teeth_do_not_overlap() {
        let shapes = chart_shapes();
        for (i, a) in shapes.iter().enumerate() {
            for b in &shapes[i + 1..] {
                assert!(
                    !a.bounds().intersects(b.bounds().shrink(1.0)),
                    "teeth {} and {} overlap",
                    a.position,
                    b.position
                );
            }
        }
    }
}
