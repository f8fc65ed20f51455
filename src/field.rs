// The particle field: a fixed set of drifting particles over a surface of
// known size, stepped and drawn once per frame.

use crate::config::{FieldConfig, ResizePolicy};
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

// What one frame did, for callers that cannot look at the pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub pairs_checked: usize,
    pub links_drawn: usize,
}

pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng>(config: FieldConfig, width: u32, height: u32, rng: &mut R) -> ParticleField {
        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            particles.push(Particle::random(
                rng,
                width as f64,
                height as f64,
                config.max_speed,
                (config.min_radius, config.max_radius),
            ));
        }
        ParticleField::with_particles(config, width, height, particles)
    }

    pub fn with_particles(
        config: FieldConfig,
        width: u32,
        height: u32,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // One frame: fade the previous contents, then move and draw each particle
    // in order. Links from particle i go to every j > i, so each unordered
    // pair is checked once; particles after i have not moved yet this frame.
    pub fn step<S: Surface>(&mut self, surface: &mut S) -> FrameStats {
        let mut stats = FrameStats::default();
        let (width, height) = (self.width as f64, self.height as f64);
        surface.fade(self.config.fade);

        for i in 0..self.particles.len() {
            let particle = {
                let p = &mut self.particles[i];
                p.advance(width, height);
                *p
            };
            surface.fill_circle(particle.pos, particle.radius, self.config.particle_color);

            for other in &self.particles[i + 1..] {
                stats.pairs_checked += 1;
                if particle.distance_to(other) < self.config.link_distance {
                    surface.stroke_line(particle.pos, other.pos, self.config.link_color);
                    stats.links_drawn += 1;
                }
            }
        }
        stats
    }

    // Returns false when the size is unchanged and nothing was done
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        let (new_w, new_h) = (width as f64, height as f64);
        match self.config.resize_policy {
            ResizePolicy::Keep => {}
            ResizePolicy::Clamp => {
                for p in &mut self.particles {
                    p.pos[0] = p.pos[0].max(0.0).min(new_w);
                    p.pos[1] = p.pos[1].max(0.0).min(new_h);
                }
            }
            ResizePolicy::Rescale => {
                let sx = scale(self.width, width);
                let sy = scale(self.height, height);
                for p in &mut self.particles {
                    p.pos[0] *= sx;
                    p.pos[1] *= sy;
                }
            }
        }
        self.width = width;
        self.height = height;
        true
    }
}

// A surface that was zero-sized has nothing to scale from
fn scale(old: u32, new: u32) -> f64 {
    if old == 0 {
        1.0
    } else {
        new as f64 / old as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawOp, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_of(particles: Vec<Particle>, policy: ResizePolicy) -> ParticleField {
        let config = FieldConfig {
            count: particles.len(),
            resize_policy: policy,
            ..FieldConfig::default()
        };
        ParticleField::with_particles(config, 100, 100, particles)
    }

    #[test]
    fn creates_configured_count_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = ParticleField::new(FieldConfig::default(), 1280, 720, &mut rng);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 1280.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 720.0);
            assert!(p.vel[0].abs() <= 0.25 && p.vel[1].abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius <= 3.0);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = ParticleField::new(FieldConfig::default(), 640, 480, &mut StdRng::seed_from_u64(11));
        let b = ParticleField::new(FieldConfig::default(), 640, 480, &mut StdRng::seed_from_u64(11));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn checks_every_pair_once_per_frame() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = ParticleField::new(FieldConfig::default(), 1920, 1080, &mut rng);
        let mut surface = RecordingSurface::default();
        let stats = field.step(&mut surface);
        assert_eq!(stats.pairs_checked, 1225);
        assert_eq!(surface.circles(), 50);
        assert_eq!(surface.lines().len(), stats.links_drawn);
    }

    #[test]
    fn frame_starts_with_fade() {
        let mut field = field_of(vec![Particle::new(5.0, 5.0, 0.0, 0.0, 2.0)], ResizePolicy::Keep);
        let mut surface = RecordingSurface::default();
        field.step(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                DrawOp::Fade(FieldConfig::default().fade),
                DrawOp::Circle([5.0, 5.0], 2.0, FieldConfig::default().particle_color),
            ]
        );
    }

    #[test]
    fn two_close_particles_are_linked() {
        let mut field = field_of(
            vec![
                Particle::new(0.0, 0.0, 0.1, 0.1, 1.0),
                Particle::new(10.0, 0.0, -0.1, 0.1, 1.0),
            ],
            ResizePolicy::Keep,
        );
        let mut surface = RecordingSurface::default();
        let stats = field.step(&mut surface);

        let moved = field.particles();
        assert!((moved[0].pos[0] - 0.1).abs() < 1e-9 && (moved[0].pos[1] - 0.1).abs() < 1e-9);
        assert!((moved[1].pos[0] - 9.9).abs() < 1e-9 && (moved[1].pos[1] - 0.1).abs() < 1e-9);
        assert_eq!(stats, FrameStats { pairs_checked: 1, links_drawn: 1 });
        assert_eq!(surface.lines().len(), 1);
    }

    #[test]
    fn link_threshold_is_strict() {
        let config = FieldConfig::default();
        let mut field = field_of(
            vec![
                Particle::new(0.0, 0.0, 0.0, 0.0, 1.0),
                Particle::new(config.link_distance, 0.0, 0.0, 0.0, 1.0),
                Particle::new(0.0, config.link_distance - 0.5, 0.0, 0.0, 1.0),
            ],
            ResizePolicy::Keep,
        );
        let mut surface = RecordingSurface::default();
        let stats = field.step(&mut surface);
        // Only (0, 2) is under the threshold; (1, 2) is ~211 apart
        assert_eq!(stats.links_drawn, 1);
        assert_eq!(surface.lines(), vec![([0.0, 0.0], [0.0, config.link_distance - 0.5])]);
    }

    #[test]
    fn links_do_not_depend_on_order() {
        let a = Particle::new(20.0, 20.0, 0.0, 0.0, 1.0);
        let b = Particle::new(60.0, 50.0, 0.0, 0.0, 1.0);
        let c = Particle::new(400.0, 400.0, 0.0, 0.0, 1.0);

        let mut forward = field_of(vec![a, b, c], ResizePolicy::Keep);
        let mut backward = field_of(vec![c, b, a], ResizePolicy::Keep);
        let f = forward.step(&mut RecordingSurface::default());
        let r = backward.step(&mut RecordingSurface::default());
        assert_eq!(f, r);
        assert_eq!(f.links_drawn, 1);
    }

    #[test]
    fn resize_to_same_size_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = ParticleField::new(FieldConfig::default(), 100, 100, &mut rng);
        let before = field.particles().to_vec();
        assert!(!field.resize(100, 100));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn keep_policy_leaves_particles_outside() {
        let mut field = field_of(vec![Particle::new(90.0, 90.0, 0.2, 0.2, 1.0)], ResizePolicy::Keep);
        assert!(field.resize(50, 50));
        assert_eq!(field.size(), (50, 50));
        assert_eq!(field.particles()[0].pos, [90.0, 90.0]);
        assert_eq!(field.particles()[0].vel, [0.2, 0.2]);
    }

    #[test]
    fn keep_policy_particles_return_after_shrink() {
        let mut field = field_of(
            vec![
                Particle::new(90.0, 90.0, 0.2, 0.2, 1.0),
                Particle::new(95.0, 10.0, -0.1, 0.05, 1.0),
                Particle::new(70.0, 99.0, -0.15, -0.25, 1.0),
            ],
            ResizePolicy::Keep,
        );
        field.resize(50, 50);
        let slack = FieldConfig::DEFAULT_MAX_SPEED;
        let mut surface = RecordingSurface::default();
        for frame in 0..1000 {
            field.step(&mut surface);
            surface.ops.clear();
            // Farthest particle is 45 units out at 0.1 per frame
            if frame < 500 {
                continue;
            }
            for p in field.particles() {
                assert!(p.pos[0] >= -slack && p.pos[0] <= 50.0 + slack, "{:?}", p);
                assert!(p.pos[1] >= -slack && p.pos[1] <= 50.0 + slack, "{:?}", p);
            }
        }
    }

    #[test]
    fn clamp_policy_pulls_particles_in() {
        let mut field = field_of(
            vec![Particle::new(90.0, 20.0, 0.2, 0.2, 1.0)],
            ResizePolicy::Clamp,
        );
        field.resize(50, 50);
        assert_eq!(field.particles()[0].pos, [50.0, 20.0]);
        assert_eq!(field.particles()[0].vel, [0.2, 0.2]);
    }

    #[test]
    fn rescale_policy_scales_positions() {
        let mut field = field_of(
            vec![Particle::new(50.0, 25.0, 0.2, 0.2, 1.0)],
            ResizePolicy::Rescale,
        );
        field.resize(200, 50);
        assert_eq!(field.particles()[0].pos, [100.0, 12.5]);
    }
}
