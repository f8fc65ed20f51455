// Simple particle struct to keep track of individual position, velocity, and radius

use rand::Rng;
use vecmath::{vec2_add, vec2_len, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniform position inside the surface, each velocity component in
    // [-max_speed, max_speed) and radius in [min_radius, max_radius)
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        max_speed: f64,
        radius: (f64, f64),
    ) -> Particle {
        Particle::new(
            sample(rng, 0.0, width),
            sample(rng, 0.0, height),
            sample(rng, -max_speed, max_speed),
            sample(rng, -max_speed, max_speed),
            sample(rng, radius.0, radius.1),
        )
    }

    // Move by one frame of velocity. A component that ends up outside
    // [0, bound] gets its velocity pointed back inside; the position is left
    // where it is.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);
        self.vel[0] = bounce(self.pos[0], self.vel[0], width);
        self.vel[1] = bounce(self.pos[1], self.vel[1], height);
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vec2_len(vec2_sub(other.pos, self.pos))
    }
}

fn bounce(pos: f64, vel: f64, bound: f64) -> f64 {
    if pos < 0.0 {
        vel.abs()
    } else if pos > bound {
        -vel.abs()
    } else {
        vel
    }
}

// gen_range panics on an empty range, which a zero-sized surface produces
fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low, high)
    } else {
        low
    }
}
