//! Drifting code glyphs for the background effect.
//!
//! The pool is allocated once with a fixed number of slots. Particles are never
//! removed: when one falls off the bottom edge or runs out of life it is
//! recycled in place with fresh random attributes.

use fastrand::Rng;

use super::theme::{Color, ParticleStyle};

/// A single drifting glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in canvas pixels.
	pub x: f64,
	/// Vertical position in canvas pixels.
	pub y: f64,
	/// Horizontal velocity per frame.
	pub vx: f64,
	/// Vertical velocity per frame.
	pub vy: f64,
	/// Text drawn for this particle.
	pub glyph: &'static str,
	/// Base opacity before fading.
	pub opacity: f64,
	/// Font size in pixels.
	pub size: f64,
	/// Remaining life in frames.
	pub life: f64,
	/// Life the particle was spawned with.
	pub max_life: f64,
	/// Fill and glow color.
	pub color: Color,
}

impl Particle {
	/// Opacity after fading by remaining life and depth in the viewport.
	pub fn display_opacity(&self, style: &ParticleStyle, height: f64) -> f64 {
		let life_factor = if self.max_life > 0.0 {
			(self.life / self.max_life).clamp(0.0, 1.0)
		} else {
			0.0
		};
		let depth_factor = if height > 0.0 {
			1.0 - (self.y / height) * style.depth_fade
		} else {
			1.0
		};
		(self.opacity * life_factor * depth_factor * style.draw_opacity).clamp(0.0, 1.0)
	}
}

/// Per-frame inputs from the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
	/// Pointer position in canvas pixels, if the pointer has been seen.
	pub pointer: Option<(f64, f64)>,
	/// Page scroll progress in `[0, 1]`.
	pub scroll: f64,
}

/// Fixed-capacity pool of particles, indexed by slot.
pub struct ParticleField {
	slots: Vec<Particle>,
	style: ParticleStyle,
	rng: Rng,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Create a field of `style.count` particles seeded with `seed`.
	pub fn new(style: ParticleStyle, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = Rng::with_seed(seed);
		let slots = (0..style.count)
			.map(|_| Self::spawn(&mut rng, &style, width, height))
			.collect();

		Self {
			slots,
			style,
			rng,
			width,
			height,
		}
	}

	/// A new particle somewhere in the band just above the viewport.
	fn spawn(rng: &mut Rng, style: &ParticleStyle, width: f64, height: f64) -> Particle {
		Particle {
			x: rng.f64() * width,
			y: rng.f64() * height - height,
			vx: style.spawn_vx.at(rng.f64()),
			vy: style.spawn_vy.at(rng.f64()),
			glyph: Self::pick(rng, style.glyphs).unwrap_or("0"),
			opacity: style.opacity.at(rng.f64()),
			size: style.size.at(rng.f64()),
			life: style.life.at(rng.f64()),
			max_life: style.life.at(rng.f64()),
			color: Self::pick(rng, style.palette).unwrap_or(Color::rgb(0, 255, 65)),
		}
	}

	fn pick<T: Copy>(rng: &mut Rng, items: &[T]) -> Option<T> {
		if items.is_empty() {
			None
		} else {
			Some(items[rng.usize(..items.len())])
		}
	}

	/// Current particles, one per slot.
	pub fn slots(&self) -> &[Particle] {
		&self.slots
	}

	/// Tuning the field was created with.
	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	/// Canvas width the field wraps around.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Canvas height the field wraps around.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Re-seed every slot for a new viewport size. The pool is reused in place.
	pub fn reset(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		for slot in &mut self.slots {
			*slot = Self::spawn(&mut self.rng, &self.style, width, height);
		}
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self, input: FrameInput) {
		let style = &self.style;
		let (width, height) = (self.width, self.height);
		let radius_sq = style.attract_radius * style.attract_radius;

		for p in &mut self.slots {
			// Drift
			p.x += p.vx + input.scroll * style.scroll_bias;
			p.y += p.vy + style.gravity;
			p.vx += (self.rng.f64() - 0.5) * style.jitter;

			// Pointer attraction
			if let Some((mx, my)) = input.pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				let dist_sq = dx * dx + dy * dy;
				if dist_sq < radius_sq {
					let dist = dist_sq.sqrt();
					let force = (style.attract_radius - dist) / style.attract_radius;
					if dist > f64::EPSILON {
						p.vx += dx / dist * force * style.attract_strength;
						p.vy += dy / dist * force * style.attract_strength;
					}
					p.opacity = (p.opacity + force * style.attract_opacity)
						.min(style.attract_opacity_max);
				}
			}

			// Fell off the bottom: respawn above the top edge
			if p.y > height + style.margin {
				p.y = -style.margin;
				p.x = self.rng.f64() * width;
				p.vx = style.respawn_vx.at(self.rng.f64());
				p.vy = style.respawn_vy.at(self.rng.f64());
			}

			// Horizontal wraparound
			if p.x < -style.margin {
				p.x = width + style.margin;
			} else if p.x > width + style.margin {
				p.x = -style.margin;
			}

			// Lifetime recycle
			p.life -= 1.0;
			if p.life <= 0.0 {
				p.life = p.max_life;
				p.glyph = Self::pick(&mut self.rng, style.glyphs).unwrap_or(p.glyph);
				p.color = Self::pick(&mut self.rng, style.palette).unwrap_or(p.color);
				p.opacity = style.opacity.at(self.rng.f64());
			}

			p.vx *= style.damping_x;
			p.vy *= style.damping_y;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn field() -> ParticleField {
		ParticleField::new(ParticleStyle::default(), W, H, 42)
	}

	/// A particle parked mid-screen with no velocity and plenty of life.
	fn park(field: &mut ParticleField, slot: usize, x: f64, y: f64) {
		let p = &mut field.slots[slot];
		p.x = x;
		p.y = y;
		p.vx = 0.0;
		p.vy = 0.0;
		p.life = 200.0;
		p.max_life = 200.0;
		p.opacity = 0.3;
	}

	#[test]
	fn spawns_full_pool_above_viewport() {
		let field = field();
		let style = ParticleStyle::default();
		assert_eq!(field.slots().len(), 150);
		for p in field.slots() {
			assert!((0.0..W).contains(&p.x));
			assert!((-H..0.0).contains(&p.y));
			assert!(style.spawn_vx.contains(p.vx));
			assert!(style.spawn_vy.contains(p.vy));
			assert!(style.opacity.contains(p.opacity));
			assert!(style.size.contains(p.size));
			assert!(style.life.contains(p.life));
			assert!(style.life.contains(p.max_life));
			assert!(style.glyphs.contains(&p.glyph));
			assert!(style.palette.contains(&p.color));
		}
	}

	#[test]
	fn same_seed_same_field() {
		let a = field();
		let b = field();
		assert_eq!(a.slots(), b.slots());
	}

	#[test]
	fn drift_applies_gravity_and_scroll_bias() {
		let mut field = field();
		park(&mut field, 0, 100.0, 100.0);
		field.step(FrameInput {
			pointer: None,
			scroll: 0.5,
		});
		let p = &field.slots()[0];
		assert!((p.x - 102.5).abs() < 1e-9);
		assert!((p.y - 100.5).abs() < 1e-9);
		// Jitter is bounded by half the jitter amplitude, then damped.
		assert!(p.vx.abs() <= 0.025);
	}

	#[test]
	fn bottom_exit_respawns_above_top_edge() {
		let mut field = field();
		park(&mut field, 3, 400.0, H + 60.0);
		field.step(FrameInput::default());

		let style = ParticleStyle::default();
		let p = &field.slots()[3];
		assert_eq!(p.y, -50.0);
		assert!((0.0..W).contains(&p.x));
		assert!(p.vx.abs() <= 0.15);
		assert!(p.vy >= 0.2 * style.damping_y && p.vy < 0.7);
	}

	#[test]
	fn horizontal_edges_wrap() {
		let mut field = field();
		park(&mut field, 0, -60.0, 100.0);
		park(&mut field, 1, W + 60.0, 100.0);
		field.step(FrameInput::default());
		assert_eq!(field.slots()[0].x, W + 50.0);
		assert_eq!(field.slots()[1].x, -50.0);
	}

	#[test]
	fn expired_life_is_recycled_in_place() {
		let mut field = field();
		park(&mut field, 7, 100.0, 100.0);
		field.slots[7].life = 1.0;
		field.slots[7].max_life = 250.0;
		field.step(FrameInput::default());

		let style = ParticleStyle::default();
		let p = &field.slots()[7];
		assert_eq!(p.life, 250.0);
		assert!(style.opacity.contains(p.opacity));
		assert_eq!(field.slots().len(), 150);
	}

	#[test]
	fn pointer_pulls_nearby_particles_and_brightens_them() {
		let mut attracted = field();
		let mut control = field();
		for f in [&mut attracted, &mut control] {
			park(f, 0, 100.0, 100.0);
			park(f, 1, 700.0, 500.0);
		}
		attracted.step(FrameInput {
			pointer: Some((200.0, 100.5)),
			scroll: 0.0,
		});
		control.step(FrameInput::default());

		// Same seed, so the jitter matches and only the pull differs.
		let (near, baseline) = (&attracted.slots()[0], &control.slots()[0]);
		assert!(near.vx > baseline.vx);
		assert!(near.opacity > 0.3);

		let far = &attracted.slots()[1];
		assert_eq!(far.opacity, 0.3);
	}

	#[test]
	fn pointer_brightening_is_capped() {
		let mut field = field();
		park(&mut field, 0, 100.0, 100.0);
		field.slots[0].opacity = 0.79;
		field.step(FrameInput {
			pointer: Some((100.0, 100.5)),
			scroll: 0.0,
		});
		assert_eq!(field.slots()[0].opacity, 0.8);
	}

	#[test]
	fn particle_on_pointer_gets_no_directional_nudge() {
		let mut field = field();
		park(&mut field, 0, 100.0, 99.5);
		field.step(FrameInput {
			pointer: Some((100.0, 100.0)),
			scroll: 0.0,
		});
		let p = &field.slots()[0];
		assert!(p.vx.is_finite() && p.vy.is_finite());
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn display_opacity_fades_with_life_and_depth() {
		let style = ParticleStyle::default();
		let mut field = field();
		park(&mut field, 0, 100.0, 0.0);
		let p = &mut field.slots[0];
		p.opacity = 0.5;
		assert!((p.display_opacity(&style, H) - 0.35).abs() < 1e-9);

		p.life = 100.0;
		p.y = H;
		// half life, bottom of screen: 0.5 * 0.5 * 0.7 * 0.7
		assert!((p.display_opacity(&style, H) - 0.1225).abs() < 1e-9);

		p.life = 400.0;
		p.y = 0.0;
		assert!((p.display_opacity(&style, H) - 0.35).abs() < 1e-9);
		assert!((p.display_opacity(&style, 0.0) - 0.35).abs() < 1e-9);
	}

	#[test]
	fn reset_reuses_slots_for_new_viewport() {
		let mut field = field();
		field.reset(1920.0, 1080.0);
		assert_eq!(field.slots().len(), 150);
		assert_eq!(field.width(), 1920.0);
		for p in field.slots() {
			assert!((0.0..1920.0).contains(&p.x));
			assert!((-1080.0..0.0).contains(&p.y));
		}
	}
}
