//! Animation state for the code mist canvas.
//!
//! Wraps the particle pool with the page inputs that drive it: a spring-smoothed
//! pointer, the scroll progress, and a frame gate that throttles stepping and
//! pauses it while the canvas is off screen.

use super::particles::{FrameInput, ParticleField};
use super::theme::MistTheme;

/// Minimum time between simulation steps, in milliseconds (~120 fps cap).
const MIN_FRAME_INTERVAL_MS: f64 = 8.33;

/// Longest step handed to the pointer spring. Larger gaps (tab switches,
/// paused canvas) are treated as a single normal frame.
const MAX_SPRING_DT: f64 = 0.05;

/// Pointer position that chases the real cursor like a damped spring.
///
/// Integrates `a = stiffness * (target - pos) - damping * vel` per axis with
/// semi-implicit Euler steps. Unit mass.
#[derive(Clone, Debug)]
pub struct SmoothedPointer {
	target: Option<(f64, f64)>,
	pos: (f64, f64),
	vel: (f64, f64),
	stiffness: f64,
	damping: f64,
}

impl Default for SmoothedPointer {
	fn default() -> Self {
		Self::new(100.0, 30.0)
	}
}

impl SmoothedPointer {
	/// Spring with the given stiffness and damping.
	pub fn new(stiffness: f64, damping: f64) -> Self {
		Self {
			target: None,
			pos: (0.0, 0.0),
			vel: (0.0, 0.0),
			stiffness,
			damping,
		}
	}

	/// Move the target. The first target snaps the smoothed position to it.
	pub fn set_target(&mut self, x: f64, y: f64) {
		if self.target.is_none() {
			self.pos = (x, y);
			self.vel = (0.0, 0.0);
		}
		self.target = Some((x, y));
	}

	/// Advance the spring by `dt` seconds towards the last target.
	pub fn tick(&mut self, dt: f64) {
		let Some((tx, ty)) = self.target else {
			return;
		};
		let dt = dt.clamp(0.0, MAX_SPRING_DT);
		let ax = self.stiffness * (tx - self.pos.0) - self.damping * self.vel.0;
		let ay = self.stiffness * (ty - self.pos.1) - self.damping * self.vel.1;
		self.vel.0 += ax * dt;
		self.vel.1 += ay * dt;
		self.pos.0 += self.vel.0 * dt;
		self.pos.1 += self.vel.1 * dt;
	}

	/// Smoothed position, once the pointer has been seen.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.target.map(|_| self.pos)
	}
}

/// Decides whether an animation callback should advance the simulation.
#[derive(Clone, Debug)]
pub struct FrameGate {
	visible: bool,
	last_step_ms: Option<f64>,
	min_interval_ms: f64,
}

impl Default for FrameGate {
	fn default() -> Self {
		Self {
			visible: true,
			last_step_ms: None,
			min_interval_ms: MIN_FRAME_INTERVAL_MS,
		}
	}
}

impl FrameGate {
	/// Record a visibility change reported by the intersection observer.
	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	/// Returns the seconds elapsed since the previous step if a step should run
	/// at `now_ms`, or `None` to skip this callback.
	pub fn admit(&mut self, now_ms: f64) -> Option<f64> {
		if !self.visible {
			return None;
		}
		let elapsed_ms = match self.last_step_ms {
			Some(last) if now_ms - last < self.min_interval_ms => return None,
			Some(last) => now_ms - last,
			None => 1000.0 / 60.0,
		};
		self.last_step_ms = Some(now_ms);
		Some(elapsed_ms / 1000.0)
	}
}

/// Everything the animation loop mutates each frame.
pub struct MistState {
	/// Particle pool.
	pub field: ParticleField,
	/// Smoothed pointer driving attraction and the mist.
	pub pointer: SmoothedPointer,
	/// Decides which animation callbacks step the field.
	pub gate: FrameGate,
	/// Page scroll progress in `[0, 1]`.
	pub scroll: f64,
	/// Colors and tuning for rendering.
	pub theme: MistTheme,
}

impl MistState {
	/// Fresh state for a `width` x `height` canvas.
	pub fn new(theme: MistTheme, width: f64, height: f64, seed: u64) -> Self {
		Self {
			field: ParticleField::new(theme.particles.clone(), width, height, seed),
			pointer: SmoothedPointer::default(),
			gate: FrameGate::default(),
			scroll: 0.0,
			theme,
		}
	}

	/// Run one animation callback. Returns whether the simulation advanced.
	pub fn frame(&mut self, now_ms: f64) -> bool {
		let Some(dt) = self.gate.admit(now_ms) else {
			return false;
		};
		self.pointer.tick(dt);
		self.field.step(FrameInput {
			pointer: self.pointer.position(),
			scroll: self.scroll.clamp(0.0, 1.0),
		});
		true
	}
}
