//! Visual theming for the code mist background.
//!
//! Provides the glyph set, neon palette and particle tuning.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha `a`.
	pub const fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Tokens drifting through the background.
pub const CODE_GLYPHS: &[&str] = &[
	"0", "1", "{", "}", "[", "]", "(", ")", "<", ">", "/", "\\", "=", "+", "-", "*", "&", "|", "^",
	"~", "function", "const", "let", "var", "if", "else", "for", "while", "return", "class",
	"import", "export", "React", "Node", "HTML", "CSS", "JS", "MongoDB", "API", "JSON", "HTTP",
	"GET", "POST", "async", "await", "Naman >= Danger", "Naman == Coder",
];

/// Neon terminal palette.
pub const NEON_PALETTE: &[Color] = &[
	Color::rgb(0, 255, 65),   // Matrix green
	Color::rgb(0, 153, 255),  // Electric blue
	Color::rgb(0, 255, 255),  // Cyan
	Color::rgb(57, 255, 20),  // Neon lime
	Color::rgb(0, 255, 136),  // Spring green
];

/// Half-open `[min, max)` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Span {
	/// Span from `min` up to `max`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Map a unit sample `t` in `[0, 1)` into the span.
	pub fn at(self, t: f64) -> f64 {
		self.min + t * (self.max - self.min)
	}

	/// Whether `v` falls inside the span.
	pub fn contains(self, v: f64) -> bool {
		v >= self.min && v < self.max
	}
}

/// Particle spawn ranges and per-frame physics constants.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of slots in the pool.
	pub count: usize,
	/// Glyphs picked at random for each particle.
	pub glyphs: &'static [&'static str],
	/// Colors picked at random for each particle.
	pub palette: &'static [Color],
	/// Initial horizontal velocity.
	pub spawn_vx: Span,
	/// Initial vertical velocity.
	pub spawn_vy: Span,
	/// Velocity ranges used when a particle falls off the bottom edge.
	pub respawn_vx: Span,
	/// Vertical velocity after respawning at the top.
	pub respawn_vy: Span,
	/// Base opacity range.
	pub opacity: Span,
	/// Font size range in pixels.
	pub size: Span,
	/// Lifetime range in frames.
	pub life: Span,
	/// Constant downward drift added every frame.
	pub gravity: f64,
	/// Horizontal drift per unit of scroll progress.
	pub scroll_bias: f64,
	/// Amplitude of the random horizontal velocity jitter.
	pub jitter: f64,
	/// Pointer attraction radius in pixels.
	pub attract_radius: f64,
	/// Fraction of the pointer offset added to velocity per frame.
	pub attract_strength: f64,
	/// Opacity gained per unit of attraction force, capped at `attract_opacity_max`.
	pub attract_opacity: f64,
	/// Upper bound for opacity boosted by the pointer.
	pub attract_opacity_max: f64,
	/// Distance beyond the viewport edge before a particle wraps or respawns.
	pub margin: f64,
	/// Horizontal velocity multiplier per frame.
	pub damping_x: f64,
	/// Vertical velocity multiplier per frame.
	pub damping_y: f64,
	/// How much a particle fades towards the bottom of the viewport.
	pub depth_fade: f64,
	/// Global opacity multiplier applied when drawing.
	pub draw_opacity: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 150,
			glyphs: CODE_GLYPHS,
			palette: NEON_PALETTE,
			spawn_vx: Span::new(-0.3, 0.3),
			spawn_vy: Span::new(0.5, 1.5),
			respawn_vx: Span::new(-0.15, 0.15),
			respawn_vy: Span::new(0.2, 0.7),
			opacity: Span::new(0.1, 0.5),
			size: Span::new(8.0, 18.0),
			life: Span::new(100.0, 300.0),
			gravity: 0.5,
			scroll_bias: 5.0,
			jitter: 0.05,
			attract_radius: 200.0,
			attract_strength: 0.005,
			attract_opacity: 0.03,
			attract_opacity_max: 0.8,
			margin: 50.0,
			damping_x: 0.995,
			damping_y: 0.998,
			depth_fade: 0.3,
			draw_opacity: 0.7,
		}
	}
}

/// Complete visual theme for the background canvas.
#[derive(Clone, Debug)]
pub struct MistTheme {
	/// Particle tuning.
	pub particles: ParticleStyle,
	/// CSS background behind the canvas.
	pub backdrop: &'static str,
	/// CSS font family for the glyphs.
	pub font_family: &'static str,
	/// Shadow blur radius for the glyph glow.
	pub glow_blur: f64,
	/// Radius of the glow that follows the pointer.
	pub mist_radius: f64,
	/// Gradient stops for the pointer glow, from center outwards.
	pub mist_stops: [(f64, Color); 3],
}

impl Default for MistTheme {
	fn default() -> Self {
		Self {
			particles: ParticleStyle::default(),
			backdrop: "radial-gradient(ellipse at center, #001122 0%, #000000 100%)",
			font_family: "'JetBrains Mono', monospace",
			glow_blur: 8.0,
			mist_radius: 300.0,
			mist_stops: [
				(0.0, Color::rgb(0, 255, 65).with_alpha(0.02)),
				(0.5, Color::rgb(0, 153, 255).with_alpha(0.01)),
				(1.0, Color::rgb(0, 0, 0).with_alpha(0.0)),
			],
		}
	}
}
