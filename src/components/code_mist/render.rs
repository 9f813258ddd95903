//! Canvas rendering for the code mist background.
//!
//! Each frame clears the canvas, draws every particle as a glowing glyph, then
//! lays a faint radial mist over the smoothed pointer position.

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::state::MistState;
use super::theme::MistTheme;

/// Renders one frame of the background to the canvas.
pub fn render(state: &MistState, ctx: &CanvasRenderingContext2d) {
	let field = &state.field;
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_particles(field, ctx, &state.theme);

	if let Some((x, y)) = state.pointer.position() {
		draw_mist(field, ctx, &state.theme, x, y);
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &MistTheme) {
	ctx.save();
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_shadow_blur(theme.glow_blur);

	for p in field.slots() {
		let alpha = p.display_opacity(field.style(), field.height());
		if alpha <= 0.001 {
			continue;
		}
		let color = p.color.to_css();
		ctx.set_font(&format!("{}px {}", p.size, theme.font_family));
		ctx.set_fill_style_str(&color);
		ctx.set_shadow_color(&color);
		ctx.set_global_alpha(alpha);
		let _ = ctx.fill_text(p.glyph, p.x, p.y);
	}

	ctx.restore();
}

fn draw_mist(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	theme: &MistTheme,
	x: f64,
	y: f64,
) {
	let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, theme.mist_radius) else {
		return;
	};
	for (offset, color) in theme.mist_stops {
		let _ = gradient.add_color_stop(offset as f32, &color.to_css());
	}

	ctx.set_fill_style_canvas_gradient(&gradient);
	ctx.fill_rect(0.0, 0.0, field.width(), field.height());
}
