use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, SkillTreeState};
use super::types::NodeStatus;

/// Edge tint toward an unlocked node (the theme's primary green).
const EDGE_UNLOCKED: (u8, u8, u8) = (66, 185, 131);
/// Edge tint toward a reachable node.
const EDGE_ACTIVE: (u8, u8, u8) = (100, 180, 255);
/// Edge tint toward a gated node.
const EDGE_LOCKED: (u8, u8, u8) = (150, 150, 170);

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

fn rgba((r, g, b): (u8, u8, u8), a: f64) -> String {
	format!("rgba({r}, {g}, {b}, {a})")
}

pub fn render(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k, 8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	for edge in &state.edges {
		let (n1, n2) = (&state.nodes[edge.from], &state.nodes[edge.to]);
		let (x1, y1, x2, y2) = (n1.x, n1.y, n2.x, n2.y);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		// Flow runs toward nodes the player can act on or has taken.
		let (tint, flowing) = match n2.status {
			NodeStatus::Unlocked => (EDGE_UNLOCKED, true),
			NodeStatus::Available | NodeStatus::Unaffordable => (EDGE_ACTIVE, true),
			NodeStatus::Locked => (EDGE_LOCKED, false),
		};

		let is_highlighted = state.is_highlighted(edge.from) && state.is_highlighted(edge.to);
		let base = if flowing { 0.6 } else { 0.25 };
		let (edge_alpha, arrow_alpha, width) = if is_highlighted {
			(base + 0.3 * t, 0.8 + 0.1 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(base - base * 0.75 * t, 0.8 - 0.45 * t, line_width * (1.0 - 0.3 * t))
		};

		ctx.set_stroke_style_str(&rgba(tint, edge_alpha));
		ctx.set_line_width(width);
		if flowing {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(
			x2 - ux * (NODE_RADIUS + arrow_size),
			y2 - uy * (NODE_RADIUS + arrow_size),
		);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		ctx.set_fill_style_str(&rgba(tint, arrow_alpha));
		let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_disc(state: &SkillTreeState, ctx: &CanvasRenderingContext2d, idx: usize, radius: f64) {
	let node = &state.nodes[idx];
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);

	match node.status {
		NodeStatus::Unlocked => {
			ctx.set_fill_style_str(&node.color);
			ctx.fill();
		}
		NodeStatus::Available => {
			ctx.set_fill_style_str("#232345");
			ctx.fill();
			// Soft pulse invites the click.
			let pulse = 1.5 + (state.flow_time * 3.0).sin() * 1.5;
			ctx.set_stroke_style_str(&node.color);
			ctx.set_line_width(2.0 + pulse);
			ctx.stroke();
		}
		NodeStatus::Unaffordable => {
			ctx.set_fill_style_str("#232345");
			ctx.fill();
			ctx.set_global_alpha(0.45);
			ctx.set_stroke_style_str(&node.color);
			ctx.set_line_width(2.0);
			ctx.stroke();
			ctx.set_global_alpha(1.0);
		}
		NodeStatus::Locked => {
			ctx.set_fill_style_str("#202030");
			ctx.fill();
			ctx.set_stroke_style_str("rgba(150, 150, 170, 0.5)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}
	}

	let icon_alpha = match node.status {
		NodeStatus::Unlocked | NodeStatus::Available => 1.0,
		NodeStatus::Unaffordable => 0.7,
		NodeStatus::Locked => 0.35,
	};
	ctx.set_global_alpha(icon_alpha);
	ctx.set_font("20px serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.icon, node.x, node.y);
	ctx.set_global_alpha(1.0);
}

fn draw_labels(
	state: &SkillTreeState,
	ctx: &CanvasRenderingContext2d,
	idx: usize,
	radius: f64,
	alpha: f64,
) {
	let node = &state.nodes[idx];
	let k = state.transform.k;

	ctx.set_text_align("center");
	ctx.set_text_baseline("alphabetic");
	ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {alpha})"));
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
	let _ = ctx.fill_text(&node.name, node.x, node.y + radius + 14.0 / k.max(0.5));

	if node.status != NodeStatus::Unlocked {
		let cost_color = if node.status == NodeStatus::Unaffordable {
			format!("rgba(255, 82, 82, {alpha})")
		} else {
			format!("rgba(200, 220, 255, {})", alpha * 0.8)
		};
		ctx.set_fill_style_str(&cost_color);
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		let label = if node.cost == 1 {
			"1 pt".to_string()
		} else {
			format!("{} pts", node.cost)
		};
		let _ = ctx.fill_text(&label, node.x, node.y + radius + 27.0 / k.max(0.5));
	}
}

fn draw_nodes(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	for idx in 0..state.nodes.len() {
		if has_highlight && state.is_highlighted(idx) {
			continue;
		}
		let alpha = 1.0 - 0.7 * t;
		let radius = NODE_RADIUS * (1.0 - 0.15 * t);
		ctx.set_global_alpha(alpha);
		draw_disc(state, ctx, idx, radius);
		ctx.set_global_alpha(1.0);
		draw_labels(state, ctx, idx, radius, alpha * 0.8);
	}

	if !has_highlight {
		return;
	}

	for idx in 0..state.nodes.len() {
		if !state.is_highlighted(idx) {
			continue;
		}
		let node = &state.nodes[idx];
		let is_hovered = state.is_hovered(idx);
		let is_neighbor =
			state.hover.neighbors.contains(&idx) || state.hover.prev_neighbors.contains(&idx);

		let (radius, glow_radius) = if is_hovered {
			(
				NODE_RADIUS * (1.0 + 0.35 * t),
				NODE_RADIUS * (1.8 + 1.2 * t),
			)
		} else if is_neighbor {
			(NODE_RADIUS * (1.0 + 0.2 * t), NODE_RADIUS * (1.4 + 0.6 * t))
		} else {
			(NODE_RADIUS, 0.0)
		};

		if glow_radius > 0.0 && t > 0.01 {
			if let Ok(gradient) =
				ctx.create_radial_gradient(node.x, node.y, radius * 0.3, node.x, node.y, glow_radius)
			{
				let alpha = if is_hovered { 0.35 * t } else { 0.2 * t };
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {alpha})"));
				let _ = gradient
					.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", alpha * 0.3));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(node.x, node.y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		draw_disc(state, ctx, idx, radius);

		if is_hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		draw_labels(state, ctx, idx, radius, 1.0);
	}
}
