//! FilmSleuth application icon generator.
//!
//! Produces a procedural icon: a gold film reel (five sprocket holes around
//! a hub) seen through a magnifying-glass ring with a handle. Rendered at
//! an arbitrary resolution as RGBA pixel data for use as the window icon.

/// Generate a FilmSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let cx = s * 0.42;
    let cy = s * 0.42;
    let radius = s * 0.34;

    let ring_width = s * 0.045;
    let ring_outer = radius + ring_width;

    let angle_45: f32 = std::f32::consts::FRAC_PI_4;
    let h_start_x = cx + ring_outer * angle_45.cos();
    let h_start_y = cy + ring_outer * angle_45.sin();
    let h_end_x = s * 0.91;
    let h_end_y = s * 0.91;
    let h_width_start = s * 0.055;
    let h_width_end = s * 0.075;

    // ── Reel ────────────────────────────────────────────────────
    let reel_gold = [0xf2u8, 0xc9, 0x4c];
    let lens_dark = [0x0eu8, 0x11, 0x17];
    let hub_radius = radius * 0.16;
    let hole_orbit = radius * 0.52;
    let hole_radius = radius * 0.19;
    let holes: Vec<(f32, f32)> = (0..5)
        .map(|i| {
            let a = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::TAU / 5.0;
            (cx + hole_orbit * a.cos(), cy + hole_orbit * a.sin())
        })
        .collect();

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - cx;
            let dy = py - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Reel disc inside the lens. ─────────────────────
            if dist < radius + 1.5 {
                let edge_aa = smooth_edge(dist, radius);

                // Holes and the hub are cut out of the gold disc.
                let mut cut = smooth_edge(dist, hub_radius);
                for &(hx, hy) in &holes {
                    let hd = ((px - hx).powi(2) + (py - hy).powi(2)).sqrt();
                    cut = cut.max(smooth_edge(hd, hole_radius));
                }

                cr = lerp_c(reel_gold[0], lens_dark[0], cut);
                cg = lerp_c(reel_gold[1], lens_dark[1], cut);
                cb = lerp_c(reel_gold[2], lens_dark[2], cut);
                ca = edge_aa;

                let shade = 1.0 - 0.15 * (dist / radius);
                cr = (cr as f32 * shade).min(255.0) as u8;
                cg = (cg as f32 * shade).min(255.0) as u8;
                cb = (cb as f32 * shade).min(255.0) as u8;

                // Glass highlight, upper-left.
                let hx = dx + radius * 0.30;
                let hy = dy + radius * 0.30;
                let highlight_dist = (hx * hx + hy * hy).sqrt();
                let highlight = (1.0 - highlight_dist / (radius * 0.65)).max(0.0) * 0.18;
                cr = (cr as f32 + highlight * 255.0).min(255.0) as u8;
                cg = (cg as f32 + highlight * 255.0).min(255.0) as u8;
                cb = (cb as f32 + highlight * 255.0).min(255.0) as u8;
            }

            // 2. Magnifying-glass ring. ──────────────────────────
            let ring_inner = radius - 0.5;
            if dist > ring_inner && dist < ring_outer + 1.5 {
                let ring_alpha = smooth_edge_inv(dist, ring_inner) * smooth_edge(dist, ring_outer);

                let grad = 0.5 + 0.5 * (1.0 - (dy / radius).clamp(-1.0, 1.0)) * 0.5;
                let rr = (0x70 as f32 * grad).min(255.0) as u8;
                let rg = (0x78 as f32 * grad).min(255.0) as u8;
                let rb = (0x85 as f32 * grad).min(255.0) as u8;

                cr = lerp_c(cr, rr, ring_alpha);
                cg = lerp_c(cg, rg, ring_alpha);
                cb = lerp_c(cb, rb, ring_alpha);
                ca = ca + (1.0 - ca) * ring_alpha;
            }

            // 3. Handle. ─────────────────────────────────────────
            let ld = point_to_seg_dist(px, py, h_start_x, h_start_y, h_end_x, h_end_y);
            let t = project_t(px, py, h_start_x, h_start_y, h_end_x, h_end_y);

            if t > -0.05 && t < 1.05 {
                let tt = t.clamp(0.0, 1.0);
                let half_w = h_width_start + (h_width_end - h_width_start) * tt;
                if ld < half_w + 1.5 {
                    let handle_aa = smooth_edge(ld, half_w);
                    cr = lerp_c(cr, lerp_c(0x78, 0x50, tt), handle_aa);
                    cg = lerp_c(cg, lerp_c(0x7d, 0x55, tt), handle_aa);
                    cb = lerp_c(cb, lerp_c(0x88, 0x60, tt), handle_aa);
                    ca = ca + (1.0 - ca) * handle_aa;
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Inverted smooth edge (0 → 1 as `dist` crosses `edge` going up).
fn smooth_edge_inv(dist: f32, edge: f32) -> f32 {
    1.0 - smooth_edge(dist, edge)
}

/// Perpendicular distance from a point to a line segment.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let t = project_t(px, py, ax, ay, bx, by).clamp(0.0, 1.0);
    let proj_x = ax + t * (bx - ax);
    let proj_y = ay + t * (by - ay);
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Project point onto line segment, returning the unclamped parameter t.
fn project_t(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return 0.0;
    }
    ((px - ax) * abx + (py - ay) * aby) / len_sq
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
