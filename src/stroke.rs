// Stroke rasterizer: turns two pointer samples into painted pixels.
// A Bresenham center line is walked pixel by pixel and a round stamp is
// pressed at every step, so fast pointer motion still leaves no gaps.
// The center line is first clipped to the canvas grown by the stamp radius,
// so a far-away endpoint costs no more than one that sits on the edge.

use crate::buffer::PixelBuffer;
use crate::types::{BrushSize, Color};

/// Precomputed filled disc, stored as the half-width of each row.
pub struct Stamp {
    radius: i64,
    spans: Vec<i64>, // spans[dy + radius] = largest |dx| inside the disc on row dy
}

impl Stamp {
    /// Disc of the given radius. A half-pixel of slack (r² + r) keeps small
    /// discs round instead of diamond shaped.
    pub fn disc(radius: i64) -> Self {
        let r = radius.max(0);
        let limit = r * r + r;
        let spans = (-r..=r).map(|dy| (limit - dy * dy).isqrt()).collect();
        Stamp { radius: r, spans }
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Press the stamp at (cx, cy). Rows and columns off the canvas are skipped.
    pub fn dab(&self, buf: &mut PixelBuffer, cx: i64, cy: i64, color: Color) {
        let (w, h) = buf.dimensions();
        let (w, h) = (w as i64, h as i64);
        let r = self.radius;
        for y in (cy - r).max(0)..=(cy + r).min(h - 1) {
            let half = self.spans[(y - cy + r) as usize];
            for x in (cx - half).max(0)..=(cx + half).min(w - 1) {
                buf.put(x as usize, y as usize, color);
            }
        }
    }
}

/// Center pixels of the line from (x0,y0) to (x1,y1), both ends included,
/// each step 8-adjacent to the previous one.
pub fn line_points(x0: i64, y0: i64, x1: i64, y1: i64) -> impl Iterator<Item = (i64, i64)> {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let here = (x, y);
        if x == x1 && y == y1 {
            done = true;
        } else {
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Some(here)
    })
}

/// Liang-Barsky: the part of the segment inside [min, max] (inclusive), or
/// None if it misses the box. Endpoints already inside are returned unchanged.
fn clip_segment(
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    (min_x, min_y): (i64, i64),
    (max_x, max_y): (i64, i64),
) -> Option<((i64, i64), (i64, i64))> {
    let (dx, dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    let edges = [
        (-dx, (x0 - min_x) as f64),
        (dx, (max_x - x0) as f64),
        (-dy, (y0 - min_y) as f64),
        (dy, (max_y - y0) as f64),
    ];

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }

    let at = |t: f64| ((x0 as f64 + t * dx).round() as i64, (y0 as f64 + t * dy).round() as i64);
    let start = if t0 > 0.0 { at(t0) } else { (x0, y0) };
    let end = if t1 < 1.0 { at(t1) } else { (x1, y1) };
    Some((start, end))
}

/// Paint a segment of the given width. Equal endpoints paint a single dot.
/// Endpoints may lie anywhere; only on-canvas pixels are touched.
pub fn draw_segment(
    buf: &mut PixelBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
    width: BrushSize,
) {
    let (w, h) = buf.dimensions();
    let (w, h) = (w as i64, h as i64);
    // A disc wider than the canvas paints the same pixels as one that just covers it.
    let stamp = Stamp::disc(width.radius().min(w + h));
    let r = stamp.radius();

    let Some((start, end)) = clip_segment(
        (i64::from(x0), i64::from(y0)),
        (i64::from(x1), i64::from(y1)),
        (-r, -r),
        (w - 1 + r, h - 1 + r),
    ) else {
        return;
    };
    for (x, y) in line_points(start.0, start.1, end.0, end.1) {
        stamp.dab(buf, x, y, color);
    }
}

/// A single round dot, as left by a click without motion.
pub fn draw_dot(buf: &mut PixelBuffer, x: i32, y: i32, color: Color, width: BrushSize) {
    draw_segment(buf, x, y, x, y, color, width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    fn painted(buf: &PixelBuffer, color: Color) -> HashSet<(i32, i32)> {
        buf.pixels()
            .filter(|&(_, _, c)| c == color)
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect()
    }

    fn eight_connected(set: &HashSet<(i32, i32)>, from: (i32, i32), to: (i32, i32)) -> bool {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([from]);
        seen.insert(from);
        while let Some((x, y)) = queue.pop_front() {
            if (x, y) == to {
                return true;
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let n = (x + dx, y + dy);
                    if set.contains(&n) && seen.insert(n) {
                        queue.push_back(n);
                    }
                }
            }
        }
        false
    }

    fn size(px: u32) -> BrushSize {
        BrushSize::new(px).unwrap()
    }

    #[test]
    fn line_points_hits_both_ends() {
        let pts: Vec<_> = line_points(0, 0, 4, 2).collect();
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(4, 2)));
        assert_eq!(pts.len(), 5);
        assert_eq!(line_points(3, 3, 3, 3).collect::<Vec<_>>(), vec![(3, 3)]);
    }

    #[test]
    fn thin_segment_is_continuous() {
        for &(x0, y0, x1, y1) in &[(2, 3, 57, 41), (60, 5, 1, 30), (10, 60, 10, 2), (0, 0, 63, 63)] {
            let mut buf = PixelBuffer::new(64, 64, Color::WHITE).unwrap();
            draw_segment(&mut buf, x0, y0, x1, y1, Color::BLACK, size(1));
            let set = painted(&buf, Color::BLACK);
            let min_len = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            assert!(set.len() >= min_len, "{} < {min_len}", set.len());
            assert!(eight_connected(&set, (x0, y0), (x1, y1)));
        }
    }

    #[test]
    fn wide_segment_covers_thin_one() {
        let mut thin = PixelBuffer::new(40, 40, Color::WHITE).unwrap();
        let mut wide = thin.clone();
        draw_segment(&mut thin, 5, 8, 33, 20, Color::RED, size(1));
        draw_segment(&mut wide, 5, 8, 33, 20, Color::RED, size(5));
        let thin = painted(&thin, Color::RED);
        let wide = painted(&wide, Color::RED);
        assert!(thin.is_subset(&wide));
        assert!(wide.len() > thin.len());
    }

    #[test]
    fn stroke_leaving_the_canvas_is_clipped() {
        let mut buf = PixelBuffer::new(10, 10, Color::WHITE).unwrap();
        draw_segment(&mut buf, -20, 5, 30, 5, Color::BLUE, size(3));
        let set = painted(&buf, Color::BLUE);
        assert!((0..10).all(|x| set.contains(&(x, 5))));
        assert!(set.iter().all(|&(_, y)| (4..=6).contains(&y)));
    }

    #[test]
    fn zero_length_segment_paints_a_disc() {
        let mut buf = PixelBuffer::new(20, 20, Color::WHITE).unwrap();
        draw_dot(&mut buf, 10, 10, Color::GREEN, size(5));
        let set = painted(&buf, Color::GREEN);
        assert!(set.contains(&(10, 10)));
        assert!(set.contains(&(12, 10)) && set.contains(&(10, 8)));
        assert!(!set.contains(&(12, 12)));
        assert!(set.iter().all(|&(x, y)| (x - 10).abs() <= 2 && (y - 10).abs() <= 2));
    }

    #[test]
    fn width_one_dot_is_one_pixel() {
        let mut buf = PixelBuffer::new(5, 5, Color::WHITE).unwrap();
        draw_dot(&mut buf, 2, 2, Color::BLACK, size(1));
        assert_eq!(painted(&buf, Color::BLACK), HashSet::from([(2, 2)]));
    }

    #[test]
    fn far_endpoint_paints_the_visible_part() {
        let mut buf = PixelBuffer::new(20, 20, Color::WHITE).unwrap();
        draw_segment(&mut buf, 5, 5, 20_000_000, 5, Color::BLUE, size(7));
        let set = painted(&buf, Color::BLUE);
        assert!((5..20).all(|x| set.contains(&(x, 5))));
        assert!((5..20).all(|x| set.contains(&(x, 2)) && set.contains(&(x, 8))));
        assert!(set.iter().all(|&(_, y)| (2..=8).contains(&y)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let mut buf = PixelBuffer::new(20, 20, Color::WHITE).unwrap();
        draw_segment(&mut buf, i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::BLACK, size(1));
        let set = painted(&buf, Color::BLACK);
        assert!(set.contains(&(10, 10)));
        assert!(set.iter().all(|&(x, y)| (x - y).abs() <= 1));

        let mut untouched = PixelBuffer::new(20, 20, Color::WHITE).unwrap();
        draw_segment(&mut untouched, i32::MIN, 0, i32::MIN, i32::MAX, Color::BLACK, size(7));
        assert!(painted(&untouched, Color::BLACK).is_empty());
    }

    #[test]
    fn largest_brush_covers_small_canvas() {
        let mut buf = PixelBuffer::new(20, 20, Color::WHITE).unwrap();
        draw_segment(&mut buf, 5, 5, 6, 6, Color::RED, BrushSize::MAX);
        assert_eq!(painted(&buf, Color::RED).len(), 400);
    }

    #[test]
    fn disc_rows_match_circle() {
        let stamp = Stamp::disc(2);
        assert_eq!(stamp.radius(), 2);
        assert_eq!(stamp.spans, vec![1, 2, 2, 2, 1]);
        assert_eq!(Stamp::disc(0).spans, vec![0]);
    }
}
