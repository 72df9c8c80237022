use super::{math_types::*, render_diagnostics::*};

// Edge endpoints closer than this are considered coincident.
const COINCIDENT_VERTICES_EPS: f64 = 1.0e-9;
// Edge with |dy| < eps * |dx| (in homogeneous line form) is considered horizontal.
const HORIZONTAL_EDGE_EPS: f64 = 1.0e-6;

// Horizontal strip [x_min, x_max] of pixels in row "y".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scanline
{
	pub y: i32,
	pub x_min: i32,
	pub x_max: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillScanlines
{
	pub first_row: i32,
	// Sorted by row. Row may be absent if NaN was calculated for it.
	pub scanlines: Vec<Scanline>,
	pub pixel_count: i32,
}

#[derive(Copy, Clone)]
struct PolygonEdge
{
	// "y" of the first edge vertex, after perspective division.
	start_y: f64,
	horizontal: bool,
	// x = dx_dy * y + x_k
	dx_dy: f64,
	x_k: f64,
}

impl PolygonEdge
{
	fn get_x(&self, y: f64) -> f64
	{
		self.dx_dy * y + self.x_k
	}
}

// Convert convex polygon with homogeneous screen-space vertices (x, y, w) into list of scanlines.
// Rows are in range [max(ceil(min_y), 0), min(floor(max_y), height)).
pub fn compute_fill_scanlines(polygon: &[Vec3d], image_size: [u32; 2], warnings: &mut RenderWarnings) -> FillScanlines
{
	let n = polygon.len();
	if n < 3 || image_size[0] == 0 || image_size[1] == 0
	{
		return FillScanlines::default();
	}

	let mut edges = Vec::with_capacity(n);
	// Top vertex index and rows range. Absent if all edges are degenerate.
	let mut top: Option<(usize, i32)> = None;
	let mut bottom_y = i32::MIN;
	for i in 0 .. n
	{
		let u = &polygon[i];
		let v = &polygon[(i + 1) % n];
		if vec3_has_nan(u)
		{
			report_warning(warnings, RenderWarning::NanInputVertex { index: i });
		}

		let mut edge = PolygonEdge {
			start_y: u.y / u.z,
			horizontal: true,
			dx_dy: f64::NAN,
			x_k: f64::NAN,
		};

		// NaN distance is not treated as coincidence, such edge produces NaN rows.
		let coincident = (project_homogeneous_2d(u) - project_homogeneous_2d(v)).magnitude() < COINCIDENT_VERTICES_EPS;
		if !coincident
		{
			// Build edge equation from homogeneous line, not from projected vertices.
			let line = u.cross(*v);
			edge.horizontal = line.x.abs() < HORIZONTAL_EDGE_EPS * line.y.abs();
			if !edge.horizontal
			{
				edge.dx_dy = -line.y / line.x;
				edge.x_k = -line.z / line.x;
			}

			if !edge.start_y.is_nan()
			{
				let y_ceil = edge.start_y.ceil() as i32;
				if top.map_or(true, |(_, top_y)| y_ceil < top_y)
				{
					top = Some((i, y_ceil));
				}
				bottom_y = std::cmp::max(bottom_y, edge.start_y.floor() as i32);
			}
		}

		edges.push(edge);
	}

	let (top_index, top_y) = if let Some(t) = top
	{
		t
	}
	else
	{
		// All edges are degenerate.
		return FillScanlines::default();
	};

	let width_minus_one = (image_size[0] - 1) as f64;
	let first_row = std::cmp::max(top_y, 0);
	let end_row = std::cmp::min(bottom_y, image_size[1] as i32);

	let mut result = FillScanlines {
		first_row,
		scanlines: Vec::with_capacity(std::cmp::max(end_row - first_row, 0) as usize),
		pixel_count: 0,
	};

	// Left side moves backward along polygon, right side - forward.
	let mut left = (top_index + n - 1) % n;
	let mut right = top_index;
	let mut nan_rows = 0;
	for y in first_row .. end_row
	{
		let y_f = y as f64;
		while (edges[left].start_y < y_f || edges[left].horizontal) && left != right
		{
			left = (left + n - 1) % n;
		}
		while (edges[(right + 1) % n].start_y < y_f || edges[right].horizontal) && left != right
		{
			right = (right + 1) % n;
		}

		let x_left = edges[left].get_x(y_f);
		let x_right = edges[right].get_x(y_f);
		if x_left.is_nan() || x_right.is_nan()
		{
			nan_rows += 1;
			continue;
		}

		let x_a = x_left.clamp(0.0, width_minus_one) as i32;
		let x_b = x_right.clamp(0.0, width_minus_one) as i32;
		result.pixel_count += (x_a - x_b).abs();
		result.scanlines.push(Scanline {
			y,
			x_min: std::cmp::min(x_a, x_b),
			x_max: std::cmp::max(x_a, x_b),
		});
	}

	if nan_rows > 0
	{
		report_warning(
			warnings,
			RenderWarning::NanScanlines {
				rows_skipped: nan_rows,
			},
		);
	}

	result
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn screen_polygon(points: &[[f64; 2]]) -> Vec<Vec3d>
	{
		points.iter().map(|p| Vec3d::new(p[0], p[1], 1.0)).collect()
	}

	fn find_row(fill: &FillScanlines, y: i32) -> Scanline
	{
		*fill.scanlines.iter().find(|s| s.y == y).unwrap()
	}

	#[test]
	fn right_triangle()
	{
		let mut warnings = RenderWarnings::new();
		let polygon = screen_polygon(&[[10.0, 10.0], [10.0, 90.0], [90.0, 10.0]]);
		let fill = compute_fill_scanlines(&polygon, [100, 100], &mut warnings);

		assert!(warnings.is_empty());
		assert_eq!(fill.first_row, 10);
		assert_eq!(fill.scanlines.len(), 80);
		assert_eq!(fill.scanlines[0], Scanline { y: 10, x_min: 10, x_max: 90 });
		assert_eq!(find_row(&fill, 50), Scanline { y: 50, x_min: 10, x_max: 50 });

		// Area of triangle is 3200.
		assert!((fill.pixel_count - 3200).abs() <= 80);

		for (i, scanline) in fill.scanlines.iter().enumerate()
		{
			assert_eq!(scanline.y, fill.first_row + i as i32);
			assert!(scanline.x_min <= scanline.x_max);
		}
	}

	#[test]
	fn winding_does_not_matter()
	{
		let mut warnings = RenderWarnings::new();
		let clockwise = compute_fill_scanlines(
			&screen_polygon(&[[10.0, 10.0], [10.0, 90.0], [90.0, 10.0]]),
			[100, 100],
			&mut warnings,
		);
		let counter_clockwise = compute_fill_scanlines(
			&screen_polygon(&[[10.0, 10.0], [90.0, 10.0], [10.0, 90.0]]),
			[100, 100],
			&mut warnings,
		);
		assert_eq!(clockwise, counter_clockwise);
	}

	#[test]
	fn homogeneous_scale_does_not_matter()
	{
		let mut warnings = RenderWarnings::new();
		let polygon = screen_polygon(&[[20.0, 5.0], [70.0, 40.0], [30.0, 60.0], [5.0, 30.0]]);
		let scaled: Vec<Vec3d> = polygon.iter().enumerate().map(|(i, v)| v * (0.5 + i as f64)).collect();

		let fill = compute_fill_scanlines(&polygon, [80, 80], &mut warnings);
		let fill_scaled = compute_fill_scanlines(&scaled, [80, 80], &mut warnings);
		assert_eq!(fill.first_row, fill_scaled.first_row);
		assert_eq!(fill.scanlines.len(), fill_scaled.scanlines.len());
		for (a, b) in fill.scanlines.iter().zip(fill_scaled.scanlines.iter())
		{
			assert_eq!(a.y, b.y);
			assert!((a.x_min - b.x_min).abs() <= 1);
			assert!((a.x_max - b.x_max).abs() <= 1);
		}
	}

	#[test]
	fn spans_are_clamped_to_image()
	{
		let mut warnings = RenderWarnings::new();
		let polygon = screen_polygon(&[[-50.0, 10.0], [-50.0, 90.0], [90.0, 10.0]]);
		let fill = compute_fill_scanlines(&polygon, [100, 100], &mut warnings);
		assert_eq!(find_row(&fill, 50), Scanline { y: 50, x_min: 0, x_max: 20 });
		for scanline in &fill.scanlines
		{
			assert!(scanline.x_min >= 0);
			assert!(scanline.x_max <= 99);
		}

		// Rows below image are not produced.
		let tall = screen_polygon(&[[10.0, -30.0], [10.0, 190.0], [60.0, -30.0]]);
		let fill_tall = compute_fill_scanlines(&tall, [100, 100], &mut warnings);
		assert_eq!(fill_tall.first_row, 0);
		assert_eq!(fill_tall.scanlines.last().unwrap().y, 99);
	}

	#[test]
	fn degenerate_polygons()
	{
		let mut warnings = RenderWarnings::new();

		let two_points = screen_polygon(&[[0.0, 0.0], [10.0, 10.0]]);
		assert_eq!(compute_fill_scanlines(&two_points, [100, 100], &mut warnings), FillScanlines::default());

		// All vertices coincide - no edge defines rows range.
		let point = screen_polygon(&[[5.0, 5.0], [5.0, 5.0], [5.0, 5.0]]);
		assert_eq!(compute_fill_scanlines(&point, [100, 100], &mut warnings), FillScanlines::default());

		// All edges are horizontal.
		let line = screen_polygon(&[[5.0, 7.0], [50.0, 7.0], [20.0, 7.0]]);
		let fill = compute_fill_scanlines(&line, [100, 100], &mut warnings);
		assert!(fill.scanlines.is_empty());
		assert_eq!(fill.pixel_count, 0);

		assert!(warnings.is_empty());
	}

	#[test]
	fn nan_rows_are_skipped_with_single_warning()
	{
		let mut warnings = RenderWarnings::new();
		let polygon = vec![
			Vec3d::new(10.0, 10.0, 1.0),
			Vec3d::new(f64::NAN, 50.0, 1.0),
			Vec3d::new(90.0, 10.0, 1.0),
		];
		let fill = compute_fill_scanlines(&polygon, [100, 100], &mut warnings);
		assert!(fill.scanlines.is_empty());
		assert_eq!(
			warnings,
			vec![
				RenderWarning::NanInputVertex { index: 1 },
				RenderWarning::NanScanlines { rows_skipped: 40 },
			]
		);
	}
}
