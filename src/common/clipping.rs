use super::{camera::Camera, clipping_box::ClippingBox, math_types::*, viewport::Viewport};

// Line in Plucker coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PluckerLine
{
	pub direction: Vec3d,
	// Cross product of two line points.
	pub moment: Vec3d,
}

pub const DEFAULT_Z_NEAR: f64 = 1.0e-6;
pub const DEFAULT_Z_FAR: f64 = 1.0e6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrustumDepthRange
{
	pub z_near: f64,
	pub z_far: f64,
}

impl Default for FrustumDepthRange
{
	fn default() -> Self
	{
		Self {
			z_near: DEFAULT_Z_NEAR,
			z_far: DEFAULT_Z_FAR,
		}
	}
}

pub fn line_through_points(a: &Vec3d, b: &Vec3d) -> PluckerLine
{
	PluckerLine {
		direction: a - b,
		moment: a.cross(*b),
	}
}

// Points may lie at infinity (w = 0).
pub fn line_through_homogeneous_points(a: &Vec4d, b: &Vec4d) -> PluckerLine
{
	PluckerLine {
		direction: a.truncate() * b.w - b.truncate() * a.w,
		moment: a.truncate().cross(b.truncate()),
	}
}

// Result is homogeneous. "w" may be zero or almost zero if line is parallel to plane.
pub fn plane_line_intersection(line: &PluckerLine, plane: &Vec4d) -> Vec4d
{
	let plane_vec = plane.truncate();
	(line.moment.cross(plane_vec) - line.direction * plane.w).extend(plane_vec.dot(line.direction))
}

fn is_on_positive_side(point: &Vec3d, plane: &Vec4d) -> bool
{
	point.dot(plane.truncate()) + plane.w >= 0.0
}

// Keep part of convex polygon on positive side of plane.
// Result may be empty or contain one extra vertex for each clipped corner.
pub fn clip_polygon_by_plane(polygon: &[Vec3d], plane: &Vec4d) -> Vec<Vec3d>
{
	let n = polygon.len();
	let mut out_polygon = Vec::with_capacity(n + 2);

	// True if start of current edge was emitted as end of previous edge.
	let mut prev_positive = false;
	for i in 0 .. n
	{
		let a = &polygon[i];
		let b = &polygon[(i + 1) % n];
		let a_positive = is_on_positive_side(a, plane);
		let b_positive = is_on_positive_side(b, plane);
		if a_positive || b_positive
		{
			// Avoid intersection calculation for non-clipped edges.
			let intersection = if a_positive && b_positive
			{
				Vec3d::zero()
			}
			else
			{
				project_homogeneous(&plane_line_intersection(&line_through_points(a, b), plane))
			};

			if !a_positive
			{
				out_polygon.push(intersection);
			}
			else if !prev_positive
			{
				out_polygon.push(*a);
			}

			if !b_positive
			{
				out_polygon.push(intersection);
			}
			else if i + 1 < n
			{
				// Closing vertex is the first one, it is already emitted.
				out_polygon.push(*b);
			}
		}
		prev_positive = b_positive;
	}

	out_polygon
}

// Frustum planes in camera space. Point (u, v, w, 1) is inside if it is on positive side of all planes.
pub fn build_frustum_planes(viewport: &Viewport, depth_range: &FrustumDepthRange) -> [Vec4d; 6]
{
	let side_planes = ClippingBox::from_viewport(viewport).get_clip_planes();
	[
		Vec4d::new(0.0, 0.0, 1.0, -depth_range.z_near),
		Vec4d::new(0.0, 0.0, -1.0, depth_range.z_far),
		side_planes[0].extend(0.0),
		side_planes[1].extend(0.0),
		side_planes[2].extend(0.0),
		side_planes[3].extend(0.0),
	]
}

pub fn clip_polygon_to_frustum(
	polygon: &[Vec3d],
	camera: &Camera,
	viewport: &Viewport,
	depth_range: &FrustumDepthRange,
) -> Vec<Vec3d>
{
	// Planes are transformed from camera space into polygon space using transposed forward camera matrix.
	let planes_matrix = camera.get_homogeneous_matrix().transpose();

	let mut result = polygon.to_vec();
	for frustum_plane in &build_frustum_planes(viewport, depth_range)
	{
		if result.is_empty()
		{
			break;
		}
		result = clip_polygon_by_plane(&result, &(planes_matrix * *frustum_plane));
	}

	result
}
