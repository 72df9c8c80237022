use super::{math_types::*, viewport::Viewport};

// Screen-space axis-aligned box. Produces clip lines for homogeneous image points.
#[derive(Copy, Clone, Default, Debug)]
pub struct ClippingBox
{
	x: ClipAxis,
	y: ClipAxis,
}

// Left, right, top, bottom.
pub type ClippingBoxPlanes = [Vec3d; 4];

impl ClippingBox
{
	pub fn from_box(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self
	{
		Self {
			x: ClipAxis { min: min_x, max: max_x },
			y: ClipAxis { min: min_y, max: max_y },
		}
	}

	pub fn from_viewport(viewport: &Viewport) -> Self
	{
		Self::from_box(0.0, 0.0, viewport.width as f64, viewport.height as f64)
	}

	pub fn is_valid_and_non_empty(&self) -> bool
	{
		self.x.is_valid_and_non_empty() && self.y.is_valid_and_non_empty()
	}

	// Point (u, v, w) is inside if dot(line, point) >= 0 for all lines.
	// Lines are written for "w" multiplied form, so points with any positive "w" may be checked.
	pub fn get_clip_planes(&self) -> ClippingBoxPlanes
	{
		[
			Vec3d::new(1.0, 0.0, -self.x.min),
			Vec3d::new(-1.0, 0.0, self.x.max),
			Vec3d::new(0.0, 1.0, -self.y.min),
			Vec3d::new(0.0, -1.0, self.y.max),
		]
	}
}

#[derive(Copy, Clone, Default, Debug)]
struct ClipAxis
{
	min: f64,
	max: f64,
}

impl ClipAxis
{
	fn is_valid_and_non_empty(&self) -> bool
	{
		self.min < self.max
	}
}
