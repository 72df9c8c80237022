use super::math_types::*;

#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Plane
{
	pub vec: Vec3d, // Unnormalized direction
	pub dist: f64,  // for point on plane dot(vec, point) = dist
}

impl Plane
{
	// Supporting plane of triangle. Degenerate triangle gives zero plane.
	pub fn from_points(p: &Vec3d, q: &Vec3d, r: &Vec3d) -> Self
	{
		let vec = (p - q).cross(p - r);
		Plane {
			vec,
			dist: vec.dot(*p),
		}
	}

	// Plane "z = z0".
	pub fn horizontal(z0: f64) -> Self
	{
		Plane {
			vec: Vec3d::unit_z(),
			dist: z0,
		}
	}

	// Homogeneous form (a, b, c, d). Point is on positive side if a * x + b * y + c * z + d * w >= 0.
	pub fn get_equation(&self) -> Vec4d
	{
		self.vec.extend(-self.dist)
	}
}
