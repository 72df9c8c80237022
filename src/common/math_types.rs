pub type Vec2d = cgmath::Vector2<f64>;
pub type Vec3d = cgmath::Vector3<f64>;
pub type Vec4d = cgmath::Vector4<f64>;
pub type Mat4d = cgmath::Matrix4<f64>;
pub type RadiansD = cgmath::Rad<f64>;

pub use cgmath::{Angle, Deg, InnerSpace, Matrix, Rad, SquareMatrix, Zero};

// Divide homogeneous point by its last component.
pub fn project_homogeneous(v: &Vec4d) -> Vec3d
{
	v.truncate() / v.w
}

pub fn project_homogeneous_2d(v: &Vec3d) -> Vec2d
{
	v.truncate() / v.z
}

pub fn vec4_has_nan(v: &Vec4d) -> bool
{
	v.x.is_nan() || v.y.is_nan() || v.z.is_nan() || v.w.is_nan()
}

pub fn vec3_has_nan(v: &Vec3d) -> bool
{
	v.x.is_nan() || v.y.is_nan() || v.z.is_nan()
}
