use super::{math_types::*, viewport::Viewport};

// Projective camera. Maps 3d point to homogeneous screen point (u, v, w), where "w" is depth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera
{
	rows: [Vec4d; 3],
}

impl Default for Camera
{
	fn default() -> Self
	{
		Self::from_intrinsics(1.0, Vec2d::zero())
	}
}

impl Camera
{
	pub fn from_rows(rows: [Vec4d; 3]) -> Self
	{
		Self { rows }
	}

	// Camera in origin, looking along +z, "K * [I | 0]".
	pub fn from_intrinsics(focal_length: f64, principal_point: Vec2d) -> Self
	{
		Self {
			rows: [
				Vec4d::new(focal_length, 0.0, principal_point.x, 0.0),
				Vec4d::new(0.0, focal_length, principal_point.y, 0.0),
				Vec4d::new(0.0, 0.0, 1.0, 0.0),
			],
		}
	}

	// World "z" is up. With zero angles camera looks along +y, image "y" grows downwards.
	pub fn from_view(position: Vec3d, azimuth: RadiansD, elevation: RadiansD, fov: RadiansD, viewport: &Viewport)
		-> Self
	{
		let rotate_z = Mat4d::from_angle_z(-azimuth);
		let rotate_x = Mat4d::from_angle_x(-elevation);

		let mut basis_change = Mat4d::identity();
		basis_change.y.y = 0.0;
		basis_change.z.y = -1.0;
		basis_change.y.z = 1.0;
		basis_change.z.z = 0.0;

		let translate = Mat4d::from_translation(-position);

		// Perform transformations in reverse order in order to perform transformation via "matrix * vector".
		let view_matrix = basis_change * rotate_x * rotate_z * translate;

		let viewport_width = viewport.width as f64;
		let viewport_height = viewport.height as f64;
		let focal_length = viewport_height * 0.5 / (fov * 0.5).tan();

		let depth_row = view_matrix.row(2);
		Self {
			rows: [
				view_matrix.row(0) * focal_length + depth_row * (viewport_width * 0.5),
				view_matrix.row(1) * focal_length + depth_row * (viewport_height * 0.5),
				depth_row,
			],
		}
	}

	pub fn get_rows(&self) -> &[Vec4d; 3]
	{
		&self.rows
	}

	pub fn get_depth_row(&self) -> Vec4d
	{
		self.rows[2]
	}

	// 4x4 extension with (0, 0, 0, 1) as last row.
	pub fn get_homogeneous_matrix(&self) -> Mat4d
	{
		Mat4d::from_cols(self.rows[0], self.rows[1], self.rows[2], Vec4d::unit_w()).transpose()
	}

	pub fn project(&self, point: &Vec3d) -> Vec3d
	{
		self.project_homogeneous(&point.extend(1.0))
	}

	pub fn project_homogeneous(&self, point: &Vec4d) -> Vec3d
	{
		Vec3d::new(
			self.rows[0].dot(*point),
			self.rows[1].dot(*point),
			self.rows[2].dot(*point),
		)
	}
}
