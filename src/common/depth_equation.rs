use super::{camera::Camera, linear_solver::*, math_types::*};

// Screen-space depth equation. Inverse depth is linear in screen coordinates:
// 1 / z = d_inv_z_dx * x + d_inv_z_dy * y + k
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DepthEquation
{
	pub d_inv_z_dx: f64,
	pub d_inv_z_dy: f64,
	pub k: f64,
}

impl DepthEquation
{
	// Plane is given in homogeneous form, point "p" is on its positive side if dot(plane, (p, 1)) >= 0.
	pub fn from_camera_and_plane<S: LinearSolver>(solver: &S, camera: &Camera, plane: &Vec4d) -> Self
	{
		let m = build_camera_plane_matrix(camera, plane);

		// Find points on plane projected to pixels (1, 0), (0, 1), (0, 0).
		let [point_x, point_y, point_zero] = solver.solve_systems(
			&m,
			[
				Vec4d::new(1.0, 0.0, 1.0, 0.0),
				Vec4d::new(0.0, 1.0, 1.0, 0.0),
				Vec4d::new(0.0, 0.0, 1.0, 0.0),
			],
		);

		let depth_row = camera.get_depth_row();
		let inv_z_x = 1.0 / get_point_depth(&depth_row, &point_x);
		let inv_z_y = 1.0 / get_point_depth(&depth_row, &point_y);
		let inv_z_zero = 1.0 / get_point_depth(&depth_row, &point_zero);

		Self {
			d_inv_z_dx: inv_z_x - inv_z_zero,
			d_inv_z_dy: inv_z_y - inv_z_zero,
			k: inv_z_zero,
		}
	}

	pub fn sample_point(&self, point: &Vec2d) -> f64
	{
		self.d_inv_z_dx * point.x + self.d_inv_z_dy * point.y + self.k
	}

	// Inverse depth at row start. Add "d_inv_z_dx" for each next pixel.
	pub fn sample_row_start(&self, y: f64) -> f64
	{
		self.d_inv_z_dy * y + self.k
	}

	pub fn evaluate_depth(&self, point: &Vec2d) -> f64
	{
		1.0 / self.sample_point(point)
	}
}

// Depth of plane point visible in given homogeneous pixel.
// Solves the whole system, so it is slower than depth equation for many pixels.
pub fn get_plane_depth<S: LinearSolver>(solver: &S, pixel: &Vec3d, camera: &Camera, plane: &Vec4d) -> f64
{
	let m = build_camera_plane_matrix(camera, plane);
	let point = solver.solve(&m, pixel.extend(0.0));
	get_point_depth(&camera.get_depth_row(), &point)
}

// Stack camera rows and plane into single matrix.
fn build_camera_plane_matrix(camera: &Camera, plane: &Vec4d) -> Mat4d
{
	let rows = camera.get_rows();
	Mat4d::from_cols(rows[0], rows[1], rows[2], *plane).transpose()
}

fn get_point_depth(depth_row: &Vec4d, point: &Vec4d) -> f64
{
	depth_row.dot(*point / point.w)
}
