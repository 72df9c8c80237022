use super::math_types::*;

// Solver for 4x4 linear systems "matrix * x = b".
// Several right sides share one matrix, so implementations may decompose it only once.
pub trait LinearSolver
{
	fn solve_systems<const N: usize>(&self, matrix: &Mat4d, right_sides: [Vec4d; N]) -> [Vec4d; N];

	fn solve(&self, matrix: &Mat4d, right_side: Vec4d) -> Vec4d
	{
		let [result] = self.solve_systems(matrix, [right_side]);
		result
	}
}

// Least-squares minimum-norm solver based on singular value decomposition.
// Works for rank-deficient matrices (plane passing through camera center, for example).
#[derive(Debug, Default, Copy, Clone)]
pub struct SvdSolver;

impl LinearSolver for SvdSolver
{
	fn solve_systems<const N: usize>(&self, matrix: &Mat4d, right_sides: [Vec4d; N]) -> [Vec4d; N]
	{
		// "cgmath" indexing is [column][row].
		let m = nalgebra::Matrix4::<f64>::from_fn(|row, column| matrix[column][row]);
		let svd = m.svd(true, true);

		// Same threshold as used by common SVD implementations - precision * size * max singular value.
		let eps = f64::EPSILON * 4.0 * svd.singular_values.max();

		right_sides.map(|b| {
			match svd.solve(&nalgebra::Vector4::new(b.x, b.y, b.z, b.w), eps)
			{
				Ok(x) => Vec4d::new(x[0], x[1], x[2], x[3]),
				// Possible only if U or V are not computed.
				Err(_) => nan_vec4(),
			}
		})
	}
}

// Solver based on matrix inversion. Cheap, but fails for singular matrices.
#[derive(Debug, Default, Copy, Clone)]
pub struct InverseSolver;

impl LinearSolver for InverseSolver
{
	fn solve_systems<const N: usize>(&self, matrix: &Mat4d, right_sides: [Vec4d; N]) -> [Vec4d; N]
	{
		if let Some(inverse) = matrix.invert()
		{
			right_sides.map(|b| inverse * b)
		}
		else
		{
			[nan_vec4(); N]
		}
	}
}

fn nan_vec4() -> Vec4d
{
	Vec4d::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
}
