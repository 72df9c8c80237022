use anyhow::Context;
use common::{camera::Camera, image_buffer::Label, math_types::*, viewport::Viewport};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Scene
{
	pub viewport: [u32; 2],
	pub camera: SceneCamera,

	#[serde(default)]
	pub background: Label,

	#[serde(default)]
	pub infinite_planes: Vec<InfinitePlane>,

	#[serde(default)]
	pub triangles: Vec<Triangle>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum SceneCamera
{
	// Rows of 3x4 projection matrix.
	Matrix([[f64; 4]; 3]),
	View(ViewParams),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ViewParams
{
	pub position: [f64; 3],

	#[serde(default)]
	pub azimuth_deg: f64,

	#[serde(default)]
	pub elevation_deg: f64,

	#[serde(default = "fov_deg_default")]
	pub fov_deg: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InfinitePlane
{
	pub z: f64,
	pub label: Label,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Triangle
{
	pub vertices: [[f64; 3]; 3],
	pub label: Label,
}

impl Scene
{
	pub fn load(file_path: &std::path::Path) -> anyhow::Result<Self>
	{
		let file_contents = std::fs::read_to_string(file_path)
			.with_context(|| format!("Failed to read scene file {:?}", file_path))?;
		serde_json::from_str(&file_contents).with_context(|| format!("Failed to parse scene file {:?}", file_path))
	}

	pub fn get_viewport(&self) -> Viewport
	{
		Viewport::new(self.viewport[0], self.viewport[1])
	}

	pub fn build_camera(&self) -> Camera
	{
		match &self.camera
		{
			SceneCamera::Matrix(rows) => Camera::from_rows(rows.map(Vec4d::from)),
			SceneCamera::View(view) => Camera::from_view(
				Vec3d::from(view.position),
				Rad::from(Deg(view.azimuth_deg)),
				Rad::from(Deg(view.elevation_deg)),
				Rad::from(Deg(view.fov_deg)),
				&self.get_viewport(),
			),
		}
	}
}

impl Triangle
{
	pub fn get_vertices(&self) -> [Vec3d; 3]
	{
		self.vertices.map(Vec3d::from)
	}
}

fn fov_deg_default() -> f64
{
	90.0
}
