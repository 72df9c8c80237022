mod config;
mod scene;

use anyhow::Context;
use common::{image_buffer::*, label_renderer::LabelRenderer, renderer_config::RendererConfig, viewport::Viewport};
use std::{collections::BTreeMap, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "scene_renderer", about = "Renders label and depth images of a triangle scene.")]
struct Opt
{
	/// Input scene file
	#[structopt(parse(from_os_str), short = "i", long = "input", required(true))]
	input: PathBuf,

	/// Application config file. Renderer settings are read from "renderer" key
	#[structopt(parse(from_os_str), short = "c", long = "config")]
	config: Option<PathBuf>,

	/// Output JSON file for framebuffer and depthbuffer
	#[structopt(parse(from_os_str), short = "o", long = "output")]
	output: Option<PathBuf>,

	/// Fill infinite depths using neighbour pixels after rendering
	#[structopt(long = "smooth")]
	smooth: bool,
}

#[derive(serde::Serialize)]
struct BuffersDump<'a>
{
	viewport: Viewport,
	framebuffer: &'a FrameBuffer,
	// Non-finite values are written as null.
	depthbuffer: &'a DepthBuffer,
}

fn main() -> anyhow::Result<()>
{
	env_logger::init();
	let opt = Opt::from_args();

	let app_config = if let Some(config_path) = &opt.config
	{
		config::load_or_empty(config_path)?
	}
	else
	{
		serde_json::Value::Null
	};
	let renderer_config = RendererConfig::from_app_config(&app_config);
	log::debug!("Renderer config: {:?}", renderer_config);

	println!("Input file: {:?}", opt.input);
	let scene = scene::Scene::load(&opt.input)?;

	let mut renderer = LabelRenderer::new(renderer_config);
	renderer.configure(scene.build_camera(), scene.get_viewport());
	renderer.clear(scene.background);

	for plane in &scene.infinite_planes
	{
		renderer.render_infinite_plane(plane.z, plane.label)?;
	}

	let mut triangles_affected = 0;
	for triangle in &scene.triangles
	{
		let [p, q, r] = triangle.get_vertices();
		if renderer.render_triangle(&p, &q, &r, triangle.label)?
		{
			triangles_affected += 1;
		}
	}
	println!(
		"Triangles rendered: {}, visible: {}",
		scene.triangles.len(),
		triangles_affected
	);

	if opt.smooth
	{
		let holes = renderer.smooth_infinite_depths();
		println!("Infinite depth pixels: {}", holes);
	}

	let warnings = renderer.take_warnings();
	if !warnings.is_empty()
	{
		println!("Warnings: {}", warnings.len());
	}

	for (label, count) in count_labels(renderer.get_framebuffer())
	{
		println!("Label {}: {} pixels", label, count);
	}

	if let Some(output_path) = &opt.output
	{
		let dump = BuffersDump {
			viewport: scene.get_viewport(),
			framebuffer: renderer.get_framebuffer(),
			depthbuffer: renderer.get_depthbuffer(),
		};
		let file = std::fs::File::create(output_path)
			.with_context(|| format!("Failed to create output file {:?}", output_path))?;
		serde_json::to_writer(std::io::BufWriter::new(file), &dump)
			.with_context(|| format!("Failed to write output file {:?}", output_path))?;
	}

	Ok(())
}

fn count_labels(framebuffer: &FrameBuffer) -> BTreeMap<Label, usize>
{
	let mut counts = BTreeMap::new();
	for &label in framebuffer.get_pixels()
	{
		*counts.entry(label).or_insert(0) += 1;
	}
	counts
}
