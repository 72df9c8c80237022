use super::{
	camera::Camera, clipping::*, clipping_box::ClippingBox, depth_equation::*, image_buffer::*, linear_solver::*,
	math_types::*, plane::Plane, render_diagnostics::*, renderer_config::RendererConfig, scanlines::*,
	viewport::Viewport,
};

// Z-buffered renderer of labeled polygons.
// Must be configured with camera and viewport before rendering.
pub struct LabelRenderer<S: LinearSolver = SvdSolver>
{
	config: RendererConfig,
	solver: S,
	camera: Camera,
	// None until "configure" is called.
	viewport: Option<Viewport>,
	framebuffer: FrameBuffer,
	depthbuffer: DepthBuffer,
	warnings: RenderWarnings,
}

impl LabelRenderer<SvdSolver>
{
	pub fn new(config: RendererConfig) -> Self
	{
		Self::with_solver(config, SvdSolver)
	}
}

impl<S: LinearSolver> LabelRenderer<S>
{
	pub fn with_solver(config: RendererConfig, solver: S) -> Self
	{
		Self {
			config,
			solver,
			camera: Camera::default(),
			viewport: None,
			framebuffer: FrameBuffer::default(),
			depthbuffer: DepthBuffer::default(),
			warnings: RenderWarnings::new(),
		}
	}

	// Set camera, reallocate and clear buffers. May be called many times.
	pub fn configure(&mut self, camera: Camera, viewport: Viewport)
	{
		if !ClippingBox::from_viewport(&viewport).is_valid_and_non_empty()
		{
			log::warn!("Empty viewport {}x{}", viewport.width, viewport.height);
		}

		self.camera = camera;
		self.viewport = Some(viewport);
		self.framebuffer = FrameBuffer::new(viewport.size(), self.config.background_label);
		self.depthbuffer = DepthBuffer::new(viewport.size(), f64::INFINITY);
	}

	pub fn clear(&mut self, background: Label)
	{
		self.framebuffer.fill(background);
		self.depthbuffer.fill(f64::INFINITY);
	}

	// Render screen-space triangle, lifted to 3d with z = 1.
	pub fn render_triangle_2d(&mut self, p: &Vec2d, q: &Vec2d, r: &Vec2d, label: Label) -> Result<bool, RenderError>
	{
		self.render_triangle(&p.extend(1.0), &q.extend(1.0), &r.extend(1.0), label)
	}

	// Returns true if at least one pixel was updated.
	pub fn render_triangle(&mut self, p: &Vec3d, q: &Vec3d, r: &Vec3d, label: Label) -> Result<bool, RenderError>
	{
		let viewport = self.get_configured_viewport()?;

		let clipped = clip_polygon_to_frustum(&[*p, *q, *r], &self.camera, &viewport, &self.config.get_depth_range());
		let projected: Vec<Vec3d> = clipped.iter().map(|v| self.camera.project(v)).collect();

		let fill = compute_fill_scanlines(&projected, viewport.size(), &mut self.warnings);
		log::debug!(
			"Triangle with label {}: {} vertices after clipping, {} scanlines",
			label,
			clipped.len(),
			fill.scanlines.len()
		);
		if fill.scanlines.is_empty()
		{
			return Ok(false);
		}

		// Use plane of unclipped triangle, clipped vertices are less precise.
		let plane = Plane::from_points(p, q, r).get_equation();
		let depth_equation = DepthEquation::from_camera_and_plane(&self.solver, &self.camera, &plane);

		let mut affected = false;
		let last_scanline_index = fill.scanlines.len() - 1;
		for (scanline_index, scanline) in fill.scanlines.iter().enumerate()
		{
			let depth_row = self.depthbuffer.row_mut(scanline.y as u32);
			let label_row = self.framebuffer.row_mut(scanline.y as u32);

			// Inverse depth is linear along row.
			let mut inv_z = depth_equation.sample_row_start(scanline.y as f64) +
				depth_equation.d_inv_z_dx * (scanline.x_min as f64);
			for x in scanline.x_min ..= scanline.x_max
			{
				let depth = 1.0 / inv_z;
				inv_z += depth_equation.d_inv_z_dx;

				if depth < 0.0
				{
					// This can happen when a surface is almost edge-on to the camera.
					// Boundary pixels of such surface may get bogus depth. It is safe to ignore them,
					// since surface behind will provide depth for them.
					if is_interior_pixel(x, scanline, scanline_index, last_scanline_index)
					{
						report_warning(
							&mut self.warnings,
							RenderWarning::NegativeDepth {
								x,
								y: scanline.y,
								depth,
							},
						);
					}
				}
				else if depth > 0.0 && depth < depth_row[x as usize]
				{
					depth_row[x as usize] = depth;
					label_row[x as usize] = label;
					affected = true;
				}
			}
		}

		Ok(affected)
	}

	// Render infinite plane "z = z0" over whole viewport, without depth test.
	// Returns true if at least one pixel was written.
	pub fn render_infinite_plane(&mut self, z0: f64, label: Label) -> Result<bool, RenderError>
	{
		let viewport = self.get_configured_viewport()?;

		let plane = Plane::horizontal(z0).get_equation();
		let depth_equation = DepthEquation::from_camera_and_plane(&self.solver, &self.camera, &plane);

		let mut affected = false;
		for y in 0 .. viewport.height
		{
			let depth_row = self.depthbuffer.row_mut(y);
			let label_row = self.framebuffer.row_mut(y);
			for x in 0 .. viewport.width
			{
				let depth = depth_equation.evaluate_depth(&Vec2d::new(x as f64, y as f64));
				if depth > 0.0
				{
					label_row[x as usize] = label;
					depth_row[x as usize] = depth.min(self.config.clamp_depth);
					affected = true;
				}
			}
		}

		Ok(affected)
	}

	// Replace non-finite or too large depths with depth of one of diagonal neighbours.
	// Returns number of such pixels, including pixels which were not fixed.
	pub fn smooth_infinite_depths(&mut self) -> usize
	{
		let clamp_depth = self.config.clamp_depth;
		let [width, height] = self.depthbuffer.get_size();

		let mut holes_count = 0;
		let mut unresolved_count = 0;
		for y in 0 .. height
		{
			for x in 0 .. width
			{
				let index = (y as usize) * (width as usize) + (x as usize);
				let depth = self.depthbuffer.pixels[index];
				if depth.is_finite() && depth <= clamp_depth
				{
					continue;
				}
				holes_count += 1;

				if let Some(neighbour_depth) = self.find_diagonal_neighbour_depth(x, y)
				{
					self.depthbuffer.pixels[index] = neighbour_depth;
				}
				else
				{
					// TODO - walk towards image center until valid value is found.
					unresolved_count += 1;
				}
			}
		}

		if unresolved_count > 0
		{
			report_warning(
				&mut self.warnings,
				RenderWarning::UnresolvedDepthHoles {
					count: unresolved_count,
				},
			);
		}

		holes_count
	}

	fn find_diagonal_neighbour_depth(&self, x: u32, y: u32) -> Option<f64>
	{
		for dy in [-1, 1]
		{
			for dx in [-1, 1]
			{
				let neighbour_x = x as i64 + dx;
				let neighbour_y = y as i64 + dy;
				if neighbour_x < 0 || neighbour_y < 0
				{
					continue;
				}
				if let Some(depth) = self.depthbuffer.get(neighbour_x as u32, neighbour_y as u32)
				{
					if depth.is_finite() && depth < self.config.clamp_depth
					{
						return Some(depth);
					}
				}
			}
		}

		None
	}

	fn get_configured_viewport(&self) -> Result<Viewport, RenderError>
	{
		self.viewport.ok_or_else(|| {
			log::error!("Renderer must be configured before rendering");
			RenderError::NotConfigured
		})
	}

	pub fn get_framebuffer(&self) -> &FrameBuffer
	{
		&self.framebuffer
	}

	pub fn get_depthbuffer(&self) -> &DepthBuffer
	{
		&self.depthbuffer
	}

	pub fn get_camera(&self) -> &Camera
	{
		&self.camera
	}

	pub fn get_viewport(&self) -> Option<Viewport>
	{
		self.viewport
	}

	pub fn get_config(&self) -> &RendererConfig
	{
		&self.config
	}

	pub fn get_warnings(&self) -> &[RenderWarning]
	{
		&self.warnings
	}

	pub fn take_warnings(&mut self) -> RenderWarnings
	{
		std::mem::take(&mut self.warnings)
	}
}

// Pixel is interior if it is neither first nor last in its span and its span is neither first nor last.
fn is_interior_pixel(x: i32, scanline: &Scanline, scanline_index: usize, last_scanline_index: usize) -> bool
{
	x != scanline.x_min && x != scanline.x_max && scanline_index != 0 && scanline_index != last_scanline_index
}
