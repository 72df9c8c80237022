// Row-major 2d grid of pixels.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageBuffer<T>
{
	pub size: [u32; 2],
	pub pixels: Vec<T>,
}

pub type Label = i32;
pub type FrameBuffer = ImageBuffer<Label>;
pub type DepthBuffer = ImageBuffer<f64>;

impl<T: Copy> ImageBuffer<T>
{
	pub fn new(size: [u32; 2], value: T) -> Self
	{
		Self {
			size,
			pixels: vec![value; (size[0] as usize) * (size[1] as usize)],
		}
	}

	pub fn get_size(&self) -> [u32; 2]
	{
		self.size
	}

	pub fn get_pixels(&self) -> &[T]
	{
		&self.pixels
	}

	pub fn fill(&mut self, value: T)
	{
		self.pixels.fill(value);
	}

	pub fn get(&self, x: u32, y: u32) -> Option<T>
	{
		if x < self.size[0] && y < self.size[1]
		{
			Some(self.pixels[self.get_index(x, y)])
		}
		else
		{
			None
		}
	}

	pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut T>
	{
		if x < self.size[0] && y < self.size[1]
		{
			let index = self.get_index(x, y);
			Some(&mut self.pixels[index])
		}
		else
		{
			None
		}
	}

	pub fn row(&self, y: u32) -> &[T]
	{
		let start = (y as usize) * (self.size[0] as usize);
		&self.pixels[start .. start + self.size[0] as usize]
	}

	pub fn row_mut(&mut self, y: u32) -> &mut [T]
	{
		let start = (y as usize) * (self.size[0] as usize);
		&mut self.pixels[start .. start + self.size[0] as usize]
	}

	fn get_index(&self, x: u32, y: u32) -> usize
	{
		(y as usize) * (self.size[0] as usize) + (x as usize)
	}
}
