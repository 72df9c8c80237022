#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport
{
	pub width: u32,
	pub height: u32,
}

impl Viewport
{
	pub fn new(width: u32, height: u32) -> Self
	{
		Self { width, height }
	}

	pub fn size(&self) -> [u32; 2]
	{
		[self.width, self.height]
	}
}
