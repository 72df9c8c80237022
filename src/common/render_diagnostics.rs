// Non-fatal problems found during rendering. Rendering continues after any of them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderWarning
{
	#[error("input vertex {index} has NaN coordinates")]
	NanInputVertex { index: usize },

	#[error("NaN coordinates were computed during polygon fill, {rows_skipped} rows skipped")]
	NanScanlines { rows_skipped: usize },

	#[error("negative depth {depth} at ({x}, {y}), which is not on the polygon boundary")]
	NegativeDepth { x: i32, y: i32, depth: f64 },

	#[error("{count} depth buffer values are infinite and so are all their diagonal neighbours")]
	UnresolvedDepthHoles { count: usize },
}

pub type RenderWarnings = Vec<RenderWarning>;

pub fn report_warning(warnings: &mut RenderWarnings, warning: RenderWarning)
{
	log::warn!("{}", warning);
	warnings.push(warning);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError
{
	#[error("renderer must be configured before rendering")]
	NotConfigured,
}
