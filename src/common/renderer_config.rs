use super::{clipping::*, image_buffer::Label};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct RendererConfig
{
	// Points closer than this are clipped.
	#[serde(default = "z_near_default")]
	pub z_near: f64,

	#[serde(default = "z_far_default")]
	pub z_far: f64,

	// Max depth written by infinite plane rendering. Greater depths are treated as holes by depth smoothing.
	#[serde(default = "clamp_depth_default")]
	pub clamp_depth: f64,

	// Used for buffers clearing in "configure".
	#[serde(default)]
	pub background_label: Label,
}

impl Default for RendererConfig
{
	fn default() -> Self
	{
		Self {
			z_near: z_near_default(),
			z_far: z_far_default(),
			clamp_depth: clamp_depth_default(),
			background_label: 0,
		}
	}
}

impl RendererConfig
{
	pub fn from_app_config(app_config: &serde_json::Value) -> Self
	{
		serde_json::from_value(app_config["renderer"].clone()).unwrap_or_default()
	}

	pub fn get_depth_range(&self) -> FrustumDepthRange
	{
		FrustumDepthRange {
			z_near: self.z_near,
			z_far: self.z_far,
		}
	}
}

fn z_near_default() -> f64
{
	DEFAULT_Z_NEAR
}

fn z_far_default() -> f64
{
	DEFAULT_Z_FAR
}

fn clamp_depth_default() -> f64
{
	1.0e6
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn missing_fields_use_defaults()
	{
		let app_config = serde_json::json!({ "renderer": { "clamp_depth": 500.0, "background_label": -1 } });
		let config = RendererConfig::from_app_config(&app_config);
		assert_eq!(config.clamp_depth, 500.0);
		assert_eq!(config.background_label, -1);
		assert_eq!(config.z_near, DEFAULT_Z_NEAR);
		assert_eq!(config.z_far, DEFAULT_Z_FAR);
	}

	#[test]
	fn invalid_config_falls_back_to_default()
	{
		assert_eq!(RendererConfig::from_app_config(&serde_json::json!({})), RendererConfig::default());
		assert_eq!(
			RendererConfig::from_app_config(&serde_json::json!({ "renderer": { "z_near": "close" } })),
			RendererConfig::default()
		);
	}
}
