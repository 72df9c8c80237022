use anyhow::Context;

/// Reads application config JSON. Missing file yields empty config, so all settings take defaults.
pub fn load_or_empty(file_path: &std::path::Path) -> anyhow::Result<serde_json::Value>
{
	if !file_path.exists()
	{
		log::warn!("Config file {:?} not found, using defaults", file_path);
		return Ok(serde_json::Value::Null);
	}

	let file_contents =
		std::fs::read_to_string(file_path).with_context(|| format!("Failed to read config {:?}", file_path))?;
	serde_json::from_str(&file_contents).with_context(|| format!("Failed to parse config {:?}", file_path))
}
