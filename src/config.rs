// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::lookup::{FormOptions, FormVariant};
use kdl::{KdlDocument, KdlNode, KdlValue};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let web = document
		.get("web")
		.and_then(KdlNode::children)
		.ok_or_else(|| miette!("The config is missing the `web` block"))?;
	let bind_addr = web
		.get_arg("bind_addr")
		.and_then(KdlValue::as_string)
		.ok_or_else(|| miette!("The `web` block must set `bind_addr` to a string"))?
		.to_string();

	let form_options = match document.get("form").and_then(KdlNode::children) {
		Some(form) => FormOptions {
			include_aura_effect: parse_flag(form, "include_aura_effect")?,
			include_enemy_type: parse_flag(form, "include_enemy_type")?,
		},
		None => FormOptions::default(),
	};
	let form = FormVariant::try_from(form_options)?;

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		form,
	})
}

/// Reads a boolean option. Options that aren't set are off.
fn parse_flag(block: &KdlDocument, name: &str) -> Result<bool> {
	match block.get_arg(name) {
		Some(value) => value
			.as_bool()
			.ok_or_else(|| miette!("`{}` must be #true or #false", name)),
		None => Ok(false),
	}
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub form: FormVariant,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}
