// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::fields::FormField;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[cfg_attr(feature = "ssr", derive(miette::Diagnostic))]
pub enum LookupError {
	#[error("the lookup form has no `{0}` field")]
	#[cfg_attr(feature = "ssr", diagnostic(code(poecalc::lookup::missing_field)))]
	MissingField(FormField),
	#[error("`include_enemy_type` requires `include_aura_effect`")]
	#[cfg_attr(
		feature = "ssr",
		diagnostic(
			code(poecalc::lookup::unsupported_variant),
			help("enable `include_aura_effect` or disable `include_enemy_type`")
		)
	)]
	UnsupportedVariant,
	#[error("the browser rejected navigation to {destination}: {reason}")]
	#[cfg_attr(feature = "ssr", diagnostic(code(poecalc::lookup::navigation)))]
	Navigation { destination: String, reason: String },
}
