// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::LookupError;
use super::fields::FormField;
use serde::{Deserialize, Serialize};

/// The recognized options for the lookup form, as they appear in configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FormOptions {
	pub include_aura_effect: bool,
	pub include_enemy_type: bool,
}

/// A validated set of form options. Each variant has its own URL shape.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum FormVariant {
	/// `/auras/{account}/{character}`
	#[default]
	Minimal,
	/// `/auras/{account}/{character}/{aura_effect}`
	AuraEffectPath,
	/// `/auras/{account}/{character}?aura_effect={aura_effect}&enemy_type={enemy_type}`
	AuraEffectQuery,
}

impl FormVariant {
	/// The fields read for this variant, in the order they're interpolated into the URL.
	pub fn fields(&self) -> &'static [FormField] {
		match self {
			Self::Minimal => &[FormField::Account, FormField::Character],
			Self::AuraEffectPath => &[FormField::Account, FormField::Character, FormField::AuraEffect],
			Self::AuraEffectQuery => &[
				FormField::Account,
				FormField::Character,
				FormField::AuraEffect,
				FormField::EnemyType,
			],
		}
	}

	pub fn includes(&self, field: FormField) -> bool {
		self.fields().contains(&field)
	}
}

impl TryFrom<FormOptions> for FormVariant {
	type Error = LookupError;

	fn try_from(options: FormOptions) -> Result<Self, Self::Error> {
		match (options.include_aura_effect, options.include_enemy_type) {
			(false, false) => Ok(Self::Minimal),
			(true, false) => Ok(Self::AuraEffectPath),
			(true, true) => Ok(Self::AuraEffectQuery),
			(false, true) => Err(LookupError::UnsupportedVariant),
		}
	}
}
