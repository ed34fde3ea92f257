// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::LookupError;
use super::variant::FormVariant;
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FormField {
	Account,
	Character,
	AuraEffect,
	EnemyType,
}

impl FormField {
	/// The `name` attribute of the field's element
	pub fn name(&self) -> &'static str {
		match self {
			Self::Account => "account",
			Self::Character => "character",
			Self::AuraEffect => "aura_effect",
			Self::EnemyType => "enemy_type",
		}
	}

	/// Selector for the field's element inside the lookup form
	pub fn selector(&self) -> &'static str {
		match self {
			Self::Account => "input[name=account]",
			Self::Character => "input[name=character]",
			Self::AuraEffect => "input[name=aura_effect]",
			Self::EnemyType => "select[name=enemy_type]",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Account => "Account",
			Self::Character => "Character",
			Self::AuraEffect => "Aura effect",
			Self::EnemyType => "Enemy type",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// The options offered by the enemy type select.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnemyType {
	Regular,
	MapBoss,
	PinnacleBoss,
}

impl EnemyType {
	pub const ALL: [EnemyType; 3] = [Self::Regular, Self::MapBoss, Self::PinnacleBoss];

	pub fn value(&self) -> &'static str {
		match self {
			Self::Regular => "regular",
			Self::MapBoss => "map_boss",
			Self::PinnacleBoss => "pinnacle_boss",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Regular => "Regular enemy",
			Self::MapBoss => "Map boss",
			Self::PinnacleBoss => "Pinnacle boss",
		}
	}
}

/// Anything the lookup fields can be read from.
pub trait FieldSource {
	/// Returns the field's current value, or `None` if the field doesn't exist.
	fn field_value(&self, field: FormField) -> Option<String>;
}

impl FieldSource for HtmlFormElement {
	fn field_value(&self, field: FormField) -> Option<String> {
		let element = self.query_selector(field.selector()).ok().flatten()?;
		match field {
			FormField::EnemyType => element.dyn_into::<HtmlSelectElement>().ok().map(|select| select.value()),
			_ => element.dyn_into::<HtmlInputElement>().ok().map(|input| input.value()),
		}
	}
}

/// The values of a form submission, keyed by field in URL order.
///
/// Values are kept exactly as entered; nothing is trimmed or validated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormFieldSet {
	values: Vec<(FormField, String)>,
}

impl FormFieldSet {
	/// Reads every field the variant uses from the source. Stops at the first missing field.
	pub fn read(variant: FormVariant, source: &impl FieldSource) -> Result<Self, LookupError> {
		let values = variant
			.fields()
			.iter()
			.map(|field| {
				source
					.field_value(*field)
					.map(|value| (*field, value))
					.ok_or(LookupError::MissingField(*field))
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { values })
	}

	pub fn get(&self, field: FormField) -> Option<&str> {
		self.values
			.iter()
			.find(|(value_field, _)| *value_field == field)
			.map(|(_, value)| value.as_str())
	}

}

impl FromIterator<(FormField, String)> for FormFieldSet {
	fn from_iter<T: IntoIterator<Item = (FormField, String)>>(iter: T) -> Self {
		let mut values: Vec<(FormField, String)> = iter.into_iter().collect();
		values.sort_by_key(|(field, _)| *field);
		values.dedup_by_key(|(field, _)| *field);
		Self { values }
	}
}
