// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::fields::{FormField, FormFieldSet};
use super::variant::FormVariant;
use std::fmt;
use urlencoding::encode;

/// Where a lookup submission sends the browser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavigationTarget(String);

impl NavigationTarget {
	/// Builds the URL for the variant from the submitted values.
	///
	/// Every value is percent-encoded as a URL component, so a `/` or `&` in a name stays part of that name instead
	/// of splitting the route. A field missing from the set is treated as empty.
	pub fn build(variant: FormVariant, fields: &FormFieldSet) -> Self {
		let component = |field: FormField| encode(fields.get(field).unwrap_or_default()).into_owned();

		let account = component(FormField::Account);
		let character = component(FormField::Character);
		let target = match variant {
			FormVariant::Minimal => format!("/auras/{}/{}", account, character),
			FormVariant::AuraEffectPath => format!(
				"/auras/{}/{}/{}",
				account,
				character,
				component(FormField::AuraEffect)
			),
			FormVariant::AuraEffectQuery => format!(
				"/auras/{}/{}?aura_effect={}&enemy_type={}",
				account,
				character,
				component(FormField::AuraEffect),
				component(FormField::EnemyType)
			),
		};

		Self(target)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NavigationTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn field_set(values: &[(FormField, &str)]) -> FormFieldSet {
		values.iter().map(|(field, value)| (*field, value.to_string())).collect()
	}

	#[test]
	fn query_variant() {
		let fields = field_set(&[
			(FormField::Account, "abc"),
			(FormField::Character, "Xyz"),
			(FormField::AuraEffect, "fire"),
			(FormField::EnemyType, "undead"),
		]);
		assert_eq!(
			NavigationTarget::build(FormVariant::AuraEffectQuery, &fields).as_str(),
			"/auras/abc/Xyz?aura_effect=fire&enemy_type=undead"
		);
	}

	#[test]
	fn path_variant() {
		let fields = field_set(&[
			(FormField::Account, "abc"),
			(FormField::Character, "Xyz"),
			(FormField::AuraEffect, "fire"),
		]);
		assert_eq!(
			NavigationTarget::build(FormVariant::AuraEffectPath, &fields).as_str(),
			"/auras/abc/Xyz/fire"
		);
	}

	#[test]
	fn minimal_variant() {
		let fields = field_set(&[(FormField::Account, "abc"), (FormField::Character, "Xyz")]);
		assert_eq!(NavigationTarget::build(FormVariant::Minimal, &fields).as_str(), "/auras/abc/Xyz");
	}

	#[test]
	fn unreserved_characters_pass_through() {
		let fields = field_set(&[
			(FormField::Account, "Some_Account-1.0~"),
			(FormField::Character, "RayluLoop"),
		]);
		assert_eq!(
			NavigationTarget::build(FormVariant::Minimal, &fields).as_str(),
			"/auras/Some_Account-1.0~/RayluLoop"
		);
	}

	#[test]
	fn reserved_characters_are_encoded() {
		let fields = field_set(&[
			(FormField::Account, "a/b"),
			(FormField::Character, "x&y z"),
			(FormField::AuraEffect, "50%?#"),
			(FormField::EnemyType, "map_boss&extra=1"),
		]);
		assert_eq!(
			NavigationTarget::build(FormVariant::AuraEffectQuery, &fields).as_str(),
			"/auras/a%2Fb/x%26y%20z?aura_effect=50%25%3F%23&enemy_type=map_boss%26extra%3D1"
		);
	}

	#[test]
	fn non_ascii_is_encoded_as_utf8() {
		let fields = field_set(&[(FormField::Account, "ä"), (FormField::Character, "Xyz")]);
		assert_eq!(NavigationTarget::build(FormVariant::Minimal, &fields).as_str(), "/auras/%C3%A4/Xyz");
	}

	#[test]
	fn empty_values_leave_empty_segments() {
		let fields = field_set(&[(FormField::Account, ""), (FormField::Character, "")]);
		assert_eq!(NavigationTarget::build(FormVariant::Minimal, &fields).as_str(), "/auras//");

		let fields = field_set(&[
			(FormField::Account, ""),
			(FormField::Character, ""),
			(FormField::AuraEffect, ""),
			(FormField::EnemyType, ""),
		]);
		assert_eq!(
			NavigationTarget::build(FormVariant::AuraEffectQuery, &fields).as_str(),
			"/auras//?aura_effect=&enemy_type="
		);
	}
}
