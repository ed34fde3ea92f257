// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::LookupError;
use super::fields::{FieldSource, FormFieldSet};
use super::target::NavigationTarget;
use super::variant::FormVariant;
use web_sys::{Location, SubmitEvent};

/// The default action of a submit event
pub trait SubmitControl {
	fn prevent_default(&self);
}

impl SubmitControl for SubmitEvent {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}

/// Performs a full page navigation
pub trait Navigator {
	fn navigate(&self, target: &NavigationTarget) -> Result<(), LookupError>;
}

impl Navigator for Location {
	fn navigate(&self, target: &NavigationTarget) -> Result<(), LookupError> {
		self.set_href(target.as_str()).map_err(|error| LookupError::Navigation {
			destination: target.to_string(),
			reason: format!("{:?}", error),
		})
	}
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum InterceptorState {
	#[default]
	Idle,
	/// A navigation was started. The page is about to unload, so there's no way back to `Idle`.
	Navigating(NavigationTarget),
}

/// Replaces the browser's submission of the lookup form with navigation to the lookup URL.
#[derive(Clone, Debug)]
pub struct FormInterceptor {
	variant: FormVariant,
	state: InterceptorState,
}

impl FormInterceptor {
	pub fn new(variant: FormVariant) -> Self {
		Self {
			variant,
			state: InterceptorState::Idle,
		}
	}

	pub fn state(&self) -> &InterceptorState {
		&self.state
	}

	/// Handles one submission of the form.
	///
	/// The default action is always prevented, even if reading the fields fails afterward. On failure nothing is
	/// navigated and the state is left as it was.
	pub fn submit(
		&mut self,
		event: &impl SubmitControl,
		source: &impl FieldSource,
		navigator: &impl Navigator,
	) -> Result<NavigationTarget, LookupError> {
		event.prevent_default();

		let fields = FormFieldSet::read(self.variant, source)?;
		let target = NavigationTarget::build(self.variant, &fields);

		navigator.navigate(&target)?;
		tracing::debug!(destination = %target, "Navigating to aura lookup");

		self.state = InterceptorState::Navigating(target.clone());
		Ok(target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lookup::FormField;
	use pretty_assertions::assert_eq;
	use std::cell::{Cell, RefCell};
	use std::collections::HashMap;

	#[derive(Default)]
	struct TestEvent {
		default_prevented: Cell<bool>,
	}

	impl SubmitControl for TestEvent {
		fn prevent_default(&self) {
			self.default_prevented.set(true);
		}
	}

	#[derive(Default)]
	struct TestNavigator {
		visited: RefCell<Vec<String>>,
		reject: bool,
	}

	impl Navigator for TestNavigator {
		fn navigate(&self, target: &NavigationTarget) -> Result<(), LookupError> {
			if self.reject {
				return Err(LookupError::Navigation {
					destination: target.to_string(),
					reason: String::from("blocked"),
				});
			}
			self.visited.borrow_mut().push(target.to_string());
			Ok(())
		}
	}

	struct TestForm(HashMap<FormField, String>);

	impl TestForm {
		fn new(values: &[(FormField, &str)]) -> Self {
			Self(
				values
					.iter()
					.map(|(field, value)| (*field, value.to_string()))
					.collect(),
			)
		}
	}

	impl FieldSource for TestForm {
		fn field_value(&self, field: FormField) -> Option<String> {
			self.0.get(&field).cloned()
		}
	}

	fn full_form() -> TestForm {
		TestForm::new(&[
			(FormField::Account, "abc"),
			(FormField::Character, "Xyz"),
			(FormField::AuraEffect, "fire"),
			(FormField::EnemyType, "undead"),
		])
	}

	#[test]
	fn submit_prevents_default_and_navigates() {
		let event = TestEvent::default();
		let navigator = TestNavigator::default();
		let mut interceptor = FormInterceptor::new(FormVariant::AuraEffectQuery);

		let target = interceptor.submit(&event, &full_form(), &navigator).unwrap();

		assert!(event.default_prevented.get());
		assert_eq!(target.as_str(), "/auras/abc/Xyz?aura_effect=fire&enemy_type=undead");
		assert_eq!(*navigator.visited.borrow(), vec![target.to_string()]);
		assert_eq!(interceptor.state(), &InterceptorState::Navigating(target));
	}

	#[test]
	fn each_variant_reads_its_own_fields() {
		let navigator = TestNavigator::default();

		let mut path = FormInterceptor::new(FormVariant::AuraEffectPath);
		let mut minimal = FormInterceptor::new(FormVariant::Minimal);
		path.submit(&TestEvent::default(), &full_form(), &navigator).unwrap();
		minimal.submit(&TestEvent::default(), &full_form(), &navigator).unwrap();

		assert_eq!(
			*navigator.visited.borrow(),
			vec![String::from("/auras/abc/Xyz/fire"), String::from("/auras/abc/Xyz")]
		);
	}

	#[test]
	fn repeated_submission_is_idempotent() {
		let navigator = TestNavigator::default();
		let form = full_form();
		let mut interceptor = FormInterceptor::new(FormVariant::AuraEffectQuery);

		let first = interceptor.submit(&TestEvent::default(), &form, &navigator).unwrap();
		let second = interceptor.submit(&TestEvent::default(), &form, &navigator).unwrap();

		assert_eq!(first, second);
		assert_eq!(interceptor.state(), &InterceptorState::Navigating(second));
	}

	#[test]
	fn missing_field_prevents_default_without_navigating() {
		let event = TestEvent::default();
		let navigator = TestNavigator::default();
		let form = TestForm::new(&[(FormField::Account, "abc"), (FormField::Character, "Xyz")]);
		let mut interceptor = FormInterceptor::new(FormVariant::AuraEffectQuery);

		let result = interceptor.submit(&event, &form, &navigator);

		assert_eq!(result, Err(LookupError::MissingField(FormField::AuraEffect)));
		assert!(event.default_prevented.get());
		assert!(navigator.visited.borrow().is_empty());
		assert_eq!(interceptor.state(), &InterceptorState::Idle);
	}

	#[test]
	fn rejected_navigation_stays_idle() {
		let navigator = TestNavigator {
			reject: true,
			..Default::default()
		};
		let mut interceptor = FormInterceptor::new(FormVariant::Minimal);

		let result = interceptor.submit(&TestEvent::default(), &full_form(), &navigator);

		assert!(matches!(result, Err(LookupError::Navigation { .. })));
		assert_eq!(interceptor.state(), &InterceptorState::Idle);
	}

	#[test]
	fn empty_fields_still_navigate() {
		let navigator = TestNavigator::default();
		let form = TestForm::new(&[(FormField::Account, ""), (FormField::Character, "")]);
		let mut interceptor = FormInterceptor::new(FormVariant::Minimal);

		let target = interceptor.submit(&TestEvent::default(), &form, &navigator).unwrap();

		assert_eq!(target.as_str(), "/auras//");
	}
}
