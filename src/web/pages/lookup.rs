// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::error::Error;
use super::utils::get_form_variant;
use crate::lookup::{EnemyType, FormField, FormInterceptor, FormVariant};
use leptos::ev::SubmitEvent;
use leptos::html::Form;
use leptos::prelude::*;

#[component]
pub fn LookupPage() -> impl IntoView {
	view! {
		<h1>"Aura calculator"</h1>
		<p>"Enter a public character to see the effect of its auras."</p>
		<Await future=get_form_variant() let:variant>
			{
				match variant {
					Ok(variant) => view! {
						<AuraLookupForm variant={*variant} />
					}.into_any(),
					Err(error) => {
						tracing::error!(source = ?error, "Failed to get the lookup form variant");
						view! {
							<Error />
						}.into_any()
					}
				}
			}
		</Await>
	}
}

/// The `form#auras` lookup form. Submitting it navigates straight to the lookup URL for the entered values.
#[component]
pub fn AuraLookupForm(variant: FormVariant) -> impl IntoView {
	let form_ref = NodeRef::<Form>::new();
	let interceptor = StoredValue::new(FormInterceptor::new(variant));

	let form_submit = move |event: SubmitEvent| {
		let Some(form) = form_ref.get_untracked() else {
			event.prevent_default();
			return;
		};
		let location = window().location();

		interceptor.update_value(|interceptor| {
			if let Err(error) = interceptor.submit(&event, &form, &location) {
				tracing::error!(source = %error, "Failed to submit the aura lookup");
			}
		});
	};

	view! {
		<form id="auras" node_ref=form_ref on:submit=form_submit>
			<LookupTextInput field=FormField::Account />
			<LookupTextInput field=FormField::Character />
			{
				variant.includes(FormField::AuraEffect).then(|| view! {
					<LookupTextInput field=FormField::AuraEffect />
				})
			}
			{
				variant.includes(FormField::EnemyType).then(|| view! {
					<label>
						<span class="lookup_label_text">{FormField::EnemyType.label()}</span>
						<select name={FormField::EnemyType.name()}>
							{
								EnemyType::ALL
									.iter()
									.map(|enemy_type| view! {
										<option value={enemy_type.value()}>{enemy_type.label()}</option>
									})
									.collect_view()
							}
						</select>
					</label>
				})
			}
			<div class="lookup_submit_button">
				<button type="submit">"Analyze"</button>
			</div>
		</form>
	}
}

#[component]
fn LookupTextInput(field: FormField) -> impl IntoView {
	view! {
		<label>
			<span class="lookup_label_text">{field.label()}</span>
			<input type="text" name={field.name()} />
		</label>
	}
}
