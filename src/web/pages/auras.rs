// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{LookupPathParams, LookupQueryParams};
use leptos::prelude::*;
use leptos_router::hooks::{use_params, use_query};

/// Landing page for a lookup URL. Shows which character was asked for and with which filters.
#[component]
pub fn AuraLookupSummary() -> impl IntoView {
	let params = use_params::<LookupPathParams>();
	let query = use_query::<LookupQueryParams>();

	let account = move || {
		params
			.read()
			.as_ref()
			.ok()
			.and_then(|params| params.account.clone())
			.unwrap_or_default()
	};
	let character = move || {
		params
			.read()
			.as_ref()
			.ok()
			.and_then(|params| params.character.clone())
			.unwrap_or_default()
	};
	// The path variant carries the aura effect as a segment, the query variant as a parameter
	let aura_effect = move || {
		let from_path = params.read().as_ref().ok().and_then(|params| params.aura_effect.clone());
		from_path.or_else(|| query.read().as_ref().ok().and_then(|query| query.aura_effect.clone()))
	};
	let enemy_type = move || query.read().as_ref().ok().and_then(|query| query.enemy_type.clone());

	view! {
		<div id="aura_lookup_summary">
			<h1>{character}</h1>
			<p class="aura_lookup_account">{account}</p>
			<dl>
				{
					move || aura_effect().map(|aura_effect| view! {
						<dt>"Aura effect"</dt>
						<dd>{aura_effect}</dd>
					})
				}
				{
					move || enemy_type().map(|enemy_type| view! {
						<dt>"Enemy type"</dt>
						<dd>{enemy_type}</dd>
					})
				}
			</dl>
			<a href="/">"Look up another character"</a>
		</div>
	}
}
