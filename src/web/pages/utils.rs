// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::lookup::FormVariant;
use leptos::prelude::*;
use leptos_router::params::Params;

#[derive(Clone, Debug, Params, PartialEq)]
pub struct LookupPathParams {
	pub account: Option<String>,
	pub character: Option<String>,
	pub aura_effect: Option<String>,
}

#[derive(Clone, Debug, Params, PartialEq)]
pub struct LookupQueryParams {
	pub aura_effect: Option<String>,
	pub enemy_type: Option<String>,
}

/// Gets the lookup form variant this site is configured for
#[server]
pub async fn get_form_variant() -> Result<FormVariant, ServerFnError> {
	use crate::web::state::AppState;

	let state = expect_context::<AppState>();
	Ok(state.config.form)
}
