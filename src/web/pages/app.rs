// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::auras::AuraLookupSummary;
use super::errors::not_found::NotFound;
use super::lookup::LookupPage;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/poecalc.css" />
		<Title text="poecalc" />

		<Router>
			<main>
				<Routes fallback=NotFound>
					<Route path=path!("/") view=LookupPage />
					<Route path=path!("/auras/:account/:character") view=AuraLookupSummary />
					<Route path=path!("/auras/:account/:character/:aura_effect") view=AuraLookupSummary />
				</Routes>
			</main>
		</Router>
	}
}
