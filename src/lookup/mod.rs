// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The aura lookup form: which fields it has, how they're read at submit time, and where a submission sends the
//! browser.

mod error;
mod fields;
mod interceptor;
mod target;
mod variant;

pub use error::LookupError;
pub use fields::{EnemyType, FieldSource, FormField, FormFieldSet};
pub use interceptor::{FormInterceptor, InterceptorState, Navigator, SubmitControl};
pub use target::NavigationTarget;
pub use variant::{FormOptions, FormVariant};
