//! Shared UI crate for LocaleGrid. Locale resolution, the data grid and the
//! demo view live here; the platform crates only launch them.

pub mod core;
pub mod grid;
pub mod i18n;
pub mod locale;
pub mod views;
