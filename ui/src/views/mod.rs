mod controller;
pub use controller::{ViewController, ViewState};

mod localized_grid;
pub use localized_grid::{provide_locale_resolver, LocalizedGridDemo};
