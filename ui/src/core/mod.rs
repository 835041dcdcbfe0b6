//! Platform glue and demo fixtures shared by the views.

pub mod platform;
pub mod sample;
