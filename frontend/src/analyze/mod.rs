pub mod api;
pub mod components;
pub mod form_options;
