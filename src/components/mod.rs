pub mod auth_form;
pub mod edit_overlay;
