//! View components. Thin adapters: they read the shared state signals and
//! apply them to markup carrying the page's id/class contract.

pub mod back_to_top;
pub mod contact_form;
pub mod project_modal;
pub mod site_header;
pub mod typed_text;
