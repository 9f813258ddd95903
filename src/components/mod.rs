//! Page components.

pub mod code_mist;
pub mod contact_form;
pub mod nav;
pub mod showcase;
