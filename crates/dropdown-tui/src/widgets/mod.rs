pub mod dropdown_button;
pub mod label;
pub mod option_panel;
pub mod status_bar;
