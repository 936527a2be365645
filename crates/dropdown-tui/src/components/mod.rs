pub mod dropdown_field;
