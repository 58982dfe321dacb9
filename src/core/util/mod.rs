pub mod plane_mapping;
pub mod row_bands;
