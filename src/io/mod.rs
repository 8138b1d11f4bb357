pub mod csv_import;
pub mod file;

pub use csv_import::{import_csv, import_csv_str};
pub use file::{load_project, save_project};
