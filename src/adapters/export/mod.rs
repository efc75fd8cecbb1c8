pub mod csv_export;

pub use csv_export::{EXPORT_FILE_NAME, reports_to_csv};
