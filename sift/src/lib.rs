// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    load_seeds_from_file,
    load_seeds_from_source,
    parse_seed_line,
};

// Re-export search functionality from sift-core
pub use sift_core::report::{
    ReportFormat, generate_json_report, generate_text_report, save_report,
};
pub use sift_core::search::{
    SearchOptions, SearchProgressCallback, execute_search, extract_identifier_path,
};
