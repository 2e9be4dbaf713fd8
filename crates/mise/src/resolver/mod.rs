pub mod filter;
pub mod resolve;
pub mod selector;

pub use filter::{extract_date_from_file_name, filter_event_files, CandidateFile, EVENT_FILE_FORMAT};
pub use resolve::EventFileResolver;
pub use selector::{select_event_file, today_in};
