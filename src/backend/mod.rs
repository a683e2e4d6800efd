//! External extraction backends
//!
//! Every backend is an executable located by name on the search path and
//! run under a time budget. Nothing here parses PDF content itself.

mod native;
mod ocr;
mod probe;
mod process;

pub use native::extract_native;
pub use ocr::{collect_page_images, extract_ocr, PageImage, PAGE_BREAK};
pub use probe::{find_backend, Backend, Capabilities};
pub use process::{run_with_timeout, RunError};
