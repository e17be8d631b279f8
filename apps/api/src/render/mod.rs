//! Structured document → HTML fragments.

pub mod cover_letter;
pub mod html;
pub mod page;
pub mod resume;

pub use cover_letter::render_cover_letter;
pub use page::wrap_document;
pub use resume::render_resume;
