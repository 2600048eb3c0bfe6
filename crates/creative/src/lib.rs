//! Creative production helpers for the channel/copy stage: per-audience copy
//! suggestions, image-prompt building, layout guidance, and CSV export of
//! the copy table.

pub mod copy;
pub mod export;
pub mod layout;

pub use copy::{copy_suggestions, CopyBlock, CopyLine};
pub use export::copy_csv;
pub use layout::{build_image_prompt, layout_spec_text, FrameType};
