pub mod registry;
pub mod tab_meta;

pub use registry::{render_tab_content, resolve_tab};
pub use tab_meta::{SectionId, TabId};
