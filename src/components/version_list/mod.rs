// Version list component, split by concern
pub mod component;
pub mod renderers;
pub mod rendering;
pub mod selection;

pub use component::VersionList;
pub use rendering::{ExtraClasses, VersionListProps, build_list_layout, list_class_name};
pub use renderers::ListRenderers;
pub use selection::is_version_active;
