pub mod catalogue;
pub mod component_page;
pub mod preview;
