mod dropdown;
mod events;
mod layout;
mod render;
mod state;

// Re-export public types
pub use dropdown::truncate_to_width;
pub use events::widget_key;
pub use layout::{FieldRegions, LayoutRegions};
pub use state::{App, InputField, StatusMessage};
