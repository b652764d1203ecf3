pub mod buffer;
pub mod config;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod option;
pub mod props;
pub mod render;
pub mod selection;
pub mod stylesheet;
pub mod terminal;
pub mod text;
pub mod types;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use config::SelectConfig;
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::FocusState;
pub use hit::{HitMap, HitRegion};
pub use layout::Rect;
pub use listener::{KeyListeners, ListenerGuard};
pub use option::{OptionValue, SelectOption};
pub use props::{SelectMode, SelectProps};
pub use render::{layout_badges, BadgePlacement};
pub use stylesheet::{class_list, Class, StyleSheet};
pub use terminal::Terminal;
pub use types::*;
pub use widget::{InteractionState, Part, SelectId, SelectWidget};
