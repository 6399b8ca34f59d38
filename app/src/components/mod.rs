mod accordion;
mod language_switcher;
mod layout;
mod pie_chart;
mod theme_toggle;

pub use accordion::Accordion;
pub use language_switcher::{document_event, next_open, DropdownEvent, LanguageSwitcher, SwitcherVariant};
pub use layout::Layout;
pub use pie_chart::PieChart;
pub use theme_toggle::ThemeToggle;
