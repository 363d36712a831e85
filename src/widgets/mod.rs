mod button;
mod color_picker;
mod date_picker;
mod option_list;

pub use button::TriggerButton;
pub use color_picker::ColorPicker;
pub use date_picker::{DatePickerEvent, DateTimePicker};
pub use option_list::{OptionList, OptionListEvent};
