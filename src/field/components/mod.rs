mod base;
mod checkbox;
mod color;
mod datetime;
mod radio;
mod select;
mod text;
mod timezone;
mod unknown;
mod upload;

pub use base::ComponentKind;
pub(crate) use base::{ComponentEvent, FieldComponent};
pub(crate) use checkbox::CheckboxComponent;
pub(crate) use color::ColorComponent;
pub(crate) use datetime::DateTimeComponent;
pub(crate) use radio::RadioComponent;
pub(crate) use select::SelectComponent;
pub(crate) use text::{TextComponent, TextMode};
pub(crate) use timezone::TimezoneComponent;
pub(crate) use unknown::UnknownComponent;
pub(crate) use upload::UploadComponent;
