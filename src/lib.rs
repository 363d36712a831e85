#![deny(rust_2018_idioms)]

mod descriptor;
mod field;
mod palette;
pub mod widgets;

pub use descriptor::{Choice, FieldDescriptor, FieldKind, UploadPayload};
pub use field::{ChangeEvent, ComponentKind, Field, FilePicker};
pub use palette::Palette;

pub mod prelude {
    pub use super::{ChangeEvent, Choice, Field, FieldDescriptor, FieldKind, Palette};
}
