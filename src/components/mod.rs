//! UI components for the Cardsmith desktop app.

mod editor;
mod image_upload;
mod notice;
mod preview;
mod toolbar;
mod type_icon;

pub use editor::CardEditor;
pub use image_upload::ImageUploadButton;
pub use notice::{Notice, NoticeModal};
pub use preview::CardPreview;
pub use toolbar::Toolbar;
pub use type_icon::TypeIcon;
