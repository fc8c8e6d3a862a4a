//! Shared domain types.
//!
//! All types serialize in camelCase - the wire format the embedded admin UI
//! and the storefront widget consume.

mod notification;
mod settings;
mod shop;

pub use notification::{NotificationDocument, NotificationRecord};
pub use settings::{PagesRestriction, PopupPosition, SettingsPatch, ShopSettings};
pub use shop::ShopId;
