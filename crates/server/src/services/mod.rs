//! Application services.
//!
//! Each service owns its storage ports and exposes the operations the API
//! layer translates requests into. Failures are typed results end to end -
//! "no data" is never conflated with "operation failed".

pub mod notifications;
pub mod settings;
pub mod widget;

pub use notifications::{NotificationService, SyncError};
pub use settings::SettingsService;
pub use widget::{WidgetContent, WidgetPayload, WidgetService};
