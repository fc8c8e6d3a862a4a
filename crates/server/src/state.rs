//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::{NotificationService, SettingsService, WidgetService};
use crate::shopify::SyncClient;
use crate::store::PostgresStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The services each hold their storage ports
/// as trait objects, so state construction is the one place the Postgres
/// adapter is named.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    notifications: NotificationService,
    settings: SettingsService,
    widget: WidgetService,
}

impl AppState {
    /// Create a new application state over a connection pool.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let store = Arc::new(PostgresStore::new(pool.clone()));
        let shopify = SyncClient::new(config.shopify.api_version.clone());

        let notifications = NotificationService::new(store.clone(), store.clone(), shopify);
        let settings = SettingsService::new(store.clone());
        let widget = WidgetService::new(store.clone(), store);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                notifications,
                settings,
                widget,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the notification service.
    #[must_use]
    pub fn notifications(&self) -> &NotificationService {
        &self.inner.notifications
    }

    /// Get a reference to the settings service.
    #[must_use]
    pub fn settings(&self) -> &SettingsService {
        &self.inner.settings
    }

    /// Get a reference to the widget service.
    #[must_use]
    pub fn widget(&self) -> &WidgetService {
        &self.inner.widget
    }
}
