// ABOUTME: Application state for the storefront TUI: current route, checkout wizard, and notifications
// Services raised by the wizard arrive over channels and are applied on tick

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::checkout::{
    ChannelNavigator, ChannelNotifier, CheckoutWizard, Notice, NoticeKind, HOME_PATH,
};
use crate::config::AppConfig;

pub const CHECKOUT_PATH: &str = "/checkout";

/// Pages the storefront can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Checkout,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            HOME_PATH => Self::Home,
            CHECKOUT_PATH => Self::Checkout,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => HOME_PATH,
            Self::Checkout => CHECKOUT_PATH,
            Self::NotFound(path) => path,
        }
    }
}

/// Notification system for TUI messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub description: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        Self {
            message: notice.message,
            description: notice.description,
            notification_type: match notice.kind {
                NoticeKind::Success => NotificationType::Success,
                NoticeKind::Info => NotificationType::Info,
            },
            created_at: Instant::now(),
            duration: notice.duration,
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub route: Route,
    pub wizard: CheckoutWizard,
    pub notifications: Vec<Notification>,
    pub help_visible: bool,
    pub should_quit: bool,
    notifier: Arc<ChannelNotifier>,
    navigator: Arc<ChannelNavigator>,
    notice_rx: UnboundedReceiver<Notice>,
    navigation_rx: UnboundedReceiver<String>,
}

impl AppState {
    /// Start on the checkout page with an empty wizard
    pub fn new(config: AppConfig) -> Self {
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();
        let (navigation_tx, navigation_rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(ChannelNotifier::new(notice_tx));
        let navigator = Arc::new(ChannelNavigator::new(navigation_tx));
        let wizard = CheckoutWizard::new(
            notifier.clone(),
            navigator.clone(),
            config.checkout.settings(),
        );

        Self {
            config,
            route: Route::Checkout,
            wizard,
            notifications: Vec::new(),
            help_visible: false,
            should_quit: false,
            notifier,
            navigator,
            notice_rx,
            navigation_rx,
        }
    }

    /// Replace the wizard with a fresh one; prior checkout data is discarded
    pub fn mount_checkout(&mut self) {
        self.wizard = CheckoutWizard::new(
            self.notifier.clone(),
            self.navigator.clone(),
            self.config.checkout.settings(),
        );
    }

    /// Switch pages. Entering checkout always starts a new wizard.
    pub fn navigate_to(&mut self, path: &str) {
        let route = Route::from_path(path);
        info!("Navigating from {} to {}", self.route.path(), route.path());
        if route == Route::Checkout {
            self.mount_checkout();
        }
        self.route = route;
        self.help_visible = false;
    }

    /// Apply notices and navigation requests raised since the last call
    pub fn drain_services(&mut self) {
        while let Ok(notice) = self.notice_rx.try_recv() {
            debug!("Notice received: {}", notice.message);
            self.add_notification(notice.into());
        }
        while let Ok(path) = self.navigation_rx.try_recv() {
            self.navigate_to(&path);
        }
    }

    /// Add a notification to the notification queue
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn cleanup_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get current notifications (non-expired)
    pub fn get_current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        self.state.drain_services();
        self.state.cleanup_expired_notifications();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
