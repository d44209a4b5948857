// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` owns the document, the page clock and every component, and
//! translates page events into component calls. Timed work comes back as
//! [`Task`] values that `advance` dispatches in due order.

pub mod markup;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message, Task};

use crate::config::{self, Config};
use crate::dom::Document;
use crate::domain::ScrollState;
use crate::i18n::I18n;
use crate::integrations::Bindings;
use crate::runtime::Scheduler;
use crate::storage::{FileStore, PreferenceStore};
use crate::ui::contact_form::{ContactForm, FormPhase};
use crate::ui::effects::{boot, CursorFollower, LazyImages, LoadingScreen, Parallax, Reveal, Viewport};
use crate::ui::navbar::{MobileMenu, Navbar, SiteHeader};
use crate::ui::notifications::{self, Kind, NotificationId, Timings};
use crate::ui::smooth_scroll::SmoothScroll;
use crate::ui::theming::ThemeController;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const STORAGE_ERROR_KEY: &str = "notification-storage-error";

/// Root page state bridging the document, components, localization and
/// stored preferences.
pub struct App {
    pub i18n: I18n,
    document: Document,
    scheduler: Scheduler<Task>,
    config: Config,
    preferences: PreferenceStore,
    theme: ThemeController,
    navbar: Navbar,
    header: SiteHeader,
    menu: MobileMenu,
    smooth_scroll: SmoothScroll,
    notifications: notifications::Manager,
    contact_form: ContactForm,
    parallax: Parallax,
    cursor: CursorFollower,
    reveal: Reveal,
    lazy_images: LazyImages,
    loading: LoadingScreen,
    bindings: Bindings,
    viewport: Viewport,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("now", &self.scheduler.now())
            .field("theme", &self.theme.current())
            .field("viewport", &self.viewport)
            .field("notifications", &self.notifications.visible_count())
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Boots `document` against the user's settings and stored preferences.
    ///
    /// Problems loading either are reported as error notifications on the
    /// page; boot itself never fails.
    pub fn new(flags: Flags, document: Document, bindings: Bindings) -> Self {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        if let Some(theme) = flags.theme {
            config.general.theme = theme;
        }
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (preferences, storage_warning) =
            match FileStore::open_in(flags.data_dir.clone().map(PathBuf::from)) {
                Ok(store) => (PreferenceStore::new(store), None),
                Err(error) => {
                    tracing::warn!(%error, "preferences unavailable, keeping them in memory");
                    (PreferenceStore::in_memory(), Some(STORAGE_ERROR_KEY))
                }
            };

        let mut app = Self::from_parts(document, config, i18n, preferences, bindings);
        for key in config_warning.as_deref().into_iter().chain(storage_warning) {
            app.show_localized(key, Kind::Error);
        }
        app
    }

    /// Boots `document` with explicit services.
    ///
    /// Applies the theme, binds every component, stamps the boot chrome and
    /// runs the scroll handlers once so the initial state is consistent.
    pub fn from_parts(
        mut document: Document,
        config: Config,
        i18n: I18n,
        mut preferences: PreferenceStore,
        bindings: Bindings,
    ) -> Self {
        let mut scheduler: Scheduler<Task> = Scheduler::new();
        let loading = LoadingScreen::begin(&mut document, config.effects.loading_delay());
        let fallback = config.general.theme.resolve();
        let theme = ThemeController::init(&mut document, &mut preferences, fallback);
        boot::stamp_year(&mut document, boot::current_year());
        boot::preload_font(&mut document);

        let notifications = notifications::Manager::new(Timings::from(&config.notifications))
            .with_close_label(i18n.tr("notification-close-label"));
        let mut cursor = CursorFollower::bind(&document, config.effects.cursor_smoothing());
        cursor.start(&mut scheduler);

        let mut app = Self {
            navbar: Navbar::bind(&document, config.scroll.navbar_thresholds()),
            header: SiteHeader::bind(&document, config.scroll.header_thresholds()),
            menu: MobileMenu::bind(&document),
            smooth_scroll: SmoothScroll::new(config.scroll.smoothing(), config.scroll.anchor_offset_px),
            contact_form: ContactForm::bind(&document, config.form.submit_delay()),
            parallax: Parallax::bind(&document, config.scroll.parallax_speed_step),
            reveal: Reveal::bind(
                &document,
                config.effects.reveal_threshold,
                config.effects.reveal_bottom_margin_px,
            ),
            lazy_images: LazyImages::bind(&document),
            viewport: Viewport {
                offset: 0.0,
                height: config::defaults::DEFAULT_VIEWPORT_HEIGHT_PX,
            },
            i18n,
            document,
            scheduler,
            config,
            preferences,
            theme,
            notifications,
            cursor,
            loading,
            bindings,
        };
        app.run_scroll_handlers();
        tracing::info!(theme = %app.theme.current(), locale = %app.i18n.current_locale(), "page ready");
        app
    }

    /// Moves the page clock forward by `elapsed`, dispatching every task that
    /// falls due on the way.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.scheduler.now().saturating_add(elapsed);
        let mut dispatched = 0;
        while let Some(task) = self.scheduler.pop_due(target) {
            self.dispatch(task);
            dispatched += 1;
        }
        self.scheduler.advance_clock_to(target);
        dispatched
    }

    /// Stops every timer and frame loop and releases library instances.
    pub fn teardown(&mut self) {
        self.cursor.stop(&mut self.scheduler);
        self.smooth_scroll.cancel(&mut self.scheduler);
        self.contact_form.cancel(&mut self.document, &mut self.scheduler);
        self.loading.cancel(&mut self.scheduler);
        self.notifications.clear(&mut self.document, &mut self.scheduler);
        self.bindings.teardown();
        let leftover = self.scheduler.clear();
        tracing::info!(leftover, "page torn down");
    }

    /// Shows a notification with an already localized message.
    pub fn notify(&mut self, message: &str, kind: Kind) -> NotificationId {
        self.notifications
            .show(&mut self.document, &mut self.scheduler, message, kind)
    }

    fn show_localized(&mut self, key: &str, kind: Kind) -> NotificationId {
        let message = self.i18n.tr(key);
        self.notify(&message, kind)
    }

    /// Re-resolves element references after the page content changed.
    fn rebind(&mut self) {
        // Handles held by the old bindings would otherwise outlive them.
        self.cursor.stop(&mut self.scheduler);
        self.smooth_scroll.cancel(&mut self.scheduler);
        self.contact_form.cancel(&mut self.document, &mut self.scheduler);

        let config = &self.config;
        let document = &self.document;
        self.navbar = Navbar::bind(document, config.scroll.navbar_thresholds());
        self.header = SiteHeader::bind(document, config.scroll.header_thresholds());
        self.menu = MobileMenu::bind(document);
        self.contact_form = ContactForm::bind(document, config.form.submit_delay());
        self.parallax = Parallax::bind(document, config.scroll.parallax_speed_step);
        self.reveal = Reveal::bind(
            document,
            config.effects.reveal_threshold,
            config.effects.reveal_bottom_margin_px,
        );
        self.lazy_images = LazyImages::bind(document);
        self.cursor = CursorFollower::bind(document, config.effects.cursor_smoothing());
        self.theme.rebind(&mut self.document);
    }

    fn run_scroll_handlers(&mut self) {
        let offset = self.viewport.offset;
        self.navbar.on_scroll(&mut self.document, offset);
        self.header.on_scroll(&mut self.document, offset);
        self.parallax.on_scroll(&mut self.document, offset);
        self.run_visibility_checks();
    }

    fn run_visibility_checks(&mut self) {
        let revealed = self.reveal.on_viewport(&mut self.document, self.viewport);
        let loaded = self.lazy_images.on_viewport(&mut self.document, self.viewport);
        if revealed + loaded > 0 {
            tracing::debug!(revealed, loaded, "elements came into view");
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for content swaps between `PageLeave` and `PageEnter`.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<Task> {
        &self.scheduler
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    #[must_use]
    pub fn theme(&self) -> crate::domain::Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.viewport.offset
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scroll_state(&self) -> &ScrollState {
        self.navbar.state()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn form_phase(&self) -> FormPhase {
        self.contact_form.phase()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open(&self.document)
    }

    #[must_use]
    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth_scroll.is_running()
    }

    #[must_use]
    pub fn is_cursor_running(&self) -> bool {
        self.cursor.is_running()
    }

    #[must_use]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}
