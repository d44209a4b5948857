// SPDX-License-Identifier: MPL-2.0
//! Text rendering of the page state, used by the command-line runner.

use super::App;
use crate::ui::notifications::Kind;

impl App {
    /// Localized lines describing the current page state.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let offset = format!("{:.0}", self.viewport.offset);
        let section = self
            .scroll_state()
            .active_section_id
            .clone()
            .unwrap_or_else(|| "-".to_string());
        let count = self.notifications.visible_count().to_string();

        let mut lines = vec![
            self.i18n
                .tr_with_args("summary-theme", &[("theme", self.theme().as_str())]),
            self.i18n.tr_with_args("summary-scroll", &[("offset", offset.as_str())]),
            self.i18n
                .tr_with_args("summary-active-section", &[("section", section.as_str())]),
            self.i18n.tr_with_args(
                "summary-form-phase",
                &[("phase", self.form_phase().as_str())],
            ),
            self.i18n
                .tr_with_args("summary-notifications", &[("count", count.as_str())]),
        ];
        lines.extend(self.notifications.iter().map(|notification| {
            let marker = match notification.kind() {
                Kind::Success => '+',
                Kind::Error => '!',
            };
            format!("  {marker} {}", notification.message())
        }));
        lines
    }
}
