//! Accessibility preference commands.

use trueshade_core::FilterMode;
use trueshade_storefront::AppState;
use trueshade_storefront::prefs::Theme;

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn describe(theme: &Theme) -> String {
    format!(
        "filter:        {} ({})\nhigh contrast: {}\nlarge text:    {}\naccent:        {} / {}",
        theme.filter.label(),
        theme.filter.description(),
        on_off(theme.high_contrast),
        theme.font_size.unwrap_or("off"),
        theme.accent,
        theme.accent_2,
    )
}

pub fn show(state: &AppState) {
    println!("{}", describe(&state.preferences().theme()));
}

pub fn set(
    state: &mut AppState,
    filter: Option<FilterMode>,
    high_contrast: Option<bool>,
    large_text: Option<bool>,
) {
    let prefs = state.preferences_mut();
    if let Some(filter) = filter {
        prefs.set_filter(filter);
    }
    if let Some(on) = high_contrast {
        prefs.set_high_contrast(on);
    }
    if let Some(on) = large_text {
        prefs.set_large_text(on);
    }
    show(state);
}
