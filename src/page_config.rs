use web_sys::UrlSearchParams;

/// Debug and override switches read from the query string. Unknown or
/// malformed values keep the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub snap_enabled: bool,
    pub force_reduced_motion: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            force_reduced_motion: false,
        }
    }
}

pub fn load_page_config() -> PageConfig {
    let Some(window) = web_sys::window() else {
        return PageConfig::default();
    };
    let Ok(search) = window.location().search() else {
        return PageConfig::default();
    };
    parse_page_config(&search)
}

pub fn parse_page_config(search: &str) -> PageConfig {
    let mut config = PageConfig::default();
    let search = search.trim();
    if search.is_empty() {
        return config;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return config;
    };
    if let Some(value) = params.get("snap") {
        let value = value.trim();
        if value.eq_ignore_ascii_case("off") || value == "0" || value.eq_ignore_ascii_case("false")
        {
            config.snap_enabled = false;
        }
    }
    if let Some(value) = params.get("motion") {
        if value.trim().eq_ignore_ascii_case("reduce") {
            config.force_reduced_motion = true;
        }
    }
    config
}
