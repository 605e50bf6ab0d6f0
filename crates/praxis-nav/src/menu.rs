//! Main navigation menu
//!
//! Order is render order. Each entry maps a display label and an icon key
//! to the route path an external router consumes. Icon keys are opaque
//! identifiers so the menu data stays decoupled from any icon library.

use serde::Serialize;

/// Opaque icon identifier resolved by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconKey(&'static str);

impl IconKey {
    /// Create an icon key
    #[inline]
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Key string handed to the icon resolver
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// One navigation entry of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Icon key for the UI layer to resolve
    pub icon: IconKey,
    /// Display label
    pub label: &'static str,
    /// Route path consumed by the router
    pub path: &'static str,
}

impl MenuItem {
    const fn new(icon: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            icon: IconKey::new(icon),
            label,
            path,
        }
    }
}

/// The main menu, in render order
pub const MAIN_MENU: [MenuItem; 9] = [
    MenuItem::new("layout-dashboard", "Dashboard", "/"),
    MenuItem::new("briefcase", "Casos", "/contracts"),
    MenuItem::new("file-text", "Propostas", "/proposals"),
    MenuItem::new("users", "Clientes", "/clients"),
    MenuItem::new("dollar-sign", "Financeiro", "/finance"),
    MenuItem::new("folder-archive", "GED", "/ged"),
    MenuItem::new("scale", "Jurimetria", "/jurimetria"),
    MenuItem::new("bar-chart", "Volumetria", "/volumetry"),
    MenuItem::new("settings", "Configurações", "/settings"),
];

/// The main menu as a slice, for shells that iterate
#[inline]
#[must_use]
pub fn main_menu() -> &'static [MenuItem] {
    &MAIN_MENU
}

/// Entry whose route path matches exactly, if any
///
/// Route guards use this to resolve the active entry; paths off the table
/// yield `None`.
#[must_use]
pub fn find_by_path(path: &str) -> Option<&'static MenuItem> {
    MAIN_MENU.iter().find(|item| item.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nine_entries_in_fixed_order() {
        let labels: Vec<&str> = main_menu().iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Casos",
                "Propostas",
                "Clientes",
                "Financeiro",
                "GED",
                "Jurimetria",
                "Volumetria",
                "Configurações",
            ]
        );
    }

    #[test]
    fn paths_are_non_empty_and_unique() {
        for (i, a) in MAIN_MENU.iter().enumerate() {
            assert!(!a.path.is_empty(), "{}", a.label);
            for b in &MAIN_MENU[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn icon_keys_are_set() {
        for item in main_menu() {
            assert!(!item.icon.as_str().is_empty(), "{}", item.label);
        }
    }

    #[test]
    fn finds_entry_by_path() {
        let item = find_by_path("/ged").unwrap();
        assert_eq!(item.label, "GED");
    }

    #[test]
    fn unknown_path_yields_none() {
        assert_eq!(find_by_path("/billing"), None);
        assert_eq!(find_by_path(""), None);
    }

    #[test]
    fn serializes_for_the_shell() {
        let json = serde_json::to_value(main_menu()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 9);
        assert_eq!(json[0]["path"], "/");
        assert_eq!(json[0]["icon"], "layout-dashboard");
    }
}
