//! Semantic color roles and their configuration keys.

use serde::{Deserialize, Serialize};

/// The meaning of a block's color, independent of the actual color value.
///
/// Modules pick a role (`Good` when a watched process runs, `Bad` when it
/// does not); the configuration decides what each role looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    #[default]
    Default,
    Good,
    Bad,
    Degraded,
    Separator,
}

/// Config keys per role: (role, text color key, progress bar color key).
const ROLE_KEYS: [(ColorRole, &str, &str); 5] = [
    (ColorRole::Default, "color_default", "progress_colors_default"),
    (ColorRole::Good, "color_good", "progress_colors_good"),
    (ColorRole::Bad, "color_bad", "progress_colors_bad"),
    (ColorRole::Degraded, "color_degraded", "progress_colors_degraded"),
    (ColorRole::Separator, "color_separator", "progress_colors_separator"),
];

/// General-section key for the progress bar background used when a role has
/// no explicit progress colors.
pub const PROGRESS_DEFAULT_BG_KEY: &str = "progress_color_default_bg";

impl ColorRole {
    /// All roles, in table order.
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Default,
        ColorRole::Good,
        ColorRole::Bad,
        ColorRole::Degraded,
        ColorRole::Separator,
    ];

    fn keys(&self) -> (&'static str, &'static str) {
        let (_, text, progress) = ROLE_KEYS[*self as usize];
        (text, progress)
    }

    /// Config key holding the text color for this role.
    pub fn text_key(&self) -> &'static str {
        self.keys().0
    }

    /// Config key holding the progress bar colors for this role.
    pub fn progress_key(&self) -> &'static str {
        self.keys().1
    }
}
