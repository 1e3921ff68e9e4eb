//! The `data` and `config` records the renderer is called with.
use serde::{Deserialize, Serialize};

use crate::choice::{sanitize, ConfigType, Flag, Submission};

/// Caption token the renderer swaps for the provider's logotype.
pub const WORDMARK: &str = "{wordmark}";

/// Prefixed to captions that would otherwise render empty, so the caption
/// keeps its line height.
pub const FILLER: char = '\u{200b}';

pub const DEFAULT_LOCALE: &str = "en_US";

pub const DEFAULT_LABEL: &str = WORDMARK;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonData {
    #[serde(rename = "lc")]
    pub locale: String,
    pub label: String,
    pub disabled: String,
    pub button_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tagline: Option<String>,
    /// `disabled` after validation. Only the factory sets this.
    #[serde(skip)]
    pub disabled_flag: Option<Flag>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

pub fn normalize_data(
    id: &str,
    submission: &str,
    label: &str,
    show_icon: bool,
    locale: &str,
    disabled: bool,
) -> ButtonData {
    let mut label = label.to_owned();

    if label.replace(WORDMARK, "").trim().is_empty() {
        label.insert(0, FILLER);
    }

    if show_icon {
        label.push_str(WORDMARK);
    }

    ButtonData {
        locale: locale.to_owned(),
        label,
        disabled: Flag::from(disabled).to_string(),
        button_type: sanitize::<Submission>(submission).to_string(),
        id: id.to_owned(),
        ..ButtonData::default()
    }
}

/// `size` and `shape` are carried through as given. The factory validates
/// them.
pub fn normalize_config(size: &str, shape: &str) -> ButtonConfig {
    ButtonConfig {
        r#type: ConfigType::Button.to_string(),
        size: present(size),
        shape: present(shape),
        ..ButtonConfig::default()
    }
}

/// Empty strings count as absent, matching how the renderer reads its
/// arguments.
pub(crate) fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
