//! The closed sets of values a button parameter may take.
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// A closed, case-sensitive set of string values with a fallback.
pub trait Choice: Copy + Eq + Default + FromStr + AsRef<str> + IntoEnumIterator {
    /// `value` if it names a member of the set exactly, otherwise the default.
    fn sanitize(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn is_member(value: &str) -> bool {
        Self::iter().any(|member| member.as_ref() == value)
    }
}

pub fn sanitize<T: Choice>(value: &str) -> T {
    T::sanitize(value)
}

/// [`sanitize`] over an ad hoc table of legal values.
pub fn sanitize_str<'a>(value: &'a str, allowed: &[&str], fallback: &'a str) -> &'a str {
    if allowed.contains(&value) {
        value
    } else {
        fallback
    }
}

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Silver,
    Gold,
}

impl Choice for Color {}

/// A boolean spelled `"true"` or `"false"`, which is how the renderer reads
/// them.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    #[default]
    False,
    True,
}

impl Choice for Flag {}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Flag> for bool {
    fn from(value: Flag) -> Self {
        value == Flag::True
    }
}

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Checkout,
    Credit,
}

impl Choice for Kind {}

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
}

impl Choice for Size {}

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Pill,
    #[default]
    Rect,
}

impl Choice for Shape {}

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
    Checkout,
    Credit,
}

impl Choice for Style {}

/// How the rendered button behaves inside a form.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Submission {
    #[default]
    Button,
    Submit,
}

impl Choice for Submission {}

/// The only element type the renderer is ever asked for.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    #[default]
    Button,
}

impl Choice for ConfigType {}
