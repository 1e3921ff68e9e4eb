//! The positional JavaScript surface.
//!
//! Every argument may be omitted from JavaScript. Omitted strings are empty
//! and omitted flags are `false`, which the factory then defaults.
use paybutton_factory::{ButtonFactory, ButtonOptions};
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

use crate::{js_error, load_factory, GlobalRenderer};

thread_local! {
    static FACTORY: paybutton_factory::Result<ButtonFactory<GlobalRenderer>> = load_factory();
}

/// Run `f` against the page's factory, loading it on first use.
pub fn with_factory<T>(
    f: impl FnOnce(&ButtonFactory<GlobalRenderer>) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    FACTORY.with(|factory| f(factory.as_ref().map_err(js_error)?))
}

/// Look up the provider's render function now rather than on first render.
#[wasm_bindgen(js_name = loadRenderer)]
pub fn load_renderer() -> Result<(), JsValue> {
    with_factory(|_| Ok(()))
}

#[wasm_bindgen(js_name = createCheckoutButton)]
#[allow(clippy::too_many_arguments)]
pub fn create_checkout_button(
    selector: Option<String>,
    id: Option<String>,
    size: Option<String>,
    shape: Option<String>,
    color: Option<String>,
    label: Option<String>,
    show_icon: Option<bool>,
    tagline: Option<bool>,
    locale: Option<String>,
    disabled: Option<bool>,
    kind: Option<String>,
) -> Result<JsValue, JsValue> {
    let options = ButtonOptions {
        id: id.unwrap_or_default(),
        size: size.unwrap_or_default(),
        shape: shape.unwrap_or_default(),
        color: color.unwrap_or_default(),
        label: label.unwrap_or_default(),
        show_icon: show_icon.unwrap_or_default(),
        tagline: tagline.unwrap_or_default(),
        locale: locale.unwrap_or_default(),
        disabled: disabled.unwrap_or_default(),
        kind: kind.unwrap_or_default(),
        ..ButtonOptions::default()
    };

    with_factory(|factory| {
        factory.create_checkout_button(&selector.unwrap_or_default(), &options)
    })
}

#[wasm_bindgen(js_name = createCreditButton)]
#[allow(clippy::too_many_arguments)]
pub fn create_credit_button(
    selector: Option<String>,
    id: Option<String>,
    size: Option<String>,
    shape: Option<String>,
    label: Option<String>,
    show_icon: Option<bool>,
    tagline: Option<bool>,
    locale: Option<String>,
    disabled: Option<bool>,
) -> Result<JsValue, JsValue> {
    let options = ButtonOptions {
        id: id.unwrap_or_default(),
        size: size.unwrap_or_default(),
        shape: shape.unwrap_or_default(),
        label: label.unwrap_or_default(),
        show_icon: show_icon.unwrap_or_default(),
        tagline: tagline.unwrap_or_default(),
        locale: locale.unwrap_or_default(),
        disabled: disabled.unwrap_or_default(),
        ..ButtonOptions::default()
    };

    with_factory(|factory| factory.create_credit_button(&selector.unwrap_or_default(), &options))
}

#[wasm_bindgen(js_name = createStyleButton)]
#[allow(clippy::too_many_arguments)]
pub fn create_style_button(
    selector: Option<String>,
    id: Option<String>,
    size: Option<String>,
    shape: Option<String>,
    label: Option<String>,
    show_icon: Option<bool>,
    locale: Option<String>,
    disabled: Option<bool>,
    style: Option<String>,
) -> Result<JsValue, JsValue> {
    let options = ButtonOptions {
        id: id.unwrap_or_default(),
        size: size.unwrap_or_default(),
        shape: shape.unwrap_or_default(),
        label: label.unwrap_or_default(),
        show_icon: show_icon.unwrap_or_default(),
        locale: locale.unwrap_or_default(),
        disabled: disabled.unwrap_or_default(),
        style: style.unwrap_or_default(),
        ..ButtonOptions::default()
    };

    with_factory(|factory| factory.create_style_button(&selector.unwrap_or_default(), &options))
}
