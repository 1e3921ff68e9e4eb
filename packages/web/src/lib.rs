//! Bind the button factory to the payment provider's script in the page.
use gloo_console::{debug, error, warn};
use js_sys::{Array, Function, Reflect, JSON};
use paybutton_factory::{ButtonConfig, ButtonData, ButtonFactory, Error, Renderer, Result};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

pub mod exports;

/// Where the provider's script installs its render function.
pub const ENTRY_POINT: [&str; 3] = ["paypal", "button", "create"];

/// The provider's render function, found on `window`.
pub struct GlobalRenderer {
    receiver: JsValue,
    create: Function,
    document: Option<Document>,
}

impl GlobalRenderer {
    pub fn load() -> Result<Self> {
        Self::load_from(&ENTRY_POINT)
    }

    /// Walk `path` down from `window` to the render function.
    pub fn load_from(path: &[&str]) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document();
        let mut receiver = JsValue::UNDEFINED;
        let mut value: JsValue = window.into();

        for (index, segment) in path.iter().enumerate() {
            let next = Reflect::get(&value, &JsValue::from_str(segment)).unwrap_or(JsValue::UNDEFINED);

            if next.is_undefined() || next.is_null() {
                return Err(Error::MissingEntryPoint {
                    path: path[..=index].join("."),
                });
            }

            receiver = std::mem::replace(&mut value, next);
        }

        let create = value.dyn_into::<Function>().map_err(|_| Error::NotCallable {
            path: path.join("."),
        })?;

        Ok(Self {
            receiver,
            create,
            document,
        })
    }
}

impl Renderer for GlobalRenderer {
    type Anchor = Element;
    type Output = std::result::Result<JsValue, JsValue>;

    fn resolve(&self, selector: &str) -> Option<Element> {
        let document = self.document.as_ref()?;

        document.query_selector(selector).unwrap_or_else(|e| {
            warn!(format!("Invalid mount selector `{selector}`"), e);
            None
        })
    }

    fn render(
        &self,
        auto_render: bool,
        data: ButtonData,
        config: ButtonConfig,
        anchor: Option<Element>,
    ) -> Self::Output {
        debug!(format!(
            "Rendering button `{}` ({}, anchored: {})",
            data.id,
            config.label.as_deref().or(config.style.as_deref()).unwrap_or("unstyled"),
            anchor.is_some()
        ));

        let args = Array::of4(
            &JsValue::from_bool(auto_render),
            &to_js(&data)?,
            &to_js(&config)?,
            &anchor.map_or(JsValue::NULL, JsValue::from),
        );

        self.create.apply(&self.receiver, &args)
    }
}

/// Load the global renderer, reporting any failure on the console.
pub fn load_factory() -> Result<ButtonFactory<GlobalRenderer>> {
    GlobalRenderer::load()
        .map(ButtonFactory::new)
        .inspect_err(|e| error!(format!("Payment buttons unavailable: {e}")))
}

fn to_js(value: &impl Serialize) -> std::result::Result<JsValue, JsValue> {
    let json =
        serde_json::to_string(value).map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;

    JSON::parse(&json)
}

pub(crate) fn js_error(e: &Error) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
