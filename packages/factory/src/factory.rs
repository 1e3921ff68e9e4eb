use crate::{
    choice::{sanitize, Choice, Color, ConfigType, Flag, Kind, Shape, Size, Style},
    record::{
        normalize_config, normalize_data, present, ButtonConfig, ButtonData, DEFAULT_LABEL,
        DEFAULT_LOCALE,
    },
};

/// The external library that actually draws buttons.
pub trait Renderer {
    /// Where a rendered button is inserted.
    type Anchor;
    /// Whatever the library hands back from a render call.
    type Output;

    /// Find the anchor for a mount selector. `None` if nothing matches.
    fn resolve(&self, selector: &str) -> Option<Self::Anchor>;

    fn render(
        &self,
        auto_render: bool,
        data: ButtonData,
        config: ButtonConfig,
        anchor: Option<Self::Anchor>,
    ) -> Self::Output;
}

/// Raw, unvalidated button parameters, as a caller supplies them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    pub id: String,
    pub size: String,
    pub shape: String,
    pub color: String,
    pub label: String,
    pub show_icon: bool,
    pub tagline: bool,
    pub locale: String,
    pub disabled: bool,
    pub kind: String,
    pub style: String,
    pub submission: String,
}

impl ButtonOptions {
    fn data(&self) -> ButtonData {
        normalize_data(
            &self.id,
            &self.submission,
            &self.label,
            self.show_icon,
            &self.locale,
            self.disabled,
        )
    }

    fn config(&self) -> ButtonConfig {
        normalize_config(&self.size, &self.shape)
    }
}

pub struct ButtonFactory<R> {
    renderer: R,
}

impl<R: Renderer> ButtonFactory<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn create_checkout_button(&self, selector: &str, options: &ButtonOptions) -> R::Output {
        let mut data = options.data();
        let mut config = options.config();

        data.color = present(&options.color);
        data.tagline = Some(Flag::from(options.tagline).to_string());
        config.label = Some(sanitize::<Kind>(&options.kind).to_string());

        self.factory(data, config, selector)
    }

    /// A checkout button with no color and the credit caption.
    pub fn create_credit_button(&self, selector: &str, options: &ButtonOptions) -> R::Output {
        let options = ButtonOptions {
            color: String::new(),
            kind: Kind::Credit.to_string(),
            ..options.clone()
        };

        self.create_checkout_button(selector, &options)
    }

    /// A button keyed off `options.style` rather than the checkout/credit
    /// kind.
    pub fn create_style_button(&self, selector: &str, options: &ButtonOptions) -> R::Output {
        let data = options.data();
        let mut config = options.config();

        config.style = present(&options.style);

        self.factory(data, config, selector)
    }

    /// Fill defaults, validate every enumerated field and render.
    ///
    /// Invalid values are replaced by their set's default. This never fails.
    pub fn factory(
        &self,
        mut data: ButtonData,
        mut config: ButtonConfig,
        selector: &str,
    ) -> R::Output {
        if data.locale.is_empty() {
            data.locale = DEFAULT_LOCALE.to_owned();
        }

        if data.label.is_empty() {
            data.label = DEFAULT_LABEL.to_owned();
        }

        sanitize_field::<Color>(&mut data.color);

        if !data.disabled.is_empty() {
            data.disabled_flag = Some(sanitize(&data.disabled));
        }

        config.r#type = sanitize::<ConfigType>(&config.r#type).to_string();
        data.button_type.clone_from(&config.r#type);

        sanitize_field::<Kind>(&mut config.label);
        sanitize_field::<Size>(&mut config.size);
        sanitize_field::<Shape>(&mut config.shape);
        sanitize_field::<Style>(&mut config.style);

        let anchor = if selector.is_empty() {
            None
        } else {
            self.renderer.resolve(selector)
        };

        self.renderer.render(true, data, config, anchor)
    }
}

fn sanitize_field<T: Choice>(field: &mut Option<String>) {
    if let Some(value) = field.as_mut().filter(|value| !value.is_empty()) {
        *value = T::sanitize(value.as_str()).as_ref().to_owned();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{ButtonFactory, ButtonOptions, Renderer};
    use crate::{
        choice::Flag,
        record::{normalize_config, normalize_data, ButtonConfig, ButtonData, FILLER, WORDMARK},
    };

    struct Call {
        auto_render: bool,
        data: ButtonData,
        config: ButtonConfig,
        anchor: Option<&'static str>,
    }

    #[derive(Default)]
    struct Recorder {
        resolved: RefCell<Vec<String>>,
        calls: RefCell<Vec<Call>>,
    }

    impl Renderer for Recorder {
        type Anchor = &'static str;
        type Output = usize;

        fn resolve(&self, selector: &str) -> Option<Self::Anchor> {
            self.resolved.borrow_mut().push(selector.to_owned());
            (selector == "#mount").then_some("mount")
        }

        fn render(
            &self,
            auto_render: bool,
            data: ButtonData,
            config: ButtonConfig,
            anchor: Option<Self::Anchor>,
        ) -> usize {
            let mut calls = self.calls.borrow_mut();
            calls.push(Call {
                auto_render,
                data,
                config,
                anchor,
            });
            calls.len()
        }
    }

    fn factory() -> ButtonFactory<Recorder> {
        ButtonFactory::new(Recorder::default())
    }

    fn only_call(factory: &ButtonFactory<Recorder>) -> Call {
        let mut calls = factory.renderer().calls.borrow_mut();
        assert_eq!(calls.len(), 1);
        calls.remove(0)
    }

    #[test]
    fn fills_locale_and_label() {
        let factory = factory();
        let data = ButtonData::default();

        factory.factory(data, normalize_config("", ""), "#mount");
        let call = only_call(&factory);

        assert!(call.auto_render);
        assert_eq!(call.data.locale, "en_US");
        assert_eq!(call.data.label, WORDMARK);
        assert_eq!(call.anchor, Some("mount"));
    }

    #[test]
    fn invalid_config_falls_back() {
        let factory = factory();
        let config = ButtonConfig {
            r#type: "submit".to_owned(),
            size: Some("huge".to_owned()),
            shape: Some("oval".to_owned()),
            style: Some("fancy".to_owned()),
            label: Some("donate".to_owned()),
        };

        factory.factory(ButtonData::default(), config, "");
        let call = only_call(&factory);

        assert_eq!(
            call.config,
            ButtonConfig {
                r#type: "button".to_owned(),
                size: Some("medium".to_owned()),
                shape: Some("rect".to_owned()),
                style: Some("primary".to_owned()),
                label: Some("checkout".to_owned()),
            }
        );
    }

    #[test]
    fn absent_config_fields_stay_absent() {
        let factory = factory();

        factory.factory(ButtonData::default(), normalize_config("", ""), "");
        let call = only_call(&factory);

        assert_eq!(call.config.size, None);
        assert_eq!(call.config.shape, None);
        assert_eq!(call.config.style, None);
        assert_eq!(call.config.label, None);
    }

    #[test]
    fn color_is_validated_when_present() {
        let factory = factory();
        let mut data = normalize_data("id", "", "Pay", false, "", false);
        data.color = Some("red".to_owned());

        factory.factory(data.clone(), ButtonConfig::default(), "");
        data.color = None;
        factory.factory(data, ButtonConfig::default(), "");

        let calls = factory.renderer().calls.borrow();
        assert_eq!(calls[0].data.color.as_deref(), Some("blue"));
        assert_eq!(calls[1].data.color, None);
    }

    #[test]
    fn disabled_is_validated_beside_the_original() {
        let factory = factory();
        let mut data = normalize_data("id", "", "Pay", false, "", true);

        factory.factory(data.clone(), ButtonConfig::default(), "");
        data.disabled = "yes".to_owned();
        factory.factory(data, ButtonConfig::default(), "");

        let calls = factory.renderer().calls.borrow();
        assert_eq!(calls[0].data.disabled, "true");
        assert_eq!(calls[0].data.disabled_flag, Some(Flag::True));
        assert_eq!(calls[1].data.disabled, "yes");
        assert_eq!(calls[1].data.disabled_flag, Some(Flag::False));
    }

    #[test]
    fn button_type_mirrors_config_type() {
        let factory = factory();
        let data = normalize_data("id", "submit", "Pay", false, "", false);
        assert_eq!(data.button_type, "submit");

        factory.factory(data, normalize_config("", ""), "");
        let call = only_call(&factory);

        assert_eq!(call.config.r#type, "button");
        assert_eq!(call.data.button_type, "button");
    }

    #[test]
    fn empty_selector_is_not_resolved() {
        let factory = factory();

        factory.factory(ButtonData::default(), ButtonConfig::default(), "");

        assert!(factory.renderer().resolved.borrow().is_empty());
        assert_eq!(only_call(&factory).anchor, None);
    }

    #[test]
    fn unmatched_selector_is_passed_through() {
        let factory = factory();

        let output = factory.factory(ButtonData::default(), ButtonConfig::default(), "#nowhere");

        assert_eq!(output, 1);
        assert_eq!(*factory.renderer().resolved.borrow(), ["#nowhere"]);
        assert_eq!(only_call(&factory).anchor, None);
    }

    #[test]
    fn checkout_with_defaults() {
        let factory = factory();

        factory.create_checkout_button("#mount", &ButtonOptions::default());
        let call = only_call(&factory);

        assert_eq!(call.data.label, FILLER.to_string());
        assert_eq!(call.data.locale, "en_US");
        assert_eq!(call.data.color, None);
        assert_eq!(call.data.tagline.as_deref(), Some("false"));
        assert_eq!(call.config.label.as_deref(), Some("checkout"));
        assert_eq!(call.config.style, None);
    }

    #[test]
    fn checkout_ignores_style() {
        let factory = factory();
        let options = ButtonOptions {
            style: "secondary".to_owned(),
            ..ButtonOptions::default()
        };

        factory.create_checkout_button("", &options);

        assert_eq!(only_call(&factory).config.style, None);
    }

    #[test]
    fn style_button() {
        let factory = factory();
        let options = ButtonOptions {
            id: "styled".to_owned(),
            size: "small".to_owned(),
            color: "gold".to_owned(),
            kind: "credit".to_owned(),
            style: "quaternary".to_owned(),
            ..ButtonOptions::default()
        };

        factory.create_style_button("#mount", &options);
        let call = only_call(&factory);

        assert_eq!(call.config.style.as_deref(), Some("quaternary"));
        assert_eq!(call.config.size.as_deref(), Some("small"));
        assert_eq!(call.config.label, None);
        assert_eq!(call.data.color, None);
        assert_eq!(call.data.tagline, None);
        assert_eq!(call.data.id, "styled");
    }

    #[test]
    fn invalid_style_falls_back() {
        let factory = factory();
        let options = ButtonOptions {
            style: "Primary".to_owned(),
            ..ButtonOptions::default()
        };

        factory.create_style_button("", &options);

        assert_eq!(only_call(&factory).config.style.as_deref(), Some("primary"));
    }
}
