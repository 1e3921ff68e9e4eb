use gloo_console::log;
use paybutton_factory::ButtonOptions;
use paybutton_web::exports::with_factory;
use silkenweb::{
    elements::html::{div, h2, Div},
    mount,
    prelude::{HtmlElement, ParentElement},
};

fn section(title: &'static str, mount_id: &'static str) -> Div {
    div().child(h2().text(title)).child(div().id(mount_id))
}

fn main() {
    let app = div()
        .child(section("Checkout", "checkout"))
        .child(section("Credit", "credit"))
        .child(section("Styled", "styled"));

    mount("app", app);

    let rendered = with_factory(|factory| {
        factory.create_checkout_button(
            "#checkout",
            &ButtonOptions {
                id: "demo-checkout".to_owned(),
                size: "large".to_owned(),
                shape: "pill".to_owned(),
                color: "gold".to_owned(),
                label: "Buy now".to_owned(),
                show_icon: true,
                tagline: true,
                ..ButtonOptions::default()
            },
        )?;

        factory.create_credit_button(
            "#credit",
            &ButtonOptions {
                id: "demo-credit".to_owned(),
                size: "medium".to_owned(),
                show_icon: true,
                ..ButtonOptions::default()
            },
        )?;

        factory.create_style_button(
            "#styled",
            &ButtonOptions {
                id: "demo-styled".to_owned(),
                label: "Donate".to_owned(),
                style: "secondary".to_owned(),
                ..ButtonOptions::default()
            },
        )
    });

    if let Err(e) = rendered {
        log!("Demo buttons not rendered", e);
    }
}
