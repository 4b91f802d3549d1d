//! Page structure. [`ThemedPage`], [`ThemedPanel`] and [`ThemeStatus`] read the
//! theme; [`Card`] and [`Section`] receive children and nothing else.

use themescope::style::{ContainerStyle, Palette, Presentation, TRANSITION};
use yew::prelude::*;

use crate::providers::{use_theme, use_theme_checked};

#[derive(Properties, PartialEq)]
pub struct ChildrenProps {
    pub children: Children,
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub children: Children,
}

/// Top-level container, coloured from the nearest theme.
#[function_component(ThemedPage)]
pub fn themed_page(props: &ChildrenProps) -> Html {
    let ctx = use_theme();
    let style = ContainerStyle::for_theme(ctx.theme());

    html! {
        <div style={style.css()} data-theme={ctx.theme().as_str()}>
            <div style="text-align: center;">
                {props.children.clone()}
            </div>
        </div>
    }
}

/// Bordered block coloured from the nearest theme, for scopes nested inside a page.
#[function_component(ThemedPanel)]
pub fn themed_panel(props: &ChildrenProps) -> Html {
    let ctx = use_theme();
    let Palette {
        background,
        foreground,
        border,
    } = Palette::for_theme(ctx.theme());
    let style = format!(
        "background-color: {background}; color: {foreground}; border: 1px dashed {border}; \
         border-radius: 5px; padding: 16px; transition: {TRANSITION};"
    );

    html! {
        <div {style} data-theme={ctx.theme().as_str()}>
            {props.children.clone()}
        </div>
    }
}

/// Status line. Unlike the other themed components it renders outside a provider,
/// showing the scope error instead of panicking.
#[function_component(ThemeStatus)]
pub fn theme_status() -> Html {
    let text = match use_theme_checked() {
        Ok(ctx) => Presentation::for_theme(ctx.theme()).status,
        Err(err) => err.to_string(),
    };

    html! {
        <p style="opacity: 0.7; font-size: 14px;">{ text }</p>
    }
}

#[function_component(Card)]
pub fn card(props: &ChildrenProps) -> Html {
    html! {
        <div style="padding: 24px; margin: 16px 0;">
            {props.children.clone()}
        </div>
    }
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(description) = &props.description {
                    html! { <p>{ description.clone() }</p> }
                } else {
                    html! {}
                }
            }
            {props.children.clone()}
        </section>
    }
}
