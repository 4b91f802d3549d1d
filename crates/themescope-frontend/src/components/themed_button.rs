use themescope::callback;
use themescope::style::Presentation;
use yew::prelude::*;

use crate::providers::use_theme;

/// Button that shows the nearest theme and toggles it on click.
#[function_component(ThemedButton)]
pub fn themed_button() -> Html {
    let ctx = use_theme();
    let hovered = use_state(|| false);

    let onclick = {
        let toggle = ctx.toggle();
        callback!([toggle] |_event: MouseEvent| toggle.emit(()))
    };
    let onmouseenter = callback!([hovered] |_event: MouseEvent| hovered.set(true));
    let onmouseleave = callback!([hovered] |_event: MouseEvent| hovered.set(false));

    let presentation = Presentation::with_hover(ctx.theme(), *hovered);

    html! {
        <button
            type="button"
            style={presentation.button.css()}
            data-theme={presentation.theme.as_str()}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            { presentation.label }
        </button>
    }
}
