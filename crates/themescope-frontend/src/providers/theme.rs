use themescope::errors::ScopeError;
use themescope::log::{debug, error};
use themescope::{Scope, Theme, ThemeView, callback};
use web_sys::window;
use yew::prelude::*;

/// What a provider publishes: its position in the scope tree and the view read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub scope: Scope,
    pub view: ThemeView,
}

impl ThemeContext {
    pub fn new(scope: Scope) -> Result<Self, ScopeError> {
        let view = scope.read()?;
        Ok(Self { scope, view })
    }

    pub fn theme(&self) -> Theme {
        self.view.value
    }

    /// Callback that toggles the scope's theme once per emit.
    pub fn toggle(&self) -> Callback<()> {
        let mutate = self.view.mutate.clone();
        callback!([mutate] {
            mutate.mutate();
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub initial: Theme,
    /// Mirror the theme onto the `dark` class of the document element.
    #[prop_or_default]
    pub sync_document: bool,
    pub children: Children,
}

fn apply_document_class(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(html) = document.document_element() {
            let class_list = html.class_list();
            match theme {
                Theme::Dark => {
                    class_list.add_1("dark").ok();
                }
                Theme::Light => {
                    class_list.remove_1("dark").ok();
                }
            }
        }
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let parent = use_context::<ThemeContext>();
    let initial = props.initial;
    // Nested providers extend the enclosing provider's scope, shadowing it below here.
    let scope = use_memo((), move |_| {
        parent
            .map(|ctx| ctx.scope)
            .unwrap_or_else(Scope::root)
            .provide(initial)
    });
    let force_update = use_force_update();

    // Re-render this provider, and through the context every reader below it,
    // whenever the scope's theme changes.
    {
        let scope = (*scope).clone();
        use_effect_with((), move |_| {
            let subscription = scope
                .subscribe(move |theme| {
                    debug!(%theme, "theme provider re-rendering");
                    force_update.force_update();
                })
                .ok();
            move || drop(subscription)
        });
    }

    let context = ThemeContext::new((*scope).clone());
    let theme = context.as_ref().ok().map(ThemeContext::theme);

    use_effect_with((theme, props.sync_document), |(theme, sync_document)| {
        if let (Some(theme), true) = (theme, *sync_document) {
            apply_document_class(*theme);
        }
    });

    match context {
        Ok(context) => html! {
            <ContextProvider<ThemeContext> context={context}>
                {props.children.clone()}
            </ContextProvider<ThemeContext>>
        },
        Err(err) => {
            error!(%err, "theme provider scope has no binding");
            html! { {props.children.clone()} }
        }
    }
}

/// Reads the nearest enclosing [`ThemeProvider`], panicking when there is none.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}

/// Reads the nearest enclosing [`ThemeProvider`].
#[hook]
pub fn use_theme_checked() -> Result<ThemeContext, ScopeError> {
    use_context::<ThemeContext>().ok_or(ScopeError::NoEnclosingScope)
}
