mod components;
mod providers;

use themescope::Theme;
use themescope::log::info;
use yew::prelude::*;

use components::{Card, Section, ThemeStatus, ThemedButton, ThemedPage, ThemedPanel};
use providers::ThemeProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider sync_document={true}>
            <ThemedPage>
                <Card>
                    <h1>{ "Shared Theme Example" }</h1>
                    <p>{ "Click the button to toggle between light and dark themes" }</p>

                    <Section title="Page theme">
                        <ThemedButton />
                        <ThemeStatus />
                    </Section>

                    // The inner provider shadows the page theme for everything below it.
                    <Section
                        title="Nested theme"
                        description="This block has its own provider and toggles independently."
                    >
                        <ThemeProvider initial={Theme::Dark}>
                            <ThemedPanel>
                                <ThemedButton />
                                <ThemeStatus />
                            </ThemedPanel>
                        </ThemeProvider>
                    </Section>
                </Card>
            </ThemedPage>
        </ThemeProvider>
    }
}

fn main() {
    themescope::log::setup().expect("Failed to setup logging");
    info!("starting themescope frontend");
    yew::Renderer::<App>::new().render();
}
