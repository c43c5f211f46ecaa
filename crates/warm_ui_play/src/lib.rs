//! Browser playground for the Warm UI component library.
//!
//! The playground installs the library bundle onto its own [`WarmUiHost`], then renders every
//! story by registry name so each example passes through argument validation and the installer
//! exactly as an application would.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod stories;

use leptos::*;
use warm_ui::prelude::*;

pub use stories::{button_stories, ArgControl, ArgType, Story, BUTTON_ARG_TYPES};

fn arg_control_label(control: ArgControl) -> String {
    match control {
        ArgControl::Select(options) => {
            let options = options
                .iter()
                .map(|option| if option.is_empty() { "(unset)" } else { *option })
                .collect::<Vec<_>>();
            format!("select: {}", options.join(" | "))
        }
        ArgControl::Boolean => "boolean".to_string(),
        ArgControl::Number => "number".to_string(),
        ArgControl::Text => "text".to_string(),
    }
}

#[component]
fn ArgTable() -> impl IntoView {
    view! {
        <table class="play-args">
            <thead>
                <tr>
                    <th>"Argument"</th>
                    <th>"Control"</th>
                </tr>
            </thead>
            <tbody>
                {BUTTON_ARG_TYPES
                    .iter()
                    .map(|(name, control)| {
                        view! {
                            <tr>
                                <td>
                                    <code>{*name}</code>
                                </td>
                                <td>{arg_control_label(*control)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
/// Playground root: installs the library and renders the story catalog.
pub fn PlayApp() -> impl IntoView {
    let host = WarmUiHost::new();
    let report = host.use_installer(&installer());
    provide_warm_ui(host.clone());

    let accepted = create_rw_signal(0u32);
    let last_event = create_rw_signal::<Option<ActivationEvent>>(None);
    let on_activate = Callback::new(move |event: ActivationEvent| {
        accepted.update(|count| *count += 1);
        last_event.set(Some(event));
    });

    let saving = create_rw_signal(false);

    let stories = button_stories()
        .into_iter()
        .map(|story| {
            let rendered = host.render(
                story.component,
                ComponentProps {
                    args: story.args,
                    on_activate: Some(on_activate),
                },
            );
            view! {
                <section class="play-story" data-story=story.title>
                    <h2>{story.title}</h2>
                    {rendered}
                </section>
            }
        })
        .collect_view();

    view! {
        <main class="play">
            <header>
                <h1>"Warm UI"</h1>
                <p>"Installed: " {report.registered.join(", ")}</p>
                <p>
                    "Accepted activations: " {move || accepted.get()} " "
                    {move || {
                        last_event
                            .get()
                            .map(|event| format!("(last at {} ms)", event.at.as_millis()))
                    }}
                </p>
            </header>
            {stories}
            <section class="play-story" data-story="Loading toggle">
                <h2>"Loading toggle"</h2>
                <Button
                    variant=Variant::Primary
                    loading=saving
                    on_click=Callback::new(move |_| saving.set(true))
                >
                    "Save"
                </Button>
                <Button plain=true on_click=Callback::new(move |_| saving.set(false))>
                    "Reset"
                </Button>
            </section>
            <section class="play-story" data-story="Group">
                <h2>"Group"</h2>
                <ButtonGroup size=Size::Small variant=Variant::Info>
                    <Button icon="arrow-left" on_click=on_activate>"Previous"</Button>
                    <Button icon="arrow-right" on_click=on_activate>"Next"</Button>
                </ButtonGroup>
            </section>
            <ArgTable />
        </main>
    }
}

/// Mounts the playground onto the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <PlayApp /> })
}
