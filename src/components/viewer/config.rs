//! YAML/TOML viewer: a collapsible key/value tree with a source tab.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use super::editor::CodeEditor;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{ConfigNode, ScalarKind, parse_config};
use crate::models::ConfigFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Tree,
    Source,
}

#[component]
pub fn ConfigView(path: String, format: ConfigFormat) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tab = RwSignal::new(Tab::Tree);

    let parsed = Memo::new(move |_| {
        ctx.viewer.with(|v| {
            parse_config(format, v.text().unwrap_or_default()).map_err(|e| e.to_string())
        })
    });

    let tab_class = move |which: Tab| {
        move || {
            if tab.get() == which {
                format!("{} {}", css::tab, css::tabActive)
            } else {
                css::tab.to_string()
            }
        }
    };

    view! {
        <div class=css::config>
            <div class=css::tabs role="tablist">
                <button class=tab_class(Tab::Tree) role="tab" on:click=move |_| tab.set(Tab::Tree)>
                    "Tree"
                </button>
                <button class=tab_class(Tab::Source) role="tab" on:click=move |_| tab.set(Tab::Source)>
                    "Source"
                </button>
            </div>
            {move || match tab.get() {
                Tab::Source => view! { <CodeEditor path=path.clone() /> }.into_any(),
                Tab::Tree => view! {
                    <div class=css::configTree>
                        {move || match parsed.get() {
                            Ok(root) => config_node(None, root, 0),
                            Err(message) => view! {
                                <div class=css::error role="alert">
                                    {format!("Could not parse file: {}", message)}
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Render one node. Containers below the first level start collapsed.
fn config_node(key: Option<String>, node: ConfigNode, depth: usize) -> AnyView {
    match node {
        ConfigNode::Scalar { text, kind } => {
            let value_class = match kind {
                ScalarKind::Null => css::valueNull,
                ScalarKind::Bool => css::valueBool,
                ScalarKind::Number => css::valueNumber,
                ScalarKind::String => css::valueString,
            };
            view! {
                <div class=css::entry>
                    {key.map(|key| view! { <span class=css::key>{key}": "</span> })}
                    <span class=value_class>{text}</span>
                </div>
            }
            .into_any()
        }
        container => {
            let summary = match &container {
                ConfigNode::List(items) => format!("[{}]", items.len()),
                _ => format!("{{{}}}", container.child_count()),
            };
            let children: Vec<(String, ConfigNode)> = match container {
                ConfigNode::List(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item))
                    .collect(),
                ConfigNode::Map(entries) => entries,
                ConfigNode::Scalar { .. } => Vec::new(),
            };

            // The document root has no header row
            let Some(key) = key else {
                return view! {
                    <div class=css::branch>
                        {children
                            .into_iter()
                            .map(|(k, v)| config_node(Some(k), v, depth + 1))
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any();
            };

            let open = RwSignal::new(depth <= 1);
            view! {
                <div class=css::entry>
                    <button class=css::entryToggle on:click=move |_| open.update(|o| *o = !*o)>
                        <span class=move || {
                            if open.get() {
                                format!("{} {}", css::chevron, css::chevronOpen)
                            } else {
                                css::chevron.to_string()
                            }
                        }>
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </span>
                        <span class=css::key>{key}</span>
                        <span class=css::summary>{summary}</span>
                    </button>
                    <Show when=move || open.get()>
                        <div class=css::branch>
                            {children
                                .iter()
                                .cloned()
                                .map(|(k, v)| config_node(Some(k), v, depth + 1))
                                .collect::<Vec<_>>()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}
