//! Path of the opened file.
//!
//! Ancestor folders are shown as inactive links (hidden on narrow screens);
//! the file itself is the current page. With nothing opened a skeleton bar
//! takes its place.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/breadcrumb.module.css");

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let opened = Memo::new(move |_| ctx.viewer.with(|v| v.opened().map(str::to_string)));

    move || {
        let Some(path) = opened.get() else {
            return view! { <div class=css::skeleton></div> }.into_any();
        };

        let segments: Vec<String> = path.split('/').map(str::to_string).collect();
        let last = segments.len() - 1;

        view! {
            <nav class=css::breadcrumb aria-label="breadcrumb">
                <ol class=css::list>
                    {segments
                        .into_iter()
                        .enumerate()
                        .map(|(idx, segment)| {
                            if idx < last {
                                view! {
                                    <li class=css::ancestor>
                                        <span class=css::link>{segment}</span>
                                    </li>
                                    <li class=css::separator role="presentation" aria-hidden="true">
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </li>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <li class=css::item>
                                        <span class=css::page aria-current="page">{segment}</span>
                                    </li>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()}
                </ol>
            </nav>
        }
        .into_any()
    }
}
