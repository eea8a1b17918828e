//! Left sidebar: brand, quick actions, popular destinations, travel tips.
//!
//! Hidden below the large breakpoint by CSS; the header shows a compact
//! brand mark instead.

use assistant::catalog::{APP_TAGLINE, APP_TITLE, DESTINATIONS, QUICK_ACTIONS, TRAVEL_TIPS};
use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::reply::send_prompt;

#[component]
pub fn Sidebar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let quick_actions = QUICK_ACTIONS
        .iter()
        .map(|action| {
            let prompt = action.prompt;
            view! {
                <button class="sidebar__action" on:click=move |_| send_prompt(chat, prompt)>
                    {format!("{} {}", action.icon, action.label)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let destinations = DESTINATIONS
        .iter()
        .map(|dest| {
            view! {
                <div class="sidebar__destination">
                    <span>{format!("{} {}", dest.flag, dest.name)}</span>
                    <span class="sidebar__price">{dest.price_label()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let tips = TRAVEL_TIPS
        .iter()
        .map(|tip| {
            view! {
                <li class="sidebar__tip">
                    <span class="sidebar__bullet">"•"</span>
                    <span>{*tip}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <div class="brand-mark brand-mark--large">"✈"</div>
                <div>
                    <h1 class="sidebar__title">{APP_TITLE}</h1>
                    <p class="sidebar__tagline">{APP_TAGLINE}</p>
                </div>
            </div>

            <div class="sidebar__cards">
                <section class="sidebar-card sidebar-card--blue">
                    <h3 class="sidebar-card__title">"✨ Quick Actions"</h3>
                    <div class="sidebar-card__body">{quick_actions}</div>
                </section>

                <section class="sidebar-card sidebar-card--purple">
                    <h3 class="sidebar-card__title">"📍 Popular Destinations"</h3>
                    <div class="sidebar-card__body">{destinations}</div>
                </section>

                <section class="sidebar-card sidebar-card--green">
                    <h3 class="sidebar-card__title">"📅 Travel Tips"</h3>
                    <ul class="sidebar-card__body">{tips}</ul>
                </section>
            </div>
        </aside>
    }
}
