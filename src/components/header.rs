use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::page_link::PageLink;
use crate::dom;
use crate::hooks::{use_header_scrolled, use_scroll_spy};
use crate::navigation::{activates_logo, logo_transform, MenuAction, MenuState};

/// Section ids and their nav labels, in page order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("team", "Team"),
    ("contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let is_scrolled = use_header_scrolled();
    let spy = use_scroll_spy();
    let logo_hovered = use_state_eq(|| false);
    let logo_ref = use_node_ref();
    let nav_area = use_node_ref();

    {
        let menu = menu.dispatcher();
        use_click_away(nav_area.clone(), move |_: Event| {
            menu.dispatch(MenuAction::ClickedOutside);
        });
    }

    {
        let menu = menu.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(MenuAction::Escape);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::LinkClicked))
    };

    let logo_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::smooth_scroll_to(0.0);
    });

    let logo_keydown = {
        let logo_ref = logo_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if activates_logo(&e.key()) {
                e.prevent_default();
                if let Some(logo) = logo_ref.cast::<HtmlElement>() {
                    logo.click();
                }
            }
        })
    };

    let hover = |hovered: bool| {
        let logo_hovered = logo_hovered.clone();
        Callback::from(move |_: MouseEvent| logo_hovered.set(hovered))
    };

    html! {
        <header class={classes!("header", is_scrolled.then_some("scrolled"))}>
            <nav class="nav container">
                <a
                    href="#"
                    class="header-logo"
                    tabindex="0"
                    ref={logo_ref}
                    style={format!("transform: {};", logo_transform(*logo_hovered))}
                    onclick={logo_click}
                    onkeydown={logo_keydown}
                    onmouseenter={hover(true)}
                    onmouseleave={hover(false)}
                >
                    {"Monteville"}
                    <span class="header-logo__tagline">{"Supplies & Services"}</span>
                </a>

                <div class="nav__area" ref={nav_area}>
                    <button
                        id="nav-toggle"
                        class={classes!("nav__toggle", menu.open.then_some("active"))}
                        aria-label="Toggle navigation"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <ul id="nav-menu" class={classes!("nav__menu", menu.open.then_some("show"))}>
                        { for NAV_SECTIONS.iter().map(|(id, label)| {
                            let href = format!("#{}", id);
                            let active = spy.is_link_active(&href);
                            html! {
                                <li class="nav__item">
                                    <PageLink
                                        href={href}
                                        classes={classes!("nav__link", active.then_some("active"))}
                                        on_navigate={close_menu.clone()}
                                    >
                                        {*label}
                                    </PageLink>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </nav>
        </header>
    }
}
