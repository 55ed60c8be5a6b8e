use yew::prelude::*;

use crate::dom;
use crate::navigation::anchor_target;

#[derive(Properties, PartialEq)]
pub struct PageLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that scrolls smoothly to in-page targets instead of jumping.
#[function_component(PageLink)]
pub fn page_link(props: &PageLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = anchor_target(&href) {
                e.prevent_default();
                dom::scroll_to_anchor(&target);
            }
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
