use yew::prelude::*;

use crate::scroll::{fragment_id, scroll_to_section};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page target, e.g. `#download`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_follow: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Link that smooth-scrolls to its fragment target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(id) = fragment_id(&href) {
                scroll_to_section(id);
            }
            if let Some(on_follow) = &on_follow {
                on_follow.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
