use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::observer::VisibilityObserver;

/// Content-card categories that animate in when scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    DownloadCard,
    Step,
    RequirementCard,
    SupportCard,
}

impl RevealKind {
    pub fn class(self) -> &'static str {
        match self {
            RevealKind::DownloadCard => "download-card",
            RevealKind::Step => "step",
            RevealKind::RequirementCard => "requirement-card",
            RevealKind::SupportCard => "support-card",
        }
    }
}

pub fn reveal_classes(kind: RevealKind, revealed: bool) -> Classes {
    classes!(kind.class(), "animate-on-scroll", revealed.then_some("animate"))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub kind: RevealKind,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                // Only ever flips false -> true; the observer stops after the first hit.
                let guard = node.cast::<Element>().and_then(|el| {
                    VisibilityObserver::observe_once(
                        &el,
                        config::REVEAL_THRESHOLD,
                        Some(config::REVEAL_ROOT_MARGIN),
                        move || revealed.set(true),
                    )
                    .map_err(|e| log::warn!("Reveal observer unavailable: {:?}", e))
                    .ok()
                });
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={reveal_classes(props.kind, *revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_carries_the_common_marker() {
        for kind in [
            RevealKind::DownloadCard,
            RevealKind::Step,
            RevealKind::RequirementCard,
            RevealKind::SupportCard,
        ] {
            let hidden = reveal_classes(kind, false);
            assert!(hidden.contains("animate-on-scroll"));
            assert!(hidden.contains(kind.class()));
            assert!(!hidden.contains("animate"));
            assert!(reveal_classes(kind, true).contains("animate"));
        }
    }
}
