use yew::prelude::*;
use web_sys::MouseEvent;

/// Accordion rule: collapse everything, then reopen the clicked entry
/// unless it was the open one.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

const FAQ_ENTRIES: [(&str, &str); 5] = [
    (
        "Is RoBoost V2 free to download?",
        "Yes. The installer for every platform is free, and the core optimizer works without an account.",
    ),
    (
        "Which operating systems are supported?",
        "Windows 10 and later, macOS 11 and later, and current releases of the major Linux distributions.",
    ),
    (
        "Will RoBoost V2 slow down my machine while it runs?",
        "No. Optimization passes run at low priority and pause automatically when you start a game or a heavy workload.",
    ),
    (
        "How do I update to a new version?",
        "RoBoost V2 checks for updates on startup and offers to install them. You can also download the latest installer from this page at any time.",
    ),
    (
        "How do I uninstall it?",
        "Use your system's standard uninstaller. All settings are removed with the application.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq">
            <div class="container">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle_open(*open, index)))
                        };
                        html! {
                            <FaqItem
                                question={*question}
                                answer={*answer}
                                open={*open == Some(index)}
                                on_toggle={on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clicking_open_entry_collapses_it() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 2), None);
        assert_eq!(toggle_open(Some(2), 0), Some(0));
    }

    proptest! {
        #[test]
        fn last_click_decides_open_entry(clicks in proptest::collection::vec(0usize..FAQ_ENTRIES.len(), 1..40)) {
            let mut open = None;
            let mut markers = [false; FAQ_ENTRIES.len()];
            for &clicked in &clicks {
                let was_open = open == Some(clicked);
                open = toggle_open(open, clicked);
                markers = [false; FAQ_ENTRIES.len()];
                if let Some(i) = open {
                    markers[i] = true;
                }
                prop_assert_eq!(open.is_none(), was_open);
            }
            prop_assert!(markers.iter().filter(|m| **m).count() <= 1);
            let last = *clicks.last().unwrap();
            prop_assert!(open.is_none() || open == Some(last));
        }
    }
}
