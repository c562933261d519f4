use yew::prelude::*;

use crate::components::notification::Notice;
use crate::components::reveal::{Reveal, RevealKind};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportAction {
    LiveChat,
    EmailSupport,
    Documentation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupportOutcome {
    Notify(Notice),
    Redirect(String),
}

impl SupportAction {
    pub const ALL: [SupportAction; 3] = [
        SupportAction::LiveChat,
        SupportAction::EmailSupport,
        SupportAction::Documentation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SupportAction::LiveChat => "Live Chat",
            SupportAction::EmailSupport => "Email Support",
            SupportAction::Documentation => "Documentation",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            SupportAction::LiveChat => "Talk to our team in real time.",
            SupportAction::EmailSupport => "Send us a message and we'll reply within 24 hours.",
            SupportAction::Documentation => "Guides, FAQs and troubleshooting.",
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            SupportAction::LiveChat => "Start Chat",
            SupportAction::EmailSupport => "Send Email",
            SupportAction::Documentation => "Read Docs",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            SupportAction::LiveChat => "fas fa-comments",
            SupportAction::EmailSupport => "fas fa-envelope",
            SupportAction::Documentation => "fas fa-book",
        }
    }

    pub fn dispatch(self) -> SupportOutcome {
        match self {
            SupportAction::LiveChat => SupportOutcome::Notify(Notice::info("Live chat feature coming soon!")),
            SupportAction::EmailSupport => SupportOutcome::Redirect(support_mailto()),
            SupportAction::Documentation => {
                SupportOutcome::Notify(Notice::info("Documentation will open in a new tab"))
            }
        }
    }
}

pub fn support_mailto() -> String {
    format!(
        "mailto:{}?subject={}",
        config::SUPPORT_EMAIL,
        urlencoding::encode(config::SUPPORT_SUBJECT)
    )
}

#[derive(Properties, PartialEq)]
pub struct SupportCardProps {
    pub action: SupportAction,
    pub on_notify: Callback<Notice>,
}

#[function_component(SupportCard)]
pub fn support_card(props: &SupportCardProps) -> Html {
    let onclick = {
        let action = props.action;
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: MouseEvent| match action.dispatch() {
            SupportOutcome::Notify(notice) => on_notify.emit(notice),
            SupportOutcome::Redirect(href) => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(&href) {
                        log::warn!("Failed to open mail client: {:?}", e);
                    }
                }
            }
        })
    };

    let action = props.action;
    html! {
        <Reveal kind={RevealKind::SupportCard}>
            <div class="support-icon"><i class={action.icon()}></i></div>
            <h3>{action.title()}</h3>
            <p>{action.blurb()}</p>
            <button class="btn btn-secondary" onclick={onclick}>{action.button_label()}</button>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_support_redirects_to_mail_client() {
        assert_eq!(
            SupportAction::EmailSupport.dispatch(),
            SupportOutcome::Redirect(
                "mailto:support@roboost.com?subject=RoBoost%20V2%20Support%20Request".to_string()
            )
        );
    }

    #[test]
    fn chat_and_docs_are_info_toasts() {
        assert_eq!(
            SupportAction::LiveChat.dispatch(),
            SupportOutcome::Notify(Notice::info("Live chat feature coming soon!"))
        );
        assert_eq!(
            SupportAction::Documentation.dispatch(),
            SupportOutcome::Notify(Notice::info("Documentation will open in a new tab"))
        );
    }

    #[test]
    fn titles_are_unique() {
        let titles: Vec<_> = SupportAction::ALL.iter().map(|a| a.title()).collect();
        assert_eq!(titles, ["Live Chat", "Email Support", "Documentation"]);
    }
}
