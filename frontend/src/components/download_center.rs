use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::components::notification::Notice;
use crate::components::reveal::{Reveal, RevealKind};
use crate::config;
use crate::download::{trigger_download, DownloadError, ModalState, Platform, Stage};

#[derive(Properties, PartialEq)]
pub struct DownloadCenterProps {
    pub on_notify: Callback<Notice>,
}

/// Closes only for clicks on the backdrop itself. Clicks inside the content
/// panel have a descendant as their target.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

pub enum DownloadMsg {
    Start(Platform),
    Advance(u64),
    Close,
}

/// Download cards plus the progress modal they open.
pub struct DownloadCenter {
    modal: ModalState,
    modal_ref: NodeRef,
    // Dropping the handle cancels the timer.
    pending: Option<Timeout>,
}

impl DownloadCenter {
    fn schedule_next(&mut self, ctx: &Context<Self>) {
        self.pending = self.modal.session().and_then(|session| {
            let delay = session.next_delay()?;
            let generation = session.generation;
            let link = ctx.link().clone();
            Some(Timeout::new(delay, move || link.send_message(DownloadMsg::Advance(generation))))
        });
    }

    fn close(&mut self) {
        self.pending = None;
        self.modal.close();
    }

    fn handle_download_error(&mut self, ctx: &Context<Self>, error: DownloadError) {
        if let Some(session) = self.modal.session() {
            gloo_console::error!(format!(
                "Download error for {}: {}",
                session.platform.id(),
                error
            ));
            ctx.props().on_notify.emit(Notice::error(session.failure_message()));
        }
        self.close();
    }
}

impl Component for DownloadCenter {
    type Message = DownloadMsg;
    type Properties = DownloadCenterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            modal: ModalState::default(),
            modal_ref: NodeRef::default(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DownloadMsg::Start(platform) => {
                log::debug!("Download requested for {}", platform.id());
                self.modal.start(platform);
                self.schedule_next(ctx);
                true
            }
            DownloadMsg::Advance(generation) => match self.modal.advance(generation) {
                None => false,
                Some(Stage::Finalizing) => {
                    let platform = self.modal.active_platform();
                    match platform.map(trigger_download) {
                        Some(Err(e)) => self.handle_download_error(ctx, e),
                        _ => self.schedule_next(ctx),
                    }
                    true
                }
                Some(Stage::Done) => {
                    if let Some(session) = self.modal.session() {
                        ctx.props().on_notify.emit(Notice::success(session.success_message()));
                    }
                    self.close();
                    true
                }
                Some(_) => {
                    self.schedule_next(ctx);
                    true
                }
            },
            DownloadMsg::Close => {
                if !self.modal.is_open() {
                    return false;
                }
                self.close();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let active = self.modal.active_platform();

        let close = link.callback(|_: MouseEvent| DownloadMsg::Close);
        // Yew delegates listeners to the app root, so compare against the modal node itself.
        let backdrop = {
            let modal_ref = self.modal_ref.clone();
            link.batch_callback(move |e: MouseEvent| {
                let target = e.target_dyn_into::<Element>();
                let modal = modal_ref.cast::<Element>();
                is_backdrop_click(target.as_ref(), modal.as_ref()).then_some(DownloadMsg::Close)
            })
        };

        let modal_style = if self.modal.is_open() { "display: block;" } else { "display: none;" };
        let status = self.modal.session().map(|s| s.status_text()).unwrap_or_default();

        html! {
            <>
                <div class="download-grid">
                    { for Platform::ALL.iter().map(|&platform| {
                        let loading = active == Some(platform);
                        let onclick = link.callback(move |_: MouseEvent| DownloadMsg::Start(platform));
                        html! {
                            <Reveal kind={RevealKind::DownloadCard}>
                                <div class="platform-icon"><i class={platform.icon()}></i></div>
                                <h3>{platform.label()}</h3>
                                <p class="platform-requirements">{platform.requirements()}</p>
                                <button
                                    class="btn btn-primary download-btn"
                                    data-platform={platform.id()}
                                    disabled={loading}
                                    onclick={onclick}
                                >
                                    if loading {
                                        <i class="fas fa-spinner fa-spin"></i>{" Loading..."}
                                    } else {
                                        <i class="fas fa-download"></i>{format!(" Download for {}", platform.label())}
                                    }
                                </button>
                            </Reveal>
                        }
                    }) }
                </div>

                <div id="downloadModal" ref={self.modal_ref.clone()} class="modal" style={modal_style} onclick={backdrop}>
                    <div class="modal-content">
                        <span class="close" onclick={close}>{"×"}</span>
                        <h3>{format!("Downloading {}", config::PRODUCT_NAME)}</h3>
                        <div class="download-spinner"><i class="fas fa-circle-notch fa-spin"></i></div>
                        <p id="downloadStatus">{status}</p>
                    </div>
                </div>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_backdrop_click;

    #[test]
    fn click_on_backdrop_closes() {
        let backdrop = "downloadModal";
        assert!(is_backdrop_click(Some(&backdrop), Some(&backdrop)));
    }

    #[test]
    fn click_inside_content_keeps_modal_open() {
        assert!(!is_backdrop_click(Some(&"modal-content"), Some(&"downloadModal")));
        assert!(!is_backdrop_click(Some(&"close"), Some(&"downloadModal")));
    }

    #[test]
    fn unmounted_modal_or_missing_target_never_closes() {
        assert!(!is_backdrop_click(Some(&"downloadModal"), None));
        assert!(!is_backdrop_click::<&str>(None, Some(&"downloadModal")));
        assert!(!is_backdrop_click::<&str>(None, None));
    }
}
