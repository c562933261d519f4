use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::observer::VisibilityObserver;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillPhase {
    /// Not yet seen; rendered at its target width.
    Resting,
    Reset,
    Filled,
}

impl FillPhase {
    pub fn width(self, target: u8) -> String {
        match self {
            FillPhase::Reset => "0%".to_string(),
            FillPhase::Resting | FillPhase::Filled => format!("{}%", target.min(100)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressFillProps {
    /// Fill width in percent.
    pub target: u8,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(ProgressFill)]
pub fn progress_fill(props: &ProgressFillProps) -> Html {
    let node = use_node_ref();
    let phase = use_state(|| FillPhase::Resting);

    {
        let node = node.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let pending = Rc::new(RefCell::new(None::<Timeout>));
                let observer = node.cast::<Element>().and_then(|el| {
                    let pending = pending.clone();
                    VisibilityObserver::observe_once(&el, config::PROGRESS_THRESHOLD, None, move || {
                        phase.set(FillPhase::Reset);
                        let phase = phase.clone();
                        *pending.borrow_mut() = Some(Timeout::new(config::PROGRESS_FILL_DELAY_MS, move || {
                            phase.set(FillPhase::Filled);
                        }));
                    })
                    .map_err(|e| log::warn!("Progress observer unavailable: {:?}", e))
                    .ok()
                });
                move || {
                    drop(observer);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="progress-bar">
            <div
                ref={node}
                class="progress-fill"
                style={format!("width: {};", phase.width(props.target))}
            ></div>
            if let Some(label) = &props.label {
                <span class="progress-label">{label.clone()}</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_resets_then_returns_to_target() {
        let widths: Vec<_> = [FillPhase::Resting, FillPhase::Reset, FillPhase::Filled]
            .iter()
            .map(|p| p.width(72))
            .collect();
        assert_eq!(widths, ["72%", "0%", "72%"]);
    }

    #[test]
    fn width_is_capped() {
        assert_eq!(FillPhase::Filled.width(150), "100%");
    }
}
