use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
            Severity::Warning => "notification-warning",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Severity::Success => "var(--success-color)",
            Severity::Error => "var(--error-color)",
            Severity::Warning => "var(--warning-color)",
            Severity::Info => "var(--primary-color)",
        }
    }
}

/// What callers hand to `notify`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    fn transform(self) -> &'static str {
        match self {
            ToastPhase::Shown => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
    pub phase: ToastPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    Push(Notice),
    SlideIn(u32),
    SlideOut(u32),
    Remove(u32),
}

/// Toasts currently on the page, oldest first. There is no cap: concurrent
/// notifications simply stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl ToastList {
    fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(notice) => {
                self.toasts.push(Toast {
                    id: self.next_id,
                    notice,
                    phase: ToastPhase::Entering,
                });
                self.next_id = self.next_id.wrapping_add(1);
            }
            ToastAction::SlideIn(id) => self.set_phase(id, ToastPhase::Shown),
            ToastAction::SlideOut(id) => self.set_phase(id, ToastPhase::Leaving),
            ToastAction::Remove(id) => self.toasts.retain(|t| t.id != id),
        }
    }

    fn set_phase(&mut self, id: u32, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Timer table for a freshly pushed toast, offsets measured from creation.
pub fn lifecycle(id: u32) -> [(u32, ToastAction); 3] {
    let leave_at = config::TOAST_DISPLAY_MS;
    [
        (config::TOAST_ENTER_MS, ToastAction::SlideIn(id)),
        (leave_at, ToastAction::SlideOut(id)),
        (leave_at + config::TOAST_EXIT_MS, ToastAction::Remove(id)),
    ]
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    slot: usize,
    on_action: Callback<ToastAction>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let timers: Vec<Timeout> = lifecycle(*id)
                    .into_iter()
                    .map(|(delay, action)| {
                        let on_action = on_action.clone();
                        Timeout::new(delay, move || on_action.emit(action))
                    })
                    .collect();
                move || drop(timers)
            },
            props.toast.id,
        );
    }

    let Toast { notice, phase, .. } = &props.toast;
    let style = format!(
        "position: fixed; top: {}px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: var(--border-radius); box-shadow: var(--box-shadow); \
         z-index: 3000; transform: {}; transition: transform 0.3s ease; max-width: 300px; \
         word-wrap: break-word;",
        20 + props.slot * 72,
        notice.severity.background(),
        phase.transform(),
    );

    html! {
        <div class={classes!("notification", notice.severity.class())} style={style}>
            {&notice.message}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_action: Callback<ToastAction>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <>
            { for props.toasts.iter().enumerate().map(|(slot, toast)| html! {
                <ToastView
                    key={toast.id}
                    toast={toast.clone()}
                    slot={slot}
                    on_action={props.on_action.clone()}
                />
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Phase a toast should be in `elapsed` ms after creation.
    fn phase_at(elapsed: u32) -> Option<ToastPhase> {
        match elapsed {
            0..=99 => Some(ToastPhase::Entering),
            100..=2999 => Some(ToastPhase::Shown),
            3000..=3299 => Some(ToastPhase::Leaving),
            _ => None,
        }
    }

    fn reduce_all(list: ToastList, actions: impl IntoIterator<Item = ToastAction>) -> ToastList {
        let mut list = Rc::new(list);
        for action in actions {
            list = list.reduce(action);
        }
        (*list).clone()
    }

    #[test]
    fn lifecycle_offsets_match_display_window() {
        let offsets: Vec<u32> = lifecycle(0).iter().map(|(at, _)| *at).collect();
        assert_eq!(offsets, [100, 3000, 3300]);
    }

    #[test]
    fn lifecycle_agrees_with_phase_timeline() {
        let mut list = reduce_all(ToastList::default(), [ToastAction::Push(Notice::info("hi"))]);
        let id = list.toasts[0].id;
        for (at, action) in lifecycle(id) {
            list = reduce_all(list, [action]);
            assert_eq!(list.toasts.first().map(|t| t.phase), phase_at(at));
        }
        assert!(list.toasts.is_empty());
    }

    #[test]
    fn concurrent_toasts_are_independent() {
        let list = reduce_all(
            ToastList::default(),
            [
                ToastAction::Push(Notice::success("one")),
                ToastAction::Push(Notice::error("two")),
                ToastAction::SlideIn(1),
                ToastAction::Remove(0),
            ],
        );
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].notice, Notice::error("two"));
        assert_eq!(list.toasts[0].phase, ToastPhase::Shown);
    }

    #[test]
    fn stale_ids_are_ignored() {
        let list = reduce_all(
            ToastList::default(),
            [
                ToastAction::Push(Notice::warning("w")),
                ToastAction::Remove(0),
                ToastAction::SlideOut(0),
                ToastAction::Remove(0),
            ],
        );
        assert!(list.toasts.is_empty());
    }

    #[test]
    fn ids_keep_increasing_after_removal() {
        let list = reduce_all(
            ToastList::default(),
            [
                ToastAction::Push(Notice::info("a")),
                ToastAction::Remove(0),
                ToastAction::Push(Notice::info("b")),
            ],
        );
        assert_eq!(list.toasts[0].id, 1);
    }
}
