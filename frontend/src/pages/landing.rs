use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::download_center::DownloadCenter;
use crate::components::notification::Notice;
use crate::components::progress_fill::ProgressFill;
use crate::components::reveal::{Reveal, RevealKind};
use crate::components::support::{SupportAction, SupportCard};
use crate::config;
use crate::download::Platform;
use crate::pages::faq::Faq;

const HERO_LOADING_TEXT: &str = "Initializing system...";
const HERO_READY_TEXT: &str = "System Ready - Download Available";

const INSTALL_STEPS: [(&str, &str); 3] = [
    ("Download", "Pick your platform above and grab the installer."),
    ("Install", "Run the installer and follow the short setup wizard."),
    ("Boost", "Launch RoBoost V2 and let it tune your system in one click."),
];

const BENCHMARKS: [(&str, u8); 4] = [
    ("Startup time", 85),
    ("Memory usage", 70),
    ("Frame pacing", 92),
    ("Disk cleanup", 64),
];

#[function_component(HeroProgress)]
fn hero_progress() -> Html {
    let filled = use_state(|| false);
    let ready = use_state(|| false);

    {
        let filled = filled.clone();
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                let fill = Timeout::new(config::HERO_FILL_DELAY_MS, move || filled.set(true));
                let label = Timeout::new(config::HERO_LABEL_DELAY_MS, move || ready.set(true));
                move || {
                    drop(fill);
                    drop(label);
                }
            },
            (),
        );
    }

    let width = if *filled { "100%" } else { "0%" };

    html! {
        <div class="hero-progress">
            <div class="progress-track">
                <div id="heroProgress" class="hero-progress-fill" style={format!("width: {};", width)}></div>
            </div>
            <span class="progress-text">{if *ready { HERO_READY_TEXT } else { HERO_LOADING_TEXT }}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_notify: Callback<Notice>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <main class="landing">
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1 class="hero-title">{config::PRODUCT_NAME}</h1>
                    <p class="hero-subtitle">
                        {"Faster boots, smoother frames and a cleaner disk. One download, every platform."}
                    </p>
                    <HeroProgress />
                    <AnchorLink href="#download" class={classes!("btn", "btn-primary", "btn-large")}>
                        {"Get RoBoost V2"}
                    </AnchorLink>
                </div>
            </section>

            <section id="download" class="downloads">
                <div class="container">
                    <h2 class="section-title">{"Download"}</h2>
                    <DownloadCenter on_notify={props.on_notify.clone()} />
                </div>
            </section>

            <section id="install" class="installation">
                <div class="container">
                    <h2 class="section-title">{"Get started in three steps"}</h2>
                    <div class="steps">
                        { for INSTALL_STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                            <Reveal kind={RevealKind::Step}>
                                <div class="step-number">{i + 1}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="requirements" class="requirements">
                <div class="container">
                    <h2 class="section-title">{"System Requirements"}</h2>
                    <div class="requirements-grid">
                        { for Platform::ALL.iter().map(|platform| html! {
                            <Reveal kind={RevealKind::RequirementCard}>
                                <h3><i class={platform.icon()}></i>{format!(" {}", platform.label())}</h3>
                                <p>{platform.requirements()}</p>
                            </Reveal>
                        }) }
                    </div>
                    <div class="benchmarks">
                        { for BENCHMARKS.iter().map(|(label, target)| html! {
                            <div class="benchmark">
                                <span class="benchmark-name">{*label}</span>
                                <ProgressFill target={*target} label={AttrValue::from(format!("{}%", target))} />
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="support" class="support">
                <div class="container">
                    <h2 class="section-title">{"Need Help?"}</h2>
                    <div class="support-grid">
                        { for SupportAction::ALL.iter().map(|&action| html! {
                            <SupportCard action={action} on_notify={props.on_notify.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <Faq />

            <footer class="footer">
                <div class="container">
                    <p>{format!("© {}. All rights reserved.", config::PRODUCT_NAME)}</p>
                </div>
            </footer>
        </main>
    }
}
