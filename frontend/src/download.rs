use thiserror::Error;

use crate::config;

pub const STATUS_STEPS: [&str; 4] = [
    "Preparing download...",
    "Selecting best server...",
    "Initializing download...",
    "Download started successfully!",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    /// Value of the `data-platform` attribute on download buttons.
    pub fn id(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Mac => "macOS",
            Platform::Linux => "Linux",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Platform::Windows => "fab fa-windows",
            Platform::Mac => "fab fa-apple",
            Platform::Linux => "fab fa-linux",
        }
    }

    pub fn requirements(self) -> &'static str {
        match self {
            Platform::Windows => "Windows 10 or later, 64-bit",
            Platform::Mac => "macOS 11 Big Sur or later",
            Platform::Linux => "Ubuntu 20.04+, Fedora 36+ or equivalent",
        }
    }
}

// Mirrors are not published yet, every platform points at this placeholder.
pub const DOWNLOAD_URL: &str = "#";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("no browser window available")]
    NoWindow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Preparing,
    Stepping(usize),
    Finalizing,
    Done,
}

/// One activation of a download control, from the modal opening until it
/// is dismissed or the simulated sequence completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadSession {
    pub platform: Platform,
    pub generation: u64,
    pub stage: Stage,
}

impl DownloadSession {
    pub fn new(platform: Platform, generation: u64) -> Self {
        Self {
            platform,
            generation,
            stage: Stage::Preparing,
        }
    }

    pub fn status_text(&self) -> String {
        match self.stage {
            Stage::Preparing => STATUS_STEPS[0].to_string(),
            Stage::Stepping(i) => STATUS_STEPS[i].to_string(),
            Stage::Finalizing | Stage::Done => format!(
                "{} for {} is downloading...",
                config::PRODUCT_NAME,
                self.platform.id()
            ),
        }
    }

    /// Delay before the next `advance` should run, `None` once finished.
    pub fn next_delay(&self) -> Option<u32> {
        match self.stage {
            Stage::Preparing => Some(config::STEP_INTERVAL_MS),
            Stage::Stepping(i) if i + 1 < STATUS_STEPS.len() => Some(config::STEP_INTERVAL_MS),
            Stage::Stepping(_) => Some(config::FINALIZE_DELAY_MS),
            Stage::Finalizing => Some(config::CLOSE_DELAY_MS),
            Stage::Done => None,
        }
    }

    pub fn advance(&mut self) -> Stage {
        self.stage = match self.stage {
            Stage::Preparing => Stage::Stepping(0),
            Stage::Stepping(i) if i + 1 < STATUS_STEPS.len() => Stage::Stepping(i + 1),
            Stage::Stepping(_) => Stage::Finalizing,
            Stage::Finalizing | Stage::Done => Stage::Done,
        };
        self.stage
    }

    pub fn success_message(&self) -> String {
        format!("Download started for {}!", self.platform.id())
    }

    pub fn failure_message(&self) -> String {
        format!("Download failed for {}. Please try again.", self.platform.id())
    }
}

/// At most one open modal. Every `start` bumps the generation so timer
/// messages left over from an earlier session are recognised and dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    generation: u64,
    session: Option<DownloadSession>,
}

impl ModalState {
    pub fn session(&self) -> Option<&DownloadSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_platform(&self) -> Option<Platform> {
        self.session.as_ref().map(|s| s.platform)
    }

    pub fn start(&mut self, platform: Platform) -> &DownloadSession {
        self.generation += 1;
        self.session.insert(DownloadSession::new(platform, self.generation))
    }

    /// Moves the live session one stage on. Returns `None` for a stale
    /// generation or when no session is open.
    pub fn advance(&mut self, generation: u64) -> Option<Stage> {
        let session = self.session.as_mut().filter(|s| s.generation == generation)?;
        let stage = session.advance();
        Some(stage)
    }

    pub fn close(&mut self) -> Option<DownloadSession> {
        self.session.take()
    }
}

/// Hands the placeholder URL to the browser. No bytes are transferred.
pub fn trigger_download(platform: Platform) -> Result<&'static str, DownloadError> {
    let _window = web_sys::window().ok_or(DownloadError::NoWindow)?;
    log::info!("Starting download for {}", platform.id());
    Ok(DOWNLOAD_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(session: &mut DownloadSession) -> (u32, Vec<String>) {
        let mut elapsed = 0;
        let mut shown = vec![session.status_text()];
        while let Some(delay) = session.next_delay() {
            elapsed += delay;
            if session.advance() != Stage::Done {
                shown.push(session.status_text());
            }
        }
        (elapsed, shown)
    }

    #[test]
    fn every_platform_finishes_after_fixed_delay() {
        for platform in Platform::ALL {
            let mut session = DownloadSession::new(platform, 1);
            let (elapsed, _) = run_to_completion(&mut session);
            assert_eq!(elapsed, 4 * 800 + 1000 + 2000);
            assert_eq!(session.stage, Stage::Done);
        }
    }

    #[test]
    fn status_messages_follow_fixed_order() {
        let mut session = DownloadSession::new(Platform::Linux, 7);
        let (_, shown) = run_to_completion(&mut session);
        assert_eq!(shown[1..5], STATUS_STEPS.map(String::from));
        assert_eq!(shown[5], "RoBoost V2 for linux is downloading...");
        assert_eq!(shown.len(), 6);
    }

    #[test]
    fn finalize_waits_longer_than_a_step() {
        let mut session = DownloadSession::new(Platform::Mac, 1);
        for _ in 0..4 {
            session.advance();
        }
        assert_eq!(session.stage, Stage::Stepping(3));
        assert_eq!(session.next_delay(), Some(1000));
        session.advance();
        assert_eq!(session.stage, Stage::Finalizing);
        assert_eq!(session.next_delay(), Some(2000));
    }

    #[test]
    fn done_is_terminal() {
        let mut session = DownloadSession::new(Platform::Windows, 1);
        session.stage = Stage::Done;
        assert_eq!(session.advance(), Stage::Done);
        assert_eq!(session.next_delay(), None);
    }

    #[test]
    fn messages_name_the_platform() {
        let session = DownloadSession::new(Platform::Windows, 1);
        assert_eq!(session.success_message(), "Download started for windows!");
        assert_eq!(
            session.failure_message(),
            "Download failed for windows. Please try again."
        );
    }

    #[test]
    fn dismissal_drops_late_timer_messages() {
        let mut modal = ModalState::default();
        let generation = modal.start(Platform::Windows).generation;
        assert_eq!(modal.advance(generation), Some(Stage::Stepping(0)));

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.advance(generation), None);
    }

    #[test]
    fn restarting_replaces_the_session() {
        let mut modal = ModalState::default();
        let first = modal.start(Platform::Windows).generation;
        let second = modal.start(Platform::Linux).generation;
        assert_ne!(first, second);
        assert_eq!(modal.advance(first), None);
        assert_eq!(modal.active_platform(), Some(Platform::Linux));
        assert_eq!(modal.session().map(|s| s.stage), Some(Stage::Preparing));
    }

    #[test]
    fn mac_messages_use_platform_id() {
        let mut session = DownloadSession::new(Platform::Mac, 1);
        assert_eq!(session.success_message(), "Download started for mac!");
        session.stage = Stage::Finalizing;
        assert_eq!(session.status_text(), "RoBoost V2 for mac is downloading...");
    }

    #[test]
    fn platform_ids_are_distinct() {
        let ids: Vec<_> = Platform::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["windows", "mac", "linux"]);
    }

    #[test]
    fn missing_window_reports_failure_for_platform() {
        assert_eq!(DownloadError::NoWindow.to_string(), "no browser window available");
        let session = DownloadSession::new(Platform::Linux, 1);
        assert_eq!(session.failure_message(), "Download failed for linux. Please try again.");
        assert_eq!(DOWNLOAD_URL, "#");
    }
}
