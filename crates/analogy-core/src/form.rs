//! Client form handler.
//!
//! Owns the form state (two concepts, in-progress flag, last analogy and its
//! share link) and drives one proxy call per submission. Browser facilities
//! (toasts, clipboard, new windows, the disabled trigger) sit behind
//! [`Environment`] so the same handler backs the terminal client and tests.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{AnalogyError, AnalogyResult};
use crate::model::{GenerationRequest, ShareLink};
use crate::share::{self, ShareAction, SocialNetwork};

pub const GENERATED_NOTICE: &str = "Analogy generated!";
pub const FAILED_NOTICE: &str = "Failed to generate analogy. Please try again.";
pub const LINK_COPIED_NOTICE: &str = "Share link copied to clipboard!";
pub const COPIED_NOTICE: &str = "Copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient, toast-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Host facilities the form relies on.
pub trait Environment {
    /// Show a transient notice.
    fn notify(&self, notice: Notice);

    /// Open `url` in a new browsing context.
    fn open_url(&self, url: &str) -> AnalogyResult<()>;

    /// Write `text` to the clipboard.
    fn write_clipboard(&self, text: &str) -> AnalogyResult<()>;

    /// The trigger control became disabled (`true`) or enabled again.
    fn busy_changed(&self, _busy: bool) {}
}

/// The proxy, as seen from the form.
#[async_trait]
pub trait AnalogyService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AnalogyResult<String>;
}

/// State owned by one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub thing1: String,
    pub thing2: String,
    pub analogy: Option<String>,
    pub share_url: Option<ShareLink>,
    pub generating: bool,
}

pub struct AnalogyForm<S, E> {
    state: FormState,
    origin: String,
    service: S,
    env: E,
}

impl<S: AnalogyService, E: Environment> AnalogyForm<S, E> {
    /// `origin` is the base URL share links are built from.
    pub fn new(origin: impl Into<String>, service: S, env: E) -> Self {
        Self {
            state: FormState::default(),
            origin: origin.into(),
            service,
            env,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn analogy(&self) -> Option<&str> {
        self.state.analogy.as_deref()
    }

    pub fn share_url(&self) -> Option<&ShareLink> {
        self.state.share_url.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.state.generating
    }

    pub fn set_thing1(&mut self, value: impl Into<String>) {
        self.state.thing1 = value.into();
    }

    pub fn set_thing2(&mut self, value: impl Into<String>) {
        self.state.thing2 = value.into();
    }

    /// Generate an analogy for the current inputs.
    ///
    /// Blank input fails locally without calling the service. A failed call
    /// leaves the previous analogy and share link in place.
    pub async fn submit(&mut self) -> AnalogyResult<()> {
        let request = match GenerationRequest::new(&self.state.thing1, &self.state.thing2) {
            Ok(request) => request,
            Err(e) => {
                self.env.notify(Notice::error(e.to_string()));
                return Err(e);
            }
        };

        self.set_generating(true);
        let outcome = self.service.generate(&request).await;
        self.set_generating(false);

        match outcome {
            Ok(analogy) => {
                info!(thing1 = %request.thing1, thing2 = %request.thing2, "Generated analogy");
                debug!(%analogy, "Analogy text");
                self.state.share_url = Some(share::share_link(&self.origin, &analogy));
                self.state.analogy = Some(analogy);
                self.env.notify(Notice::success(GENERATED_NOTICE));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Error generating analogy");
                self.env.notify(Notice::error(FAILED_NOTICE));
                Err(e)
            }
        }
    }

    /// Share the current analogy. Does nothing before the first analogy.
    pub fn share_to(&self, network: SocialNetwork) -> AnalogyResult<()> {
        let Some(analogy) = self.state.analogy.as_deref() else {
            debug!(network = network.as_str(), "Nothing to share yet");
            return Ok(());
        };

        match share::share_action(network, analogy, &self.origin) {
            ShareAction::Open(url) => self.env.open_url(&url),
            ShareAction::Clipboard { text, notice } => {
                self.copy_with_notice(&text, &notice);
                Ok(())
            }
        }
    }

    /// Copy arbitrary text. Clipboard refusal is silent.
    pub fn copy_to_clipboard(&self, text: &str) {
        self.copy_with_notice(text, COPIED_NOTICE);
    }

    /// Copy the current share link, if there is one.
    pub fn copy_share_link(&self) {
        if let Some(link) = &self.state.share_url {
            self.copy_with_notice(link.as_str(), LINK_COPIED_NOTICE);
        }
    }

    /// Pre-populate the display from a share link. Returns whether an analogy was found.
    pub fn restore_from(&mut self, link: &str) -> bool {
        match share::analogy_from_share_link(link) {
            Some(analogy) => {
                self.state.share_url = Some(share::share_link(&self.origin, &analogy));
                self.state.analogy = Some(analogy);
                true
            }
            None => false,
        }
    }

    fn copy_with_notice(&self, text: &str, notice: &str) {
        match self.env.write_clipboard(text) {
            Ok(()) => self.env.notify(Notice::success(notice)),
            Err(e) => debug!(error = %e, "Clipboard write failed"),
        }
    }

    fn set_generating(&mut self, generating: bool) {
        self.state.generating = generating;
        self.env.busy_changed(generating);
    }
}

/// Convenience for environments that cannot reach a clipboard.
pub fn clipboard_unavailable() -> AnalogyError {
    AnalogyError::environment("clipboard unavailable")
}
