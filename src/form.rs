//! The contact form's fake submission, as a three-stage button script.

use crate::config::FxConfig;

pub const SENDING_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
pub const SENT_HTML: &str = "<i class=\"fas fa-check\"></i> Sent!";
pub const SENT_BACKGROUND: &str = "#10b981";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStage {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// What the submit button should look like in a given stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub html: String,
    pub disabled: bool,
    /// Empty clears the inline background.
    pub background: &'static str,
}

impl SubmitStage {
    pub fn view(self, original_html: &str) -> ButtonView {
        match self {
            SubmitStage::Idle => ButtonView {
                html: original_html.to_owned(),
                disabled: false,
                background: "",
            },
            SubmitStage::Sending => ButtonView {
                html: SENDING_HTML.to_owned(),
                disabled: true,
                background: "",
            },
            SubmitStage::Sent => ButtonView {
                html: SENT_HTML.to_owned(),
                disabled: true,
                background: SENT_BACKGROUND,
            },
        }
    }

    /// The following stage and how long the current one lasts, or `None`
    /// when the sequence is over.
    pub fn next(self, cfg: &FxConfig) -> Option<(SubmitStage, u32)> {
        match self {
            SubmitStage::Idle => None,
            SubmitStage::Sending => Some((SubmitStage::Sent, cfg.form_sending_ms)),
            SubmitStage::Sent => Some((SubmitStage::Idle, cfg.form_sent_ms)),
        }
    }

    /// The form is cleared when the sequence returns to idle.
    pub fn resets_form(self) -> bool {
        self == SubmitStage::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_timing_totals_3500ms() {
        let cfg = FxConfig::default();
        let mut stage = SubmitStage::Sending;
        let mut elapsed = 0;
        let mut seen = vec![stage];
        while let Some((next, after)) = stage.next(&cfg) {
            elapsed += after;
            stage = next;
            seen.push(stage);
            if stage == SubmitStage::Sent {
                assert_eq!(elapsed, 1500);
            }
        }
        assert_eq!(elapsed, 3500);
        assert_eq!(seen, [SubmitStage::Sending, SubmitStage::Sent, SubmitStage::Idle]);
    }

    #[test]
    fn button_views() {
        let original = "Send Message <i class=\"fas fa-paper-plane\"></i>";
        let sending = SubmitStage::Sending.view(original);
        assert!(sending.disabled);
        assert!(sending.html.contains("Sending..."));

        let sent = SubmitStage::Sent.view(original);
        assert!(sent.html.contains("Sent!"));
        assert_eq!(sent.background, "#10b981");

        let idle = SubmitStage::Idle.view(original);
        assert_eq!(idle.html, original);
        assert!(!idle.disabled);
        assert_eq!(idle.background, "");
        assert!(SubmitStage::Idle.resets_form());
        assert!(!SubmitStage::Sent.resets_form());
    }
}
