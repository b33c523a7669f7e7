use crate::core::context::AppContext;
use crate::core::credentials::Credentials;
use crate::core::types::Url;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::prompter::models::{CredentialsState, Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use std::io::Write;

const FRAME_WIDTH: usize = 60;

/// Three-field form: LMS id, password, optional webhook URL. The collected
/// values are written wholesale to the credentials file; a write failure is
/// reported and ends the flow without touching the session.
pub struct CredentialsFlow<'a> {
    ctx: &'a mut AppContext,
    chrome: UiChrome,
    state: CredentialsState,
    intro_shown: bool,
    lms_id: Option<String>,
    password: Option<String>,
}

impl<'a> CredentialsFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        Self {
            ctx,
            chrome: UiChrome::new(),
            state: CredentialsState::AskLmsId,
            intro_shown: false,
            lms_id: None,
            password: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> CredentialsState {
        self.state.clone()
    }

    fn render_prompt(&self, message: &str) {
        self.chrome.println_centered_in_box(message, FRAME_WIDTH);
        self.chrome.print_centered_prefix_plain("> ", FRAME_WIDTH);
    }

    fn render_intro(&mut self) {
        if self.intro_shown {
            return;
        }
        self.chrome.clear_screen();
        self.chrome.println_centered_in_box(
            "Configure credentials. The file is written in plaintext.",
            FRAME_WIDTH,
        );
        self.chrome.println_centered_in_box(
            &format!("Target: {}", self.ctx.credentials_path.display()),
            FRAME_WIDTH,
        );
        self.intro_shown = true;
    }

    fn save(&mut self, webhook: Option<String>) -> FlowCtrl {
        let lms_id = self.lms_id.take().unwrap_or_default();
        let password = self.password.take().unwrap_or_default();

        let credentials = match Credentials::new(lms_id, password, webhook) {
            Ok(c) => c,
            Err(e) => {
                self.chrome
                    .println_centered_in_box(&format!("Error: {e}"), FRAME_WIDTH);
                self.state = CredentialsState::AskLmsId;
                return FlowCtrl::Continue;
            }
        };

        match credentials.write_to(&self.ctx.credentials_path) {
            Ok(path) => {
                self.chrome.println_centered_in_box(
                    "Credentials saved successfully!",
                    FRAME_WIDTH,
                );
                self.ctx.logger.info(
                    format!("Wrote credentials to {}", path.display()),
                    LogTarget::FileOnly,
                );
            }
            Err(e) => {
                self.chrome.println_centered_in_box(
                    &format!("Error saving credentials: {e}"),
                    FRAME_WIDTH,
                );
                self.ctx.logger.error(
                    format!("Credentials write failed: {e}"),
                    LogTarget::FileOnly,
                );
            }
        }
        self.state = CredentialsState::Done;
        FlowCtrl::Finish
    }
}

impl<'a> Flow for CredentialsFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.render_intro();
        match self.state {
            CredentialsState::AskLmsId => self.render_prompt("LMS ID: "),
            CredentialsState::AskPassword => self.render_prompt("Password: "),
            CredentialsState::AskWebhook => {
                self.render_prompt("Webhook URL (optional, leave blank for none): ")
            }
            CredentialsState::Done => { /* no-op */ }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        print!("{STYLE_RESET}");
        let _ = std::io::stdout().flush();
        let input = input.trim();

        match self.state {
            CredentialsState::AskLmsId => {
                if input.is_empty() {
                    self.chrome
                        .println_centered_in_box("LMS ID must not be empty.", FRAME_WIDTH);
                } else {
                    self.lms_id = Some(input.to_string());
                    self.state = CredentialsState::AskPassword;
                }
                Ok(FlowCtrl::Continue)
            }
            CredentialsState::AskPassword => {
                if input.is_empty() {
                    self.chrome
                        .println_centered_in_box("Password must not be empty.", FRAME_WIDTH);
                } else {
                    self.password = Some(input.to_string());
                    self.state = CredentialsState::AskWebhook;
                }
                Ok(FlowCtrl::Continue)
            }
            CredentialsState::AskWebhook => {
                if input.is_empty() {
                    return Ok(self.save(None));
                }
                match Url::try_from_str(input) {
                    Ok(url) => Ok(self.save(Some(url.into_string()))),
                    Err(e) => {
                        self.chrome
                            .println_centered_in_box(&format!("Error: {e}"), FRAME_WIDTH);
                        Ok(FlowCtrl::Continue)
                    }
                }
            }
            CredentialsState::Done => Ok(FlowCtrl::Finish),
        }
    }
}
