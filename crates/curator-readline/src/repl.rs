//! The protected review view: sign-in gate, command dispatch and rendering.

use crate::command::{HELP_TEXT, ReviewCommand};
use crate::helper::ReviewHelper;
use crate::render::{self, EMPTY_STAGING, Layout};
use anyhow::Result;
use colored::Colorize;
use curator_application::{CuratorApp, LogoutOutcome, SubmitOutcome};
use curator_core::config::LayoutPreference;
use curator_core::decision::{DecisionStore, Pager, ReviewAction};
use curator_core::error::CuratorError;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

pub type ReviewEditor = Editor<ReviewHelper, DefaultHistory>;

const MAX_LOGIN_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ReviewRepl {
    app: CuratorApp,
    pager: Pager,
    layout: LayoutPreference,
}

/// Reads one line. `None` on Ctrl-C / Ctrl-D.
fn prompt(rl: &mut ReviewEditor, label: &str, masked: bool) -> Result<Option<String>> {
    if let Some(helper) = rl.helper_mut() {
        helper.set_masking(masked);
    }
    let line = rl.readline(label);
    if let Some(helper) = rl.helper_mut() {
        helper.set_masking(false);
    }

    match line {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn report_error(error: &CuratorError) {
    match error {
        CuratorError::Validation(message) => println!("{}", message.yellow()),
        CuratorError::Authentication(_) => {
            println!("{}", error.to_string().red());
            println!(
                "{}",
                "Your session may have expired. Run 'logout' and sign in again.".bright_black()
            );
        }
        CuratorError::Config(_) => {
            println!("{}", error.to_string().red());
            println!(
                "{}",
                "Set CURATOR_API_URL or api_url in config.toml.".bright_black()
            );
        }
        _ => println!("{}", error.to_string().red()),
    }
}

impl ReviewRepl {
    pub fn new(app: CuratorApp) -> Self {
        let layout = app.config().layout;
        Self {
            app,
            pager: Pager::new(),
            layout,
        }
    }

    fn store(&self) -> DecisionStore {
        self.app.review().snapshot()
    }

    fn layout(&self) -> Layout {
        render::resolve_layout(self.layout, render::terminal_width())
    }

    /// Restores the stored session or asks the reviewer to sign in, then
    /// loads the staging queue. Returns `false` when the reviewer gave up.
    pub async fn start(&mut self, rl: &mut ReviewEditor) -> Result<bool> {
        let restored = match self.app.auth().hydrate().await {
            Ok(restored) => restored,
            Err(e) => {
                tracing::warn!("[ReviewRepl] Could not restore session: {}", e);
                report_error(&e);
                false
            }
        };

        if restored {
            if let Some(user) = self.app.auth().current_user() {
                println!("{}", format!("Signed in as {} <{}>", user.name, user.email).green());
            }
        } else if !self.sign_in(rl).await? {
            return Ok(false);
        }

        self.refresh().await;
        Ok(true)
    }

    async fn sign_in(&mut self, rl: &mut ReviewEditor) -> Result<bool> {
        println!("{}", "Sign in to review staged photos.".bright_black());

        for _ in 0..MAX_LOGIN_ATTEMPTS {
            let Some(email) = prompt(rl, "Email: ", false)? else {
                return Ok(false);
            };
            let Some(password) = prompt(rl, "Password: ", true)? else {
                return Ok(false);
            };

            match self.app.auth().login(&email, &password).await {
                Ok(user) => {
                    println!("{}", format!("Signed in as {} <{}>", user.name, user.email).green());
                    return Ok(true);
                }
                Err(e) if e.is_authentication() || e.is_validation() => report_error(&e),
                Err(e) => {
                    report_error(&e);
                    return Ok(false);
                }
            }
        }

        println!("{}", "Too many failed attempts.".red());
        Ok(false)
    }

    pub fn render(&self) {
        let store = self.store();
        println!("{}", render::header(&store));
        println!();
        let body = match self.layout() {
            Layout::Grid => render::render_grid(&store, self.pager.index()),
            Layout::Pager => render::render_pager(&store, &self.pager),
        };
        println!("{}", body);
    }

    async fn refresh(&mut self) {
        match self.app.review().refresh().await {
            Ok(_) => {
                self.pager.clamp(self.store().len());
                self.render();
            }
            Err(e) => report_error(&e),
        }
    }

    /// Resolves an explicit or current photo index to its ulid.
    fn target(&self, index: Option<usize>) -> Option<(usize, String)> {
        let store = self.store();
        let index = index.unwrap_or(self.pager.index());
        match store.ulid_at(index) {
            Some(ulid) => Some((index, ulid.to_string())),
            None if store.is_empty() => {
                println!("{}", EMPTY_STAGING.bright_black());
                None
            }
            None => {
                println!(
                    "{}",
                    format!("No photo {} (1-{})", index + 1, store.len()).yellow()
                );
                None
            }
        }
    }

    fn show_photo_status(&self, index: usize) {
        match self.layout() {
            Layout::Pager => self.render(),
            Layout::Grid => {
                let store = self.store();
                if let Some(photo) = store.photo(index) {
                    let decision = store.decision(&photo.ulid);
                    let state = match decision.and_then(|d| d.action) {
                        Some(ReviewAction::Approve) => "approve".green().to_string(),
                        Some(ReviewAction::Reject) => "reject".red().to_string(),
                        None => "pending".bright_black().to_string(),
                    };
                    println!(
                        "[{}] {}: {}, {}",
                        index + 1,
                        photo.filename,
                        state,
                        decision.map(|d| d.visibility.label()).unwrap_or("Public")
                    );
                }
                println!("{}", render::counts_line(&store).bright_white());
            }
        }
    }

    fn toggle(&self, index: Option<usize>, action: ReviewAction) {
        if let Some((index, ulid)) = self.target(index) {
            self.app.review().set_action(&ulid, action);
            self.show_photo_status(index);
        }
    }

    fn move_to(&self, moved: bool, refusal: &str) {
        if moved {
            self.render();
        } else {
            println!("{}", refusal.bright_black());
        }
    }

    pub async fn execute(&mut self, command: ReviewCommand, rl: &mut ReviewEditor) -> Result<Flow> {
        let review = self.app.review().clone();

        match command {
            ReviewCommand::Approve(index) => self.toggle(index, ReviewAction::Approve),
            ReviewCommand::Reject(index) => self.toggle(index, ReviewAction::Reject),
            ReviewCommand::Visibility { index, visibility } => {
                if let Some((index, ulid)) = self.target(index) {
                    review.set_visibility(&ulid, visibility);
                    self.show_photo_status(index);
                }
            }
            ReviewCommand::Context { index, text } => {
                if let Some((index, ulid)) = self.target(index) {
                    review.set_context(&ulid, text);
                    self.show_photo_status(index);
                }
            }
            ReviewCommand::Next => {
                let moved = self.pager.next(self.store().len());
                self.move_to(moved, "Already at the last photo");
            }
            ReviewCommand::Prev => {
                let moved = self.pager.prev();
                self.move_to(moved, "Already at the first photo");
            }
            ReviewCommand::Goto(index) => {
                let len = self.store().len();
                if self.pager.goto(index, len) {
                    self.render();
                } else {
                    println!("{}", format!("No photo {} (1-{})", index + 1, len).yellow());
                }
            }
            ReviewCommand::Open(index) => {
                if let Some((index, _)) = self.target(index) {
                    let store = self.store();
                    if let Some(photo) = store.photo(index) {
                        println!("{}  {}", photo.filename.bold(), photo.url.underline());
                    }
                }
            }
            ReviewCommand::List => {
                println!("{}", render::render_grid(&self.store(), self.pager.index()));
            }
            ReviewCommand::Layout(preference) => {
                self.layout = preference;
                self.render();
            }
            ReviewCommand::Submit => match review.submit().await {
                Ok(SubmitOutcome::Busy) => {
                    println!("{}", "A submission is already in progress.".yellow());
                }
                Ok(SubmitOutcome::Submitted(report)) => {
                    println!(
                        "{}",
                        format!(
                            "Submitted {} decision(s): {} approved, {} rejected.",
                            report.submitted, report.approved, report.rejected
                        )
                        .green()
                    );
                    self.pager.reset();
                    match &report.reload_error {
                        Some(e) => {
                            println!(
                                "{}",
                                "Reloading the staging queue failed. Use 'refresh' to retry."
                                    .yellow()
                            );
                            report_error(e);
                        }
                        None => self.render(),
                    }
                }
                Err(e) => report_error(&e),
            },
            ReviewCommand::Refresh => self.refresh().await,
            ReviewCommand::WhoAmI => match self.app.auth().require_authenticated() {
                Ok(user) => println!("{} <{}> (id {})", user.name.bold(), user.email, user.id),
                Err(e) => report_error(&e),
            },
            ReviewCommand::Logout => {
                match self.app.sign_out().await {
                    Ok(LogoutOutcome::Invalidated) => println!("{}", "Signed out.".green()),
                    Ok(LogoutOutcome::NotSignedIn) => {
                        println!("{}", "Not signed in. Cleared stored session.".bright_black())
                    }
                    Ok(LogoutOutcome::LocalOnly { reason }) => println!(
                        "{}",
                        format!("Signed out locally (server logout failed: {}).", reason).yellow()
                    ),
                    Err(e) => report_error(&e),
                }
                self.pager.reset();

                if !self.sign_in(rl).await? {
                    return Ok(Flow::Quit);
                }
                self.refresh().await;
            }
            ReviewCommand::Help => println!("{}", HELP_TEXT),
            ReviewCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
