use crate::egui_app::profile::Profile;
use crate::egui_app::threads::ThreadsSession;
use crate::egui_app::Config;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub profile: Profile,
    pub name_input: String,
    pub name_error: Option<String>,
    /// Present while a name is set and the board is shown
    pub session: Option<ThreadsSession>,
}

impl AppState {
    /// Load the profile and resume the board if a name is remembered
    pub fn new() -> Self {
        let profile = Profile::load().unwrap_or_else(|e| {
            tracing::warn!("[Profile] Could not load profile: {}", e);
            Profile::default()
        });
        let mut state = Self::with_profile(Config::new(), profile);
        if let Some(name) = state.profile.name().map(str::to_string) {
            state.start_session(name);
        }
        state
    }

    /// Build without loading from disk or starting a session
    pub fn with_profile(config: Config, profile: Profile) -> Self {
        let name_input = profile.name().unwrap_or_default().to_string();
        Self {
            config,
            profile,
            name_input,
            name_error: None,
            session: None,
        }
    }

    /// Poll background work. Call once per frame.
    pub fn poll(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.poll();
        }
    }

    /// Accept the name typed on the welcome screen and open the board
    pub fn submit_name(&mut self) {
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.name_error = Some("Please enter a name".to_string());
            return;
        }
        if name.chars().count() > crate::shared::post::MAX_AUTHOR_LENGTH {
            self.name_error = Some(format!(
                "Names are limited to {} characters",
                crate::shared::post::MAX_AUTHOR_LENGTH
            ));
            return;
        }
        self.name_error = None;
        self.profile.set_name(&name);
        if let Err(e) = self.profile.save() {
            tracing::warn!("[Profile] Could not save profile: {}", e);
        }
        self.start_session(name);
    }

    /// Leave the board and forget the remembered name
    pub fn change_name(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.end();
        }
        self.profile.set_name("");
        if let Err(e) = self.profile.save() {
            tracing::warn!("[Profile] Could not save profile: {}", e);
        }
    }

    fn start_session(&mut self, name: String) {
        if let Some(mut previous) = self.session.take() {
            previous.end();
        }
        self.session = Some(ThreadsSession::start(self.config.clone(), name));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
