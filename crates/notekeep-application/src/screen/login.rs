use super::messages;
use super::{InFlight, Outcome, ScreenContext};
use notekeep_core::auth::{AuthApi, Credentials};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct LoginForm {
    email: String,
    password: String,
}

/// Login form.
///
/// A successful login only updates the session store; moving away from the
/// login screen is left to the route coordinator.
pub struct LoginScreen {
    ctx: ScreenContext,
    api: Arc<dyn AuthApi>,
    form: Mutex<LoginForm>,
    debug_log: Mutex<Vec<String>>,
    loading: InFlight,
}

impl LoginScreen {
    pub fn new(ctx: ScreenContext, api: Arc<dyn AuthApi>) -> Self {
        Self {
            ctx,
            api,
            form: Mutex::new(LoginForm::default()),
            debug_log: Mutex::new(Vec::new()),
            loading: InFlight::new(),
        }
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.form.lock().unwrap().email = email.into();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.form.lock().unwrap().password = password.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    /// Progress lines of the last attempt.
    pub fn debug_log(&self) -> Vec<String> {
        self.debug_log.lock().unwrap().clone()
    }

    fn trace(&self, line: impl Into<String>) {
        self.debug_log.lock().unwrap().push(line.into());
    }

    pub async fn submit(&self) -> Outcome {
        let (email, password) = {
            let form = self.form.lock().unwrap();
            (form.email.trim().to_string(), form.password.clone())
        };

        if email.is_empty() || password.trim().is_empty() {
            return self.ctx.reject(messages::LOGIN_FIELDS_REQUIRED);
        }

        let Some(_loading) = self.loading.try_begin() else {
            return Outcome::Skipped;
        };

        self.debug_log.lock().unwrap().clear();
        self.trace("Démarrage de la connexion...");
        self.trace(format!("Email: {}", email));

        match self.api.login(&Credentials::new(email, &password)).await {
            Ok(response) => {
                self.trace("Connexion réussie");
                self.ctx
                    .session
                    .sign_in(&response.access_token, response.user)
                    .await;
                Outcome::Done
            }
            Err(e) => {
                self.trace(format!("Erreur: {}", e));
                tracing::warn!(error = %e, "login failed");
                self.ctx
                    .alerts
                    .alert(messages::LOGIN_ERROR_TITLE, messages::LOGIN_FAILED);
                Outcome::Failed
            }
        }
    }
}
