//! Orchestrator flow tests against a scripted provider. The mock records
//! every capability call in a shared log so the tests can assert both which
//! calls happened and in what order, including that layout invalidation is
//! issued before a redirect outcome is returned.

use std::cell::RefCell;
use std::rc::Rc;

use auth_flow::{
    AuthEffects, AuthOrchestrator, AuthOutcome, AuthProvider, Credentials, InvalidationScope,
    ProviderError, Session, SignupProfile,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    SignIn,
    SignUp,
    GetSession,
    Invalidate { path: String, scope: InvalidationScope },
}

type CallLog = Rc<RefCell<Vec<Call>>>;

struct ScriptedProvider {
    log: CallLog,
    sign_in: Result<Option<Session>, ProviderError>,
    sign_up: Result<(), ProviderError>,
    session: Result<Option<Session>, ProviderError>,
}

impl ScriptedProvider {
    fn new(log: CallLog) -> Self {
        Self {
            log,
            sign_in: Ok(None),
            sign_up: Ok(()),
            session: Ok(None),
        }
    }
}

impl AuthProvider for ScriptedProvider {
    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Option<Session>, ProviderError> {
        self.log.borrow_mut().push(Call::SignIn);
        self.sign_in.clone()
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _display_name: Option<&str>,
    ) -> Result<(), ProviderError> {
        self.log.borrow_mut().push(Call::SignUp);
        self.sign_up.clone()
    }

    async fn get_session(&self) -> Result<Option<Session>, ProviderError> {
        self.log.borrow_mut().push(Call::GetSession);
        self.session.clone()
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

struct RecordingEffects {
    log: CallLog,
}

impl AuthEffects for RecordingEffects {
    fn invalidate_cached_view(&self, path: &str, scope: InvalidationScope) {
        self.log.borrow_mut().push(Call::Invalidate {
            path: path.to_string(),
            scope,
        });
    }
}

fn orchestrator_with(
    configure: impl FnOnce(&mut ScriptedProvider),
) -> (AuthOrchestrator<ScriptedProvider, RecordingEffects>, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut provider = ScriptedProvider::new(Rc::clone(&log));
    configure(&mut provider);
    let effects = RecordingEffects {
        log: Rc::clone(&log),
    };
    (AuthOrchestrator::new(provider, effects), log)
}

fn session(email: &str) -> Session {
    Session {
        user_id: "11111111-2222-3333-4444-555555555555".to_string(),
        email: email.to_string(),
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(email, password)
}

fn profile(email: &str, password: &str, name: &str) -> SignupProfile {
    SignupProfile {
        credentials: credentials(email, password),
        display_name: Some(name.to_string()),
    }
}

fn layout_invalidation() -> Call {
    Call::Invalidate {
        path: "/".to_string(),
        scope: InvalidationScope::Layout,
    }
}

#[tokio::test]
async fn login_with_missing_fields_never_calls_provider() {
    for (email, password) in [("", "secret1"), ("a@b.com", ""), ("", ""), ("  ", " ")] {
        let (orchestrator, log) = orchestrator_with(|_| {});
        let outcome = orchestrator.submit_login(&credentials(email, password)).await;

        assert_eq!(
            outcome,
            AuthOutcome::Failure("Email and password are required.".to_string())
        );
        assert!(log.borrow().is_empty(), "no call expected for {email:?}");
    }
}

#[tokio::test]
async fn signup_with_missing_fields_never_calls_provider() {
    let (orchestrator, log) = orchestrator_with(|_| {});
    let outcome = orchestrator.submit_signup(&profile("", "secret1", "A")).await;

    assert_eq!(
        outcome,
        AuthOutcome::Failure("Email and password are required.".to_string())
    );
    assert!(log.borrow().is_empty());
}

#[tokio::test]
async fn signup_rejects_short_passwords_locally() {
    for password in ["1", "12", "123", "1234", "12345"] {
        let (orchestrator, log) = orchestrator_with(|_| {});
        let outcome = orchestrator
            .submit_signup(&profile("a@b.com", password, "A"))
            .await;

        assert_eq!(
            outcome,
            AuthOutcome::Failure("Password must be at least 6 characters long.".to_string())
        );
        assert!(log.borrow().is_empty());
    }
}

#[tokio::test]
async fn signup_password_length_counts_characters_not_bytes() {
    // Five characters, six bytes: must still fail the local length check.
    let (orchestrator, log) = orchestrator_with(|_| {});
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "p\u{e4}ss1", "A"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Failure("Password must be at least 6 characters long.".to_string())
    );
    assert!(log.borrow().is_empty());

    let (orchestrator, log) = orchestrator_with(|_| {});
    orchestrator
        .submit_signup(&profile("a@b.com", "p\u{e4}ssw1", "A"))
        .await;
    assert_eq!(log.borrow().first(), Some(&Call::SignIn));
}

#[tokio::test]
async fn signup_with_six_character_password_reaches_provider() {
    let (orchestrator, log) = orchestrator_with(|_| {});
    orchestrator
        .submit_signup(&profile("a@b.com", "123456", "A"))
        .await;

    assert_eq!(log.borrow().first(), Some(&Call::SignIn));
}

#[tokio::test]
async fn login_success_invalidates_layout_then_redirects() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.sign_in = Ok(Some(session("a@b.com")));
    });
    let outcome = orchestrator
        .submit_login(&credentials("a@b.com", "secret1"))
        .await;

    assert_eq!(outcome, AuthOutcome::Redirect("/dashboard".to_string()));
    assert_eq!(*log.borrow(), vec![Call::SignIn, layout_invalidation()]);
}

#[tokio::test]
async fn login_passes_provider_rejection_through_verbatim() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.sign_in = Err(ProviderError::Rejected(
            "Invalid login credentials".to_string(),
        ));
    });
    let outcome = orchestrator
        .submit_login(&credentials("a@b.com", "wrong-pass"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Failure("Invalid login credentials".to_string())
    );
    assert_eq!(*log.borrow(), vec![Call::SignIn]);
}

#[tokio::test]
async fn login_hides_unexpected_errors_behind_generic_message() {
    let (orchestrator, _log) = orchestrator_with(|provider| {
        provider.sign_in = Err(ProviderError::Unexpected("connection reset".to_string()));
    });
    let outcome = orchestrator
        .submit_login(&credentials("a@b.com", "secret1"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Failure("An unexpected error occurred. Please try again later.".to_string())
    );
}

#[tokio::test]
async fn signup_auto_login_first_skips_signup_call() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.sign_in = Ok(Some(session("a@b.com")));
    });
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "secret1", "A"))
        .await;

    assert_eq!(outcome, AuthOutcome::Redirect("/dashboard".to_string()));
    assert_eq!(*log.borrow(), vec![Call::SignIn, layout_invalidation()]);
    assert!(!log.borrow().contains(&Call::SignUp));
}

#[tokio::test]
async fn signup_without_auto_confirm_yields_pending() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.sign_in = Err(ProviderError::Rejected(
            "Invalid login credentials".to_string(),
        ));
    });
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "secret1", "A"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Pending("Check your email to verify your account.".to_string())
    );
    assert_eq!(
        *log.borrow(),
        vec![Call::SignIn, Call::SignUp, Call::GetSession]
    );
}

#[tokio::test]
async fn signup_with_auto_confirm_invalidates_then_redirects() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.session = Ok(Some(session("a@b.com")));
    });
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "secret1", "A"))
        .await;

    assert_eq!(outcome, AuthOutcome::Redirect("/dashboard".to_string()));
    assert_eq!(
        *log.borrow(),
        vec![
            Call::SignIn,
            Call::SignUp,
            Call::GetSession,
            layout_invalidation(),
        ]
    );
}

#[tokio::test]
async fn signup_passes_provider_rejection_through_verbatim() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.sign_up = Err(ProviderError::Rejected(
            "User already registered".to_string(),
        ));
    });
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "secret1", "A"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Failure("User already registered".to_string())
    );
    assert_eq!(*log.borrow(), vec![Call::SignIn, Call::SignUp]);
}

#[tokio::test]
async fn unexpected_error_during_signup_precheck_is_generic() {
    let (orchestrator, log) = orchestrator_with(|provider| {
        provider.sign_in = Err(ProviderError::Unexpected("dns failure".to_string()));
    });
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "secret1", "A"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Failure("An unexpected error occurred. Please try again later.".to_string())
    );
    assert_eq!(*log.borrow(), vec![Call::SignIn]);
}

#[tokio::test]
async fn session_check_error_after_signup_degrades_to_pending() {
    let (orchestrator, _log) = orchestrator_with(|provider| {
        provider.session = Err(ProviderError::Unexpected("socket closed".to_string()));
    });
    let outcome = orchestrator
        .submit_signup(&profile("a@b.com", "secret1", "A"))
        .await;

    assert_eq!(
        outcome,
        AuthOutcome::Pending("Check your email to verify your account.".to_string())
    );
}
