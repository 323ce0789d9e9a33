use stockroom::session::auth;
use stockroom::store::Store;
use stockroom::ui::login::{LoginField, LoginForm};

#[test]
fn empty_form_reports_the_validation_message() {
    let form = LoginForm::default();
    assert_eq!(
        form.validate(),
        Err("Please enter a user name and password.")
    );
}

#[test]
fn filled_form_validates() {
    let mut form = LoginForm::default();
    form.user_name = "Fran".to_string();
    form.password = "secret".to_string();
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn form_editing_targets_the_focused_field() {
    let mut form = LoginForm::default();
    form.push_char('F');
    form.push_char('r');
    form.backspace();
    form.focus_next();
    assert_eq!(form.focus, LoginField::Password);
    form.push_char('x');

    assert_eq!(form.user_name, "F");
    assert_eq!(form.password, "x");
}

#[test]
fn authenticate_rejects_missing_credentials() {
    assert_eq!(auth::authenticate("", "secret"), None);
    assert_eq!(auth::authenticate("Fran", ""), None);
}

#[test]
fn authenticate_flags_admin_user_names() {
    let user = auth::authenticate("StoreAdmin", "secret").expect("should authenticate");
    assert!(user.is_admin);

    let user = auth::authenticate("Fran", "secret").expect("should authenticate");
    assert!(!user.is_admin);
}

#[test]
fn log_in_dispatches_set_current_user() {
    let store = Store::new(Default::default());
    assert!(auth::log_in(&store, "Fran", "secret"));

    let state = store.state();
    let user = state.session.current_user.as_ref().expect("logged in");
    assert_eq!(user.user_name, "Fran");
    assert_eq!(user.id, 2);
}

#[test]
fn log_out_clears_the_current_user() {
    let store = Store::new(Default::default());
    auth::log_in(&store, "Fran", "secret");
    auth::log_out(&store);

    assert_eq!(store.state().session.current_user, None);
}

#[test]
fn failed_login_leaves_the_store_untouched() {
    let store = Store::new(Default::default());
    assert!(!auth::log_in(&store, "", ""));
    assert_eq!(store.state().session.current_user, None);
}
