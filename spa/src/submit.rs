use shared::LoginFormValues;
use yew::Callback;

/// Terminal action of a successful login submit. Only reports the payload;
/// this is where an authentication request would be issued.
pub fn log_login_data() -> Callback<LoginFormValues> {
    Callback::from(|values: LoginFormValues| {
        log::info!("Login data: {values:?}");
    })
}
