use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{home::Home, login::Login, not_found::NotFound, unavailable::Unavailable};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::ForgotPassword => html! { <Unavailable title="Forgot password" /> },
        Route::Register => html! { <Unavailable title="Register" /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_targets_have_fixed_paths() {
        assert_eq!(Route::ForgotPassword.to_path(), "/forgot-password");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/register"), Some(Route::Register));
        assert_eq!(
            Route::recognize("/does-not-exist").or_else(Route::not_found_route),
            Some(Route::NotFound)
        );
    }
}
