use yew::prelude::*;

use crate::{components::composite::login_form::LoginForm, submit::log_login_data};

#[function_component(Login)]
pub fn login() -> Html {
    let on_login = use_memo((), |_| log_login_data());

    html! {
        <main class="flex items-center justify-center min-h-screen bg-gray-100 dark:bg-neutral-950 p-4">
            <LoginForm on_login={(*on_login).clone()} />
        </main>
    }
}
