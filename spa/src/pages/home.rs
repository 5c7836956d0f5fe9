use yew::prelude::*;

use crate::{components::composite::login_form::LoginForm, submit::log_login_data};

#[function_component(Home)]
pub fn home() -> Html {
    let on_login = use_memo((), |_| log_login_data());

    html! {
        <main class="min-h-screen flex items-center justify-center bg-gray-50 p-6">
            <LoginForm on_login={(*on_login).clone()} />
        </main>
    }
}
