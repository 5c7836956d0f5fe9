use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <p>{"Page not found!"}</p>
            <Link<Route> to={Route::Login}>{ "click here to go to login" }</Link<Route>>
        </>
    }
}
