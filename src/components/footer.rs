use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src="/images/logo.png" alt={format!("{} Logo", config::STUDIO_NAME)} />
                    </Link<Route>>
                    <p>{"Creating stunning architectural visualizations that bring designs to life."}</p>
                </div>
                <div class="footer-meta">
                    <p>{format!("© {year} {} Agency. All rights reserved.", config::STUDIO_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}
