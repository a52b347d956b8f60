//! Console dashboard shell.
//!
//! Hosts the upload panel and the gallery side by side, with a header
//! carrying the logout control. Logging out clears the stored token and
//! hands the URL back to the guard.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::gallery::Gallery;
use crate::components::icons as ic;
use crate::components::upload::Upload;
use crate::config::APP_NAME;
use crate::core::session;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/dashboard.module.css");

#[component]
pub fn Dashboard() -> impl IntoView {
    let logout = move |_| {
        session::clear();
        AppRoute::Login.push();
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <div class=css::brand>
                    <span class=css::brandMark>
                        <Icon icon=ic::PLUS />
                    </span>
                    <div class=css::brandText>
                        <span class=css::brandName>{APP_NAME}</span>
                        <span class=css::brandTagline>"Ingestion Point"</span>
                    </div>
                </div>

                <button class=css::logout on:click=logout>
                    <Icon icon=ic::LOGOUT />
                    "Terminate Session"
                </button>
            </header>

            <main class=css::main>
                <section class=css::uploadColumn>
                    <span class=css::sectionTag>"Module_01"</span>
                    <h3 class=css::sectionTitle>"New Ingestion"</h3>
                    <Upload />
                </section>

                <section class=css::galleryColumn>
                    <div class=css::galleryHeader>
                        <h2 class=css::galleryTitle>"Stored Archive / Library"</h2>
                        <p class=css::galleryHint>
                            "Authorized access to encrypted asset directory"
                        </p>
                    </div>
                    <Gallery />
                </section>
            </main>
        </div>
    }
}
