use leptos::prelude::*;

use crate::content::{BRAND, COPYRIGHT, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <div class="footer-brand gradient-text">{BRAND}</div>
                    <div class="footer-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! { <a href=link.href class="footer-link">{link.label}</a> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="footer-copyright">{COPYRIGHT}</div>
            </div>
        </footer>
    }
}
