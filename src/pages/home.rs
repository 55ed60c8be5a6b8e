use chrono::Datelike;
use yew::prelude::*;

use crate::components::inquiry_form::InquiryForm;
use crate::components::page_link::PageLink;
use crate::hooks::{use_reveal_on_intersect, use_will_change_hints};

const SERVICES: [(&str, &str); 3] = [
    ("Cleaning Supplies", "Commercial-grade consumables delivered on a schedule that suits your site."),
    ("Facility Maintenance", "Planned and reactive maintenance for offices, warehouses and retail."),
    ("Equipment Hire", "Short and long term hire of floor care and handling equipment."),
];

const TEAM: [(&str, &str); 3] = [
    ("Jordan Reyes", "Operations Manager"),
    ("Priya Natarajan", "Client Services"),
    ("Alex Moreau", "Field Supervisor"),
];

const PARTNERS: [&str; 4] = ["Northgate", "Harbourline", "Crestview", "Ironbark"];

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <div class="container footer__content">
                <PageLink href="#" classes={classes!("footer-logo")}>{"Monteville"}</PageLink>
                <p class="footer__copy">
                    {format!("© {} Monteville Supplies & Services. All rights reserved.", year)}
                </p>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal_on_intersect();
    use_will_change_hints();

    html! {
        <main class="landing-page">
            <style>
                {r#"
                    .header { position: fixed; top: 0; width: 100%; z-index: 10; transition: background 0.3s ease; }
                    .header.scrolled { background: rgba(255, 255, 255, 0.97); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
                    .header-logo { display: inline-block; transition: transform 0.2s ease; cursor: pointer; }
                    .nav__link.active { color: #1f6feb; font-weight: 600; }
                    .nav__toggle { display: none; }
                    @media (max-width: 768px) {
                        .nav__toggle { display: block; }
                        .nav__menu { display: none; }
                        .nav__menu.show { display: flex; flex-direction: column; }
                    }
                    .form-control.error { border-color: #d93025; }
                    .error-message { display: none; color: #d93025; font-size: 0.85rem; }
                    .error-message.show { display: block; }
                    .btn.loading { opacity: 0.7; cursor: progress; }
                    .success-message { opacity: 0; transition: opacity 0.3s ease; }
                    .success-message.show { opacity: 1; }
                    .card, .service__card, .team__member, .logo-placeholder {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .animate-in { opacity: 1; transform: translateY(0); }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="container hero__content">
                    <h1>{"Supplies and services that keep your site running"}</h1>
                    <p class="hero__subtitle">
                        {"One supplier for consumables, maintenance and equipment across the region."}
                    </p>
                    <PageLink href="#contact" classes={classes!("btn", "btn--primary")}>
                        {"Request a Quote"}
                    </PageLink>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2>{"Our Services"}</h2>
                    <div class="services__grid">
                        { for SERVICES.iter().map(|(title, body)| html! {
                            <div class="service__card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2>{"About Us"}</h2>
                    <div class="card">
                        <p>{"Locally owned and operated, we have supported businesses in the region for over fifteen years."}</p>
                    </div>
                    <div class="partners">
                        { for PARTNERS.iter().map(|name| html! {
                            <div class="logo-placeholder">{*name}</div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="team" class="team">
                <div class="container">
                    <h2>{"Our Team"}</h2>
                    <div class="team__grid">
                        { for TEAM.iter().map(|(name, role)| html! {
                            <div class="team__member">
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2>{"Get in Touch"}</h2>
                    <InquiryForm />
                </div>
            </section>

            <Footer />
        </main>
    }
}
