use leptos::prelude::*;

use crate::content::STEPS;

/// Three-step walkthrough rendered from [`STEPS`].
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section">
            <div class="section-panel">
                <h3 class="section-title">"How it works"</h3>
                <div class="step-grid">
                    {STEPS
                        .iter()
                        .map(|step| view! {
                            <StepCard title=step.title description=step.description />
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="step-card">
            <div class="step-title">{title}</div>
            <div class="step-description">{description}</div>
        </div>
    }
}
