//! Landing page: static presentation and the way into the analysis view.

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::components::{Footer, Hero};
use crate::config::{REPORT_PATH, REPOSITORY_URL};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="TB Vision X-AI"/>
        <div class="landing-page">
            <Hero/>

            <div class="landing-card">
                <h2 class="welcome-title">"Welcome to TB Vision X-AI"</h2>
                <p class="welcome-text">
                    "Our cutting-edge AI system uses advanced deep learning techniques to analyze "
                    "chest X-ray images and detect signs of Tuberculosis with high accuracy."
                </p>

                <div class="cta">
                    <A href="/analysis" class="cta-button">"Start TB Analysis"</A>
                </div>

                <div class="feature-cards">
                    <div class="feature-card">
                        <h3>"Project Repository"</h3>
                        <p>"Explore our open-source implementation and contribute to the project."</p>
                        <a href=REPOSITORY_URL target="_blank" rel="noopener noreferrer">
                            "View on GitHub"
                        </a>
                    </div>
                    <div class="feature-card">
                        <h3>"Research Paper"</h3>
                        <p>"Read our detailed research paper on the implementation and results."</p>
                        <a href=REPORT_PATH target="_blank" rel="noopener noreferrer">
                            "View Research Paper"
                        </a>
                    </div>
                </div>

                <div class="author">
                    <div class="author-label">"Developed and Researched by"</div>
                    <div class="author-name">"Sharit Vaishnav"</div>
                </div>
            </div>

            <Footer/>
        </div>
    }
}
