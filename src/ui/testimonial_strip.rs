//! Horizontal testimonial strip
//!
//! Rendered with Leptos into a `<section>` inserted right after the partners
//! section. The marquee animation itself is pure CSS.

use chrono::Utc;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::config::ReviewsConfig;
use crate::core::error::SiteError;
use crate::core::testimonials::{TESTIMONIALS, TestimonialCard, build_cards, place_strip};
use crate::ui::dom::DomView;

/// One quote card
#[component]
fn ReviewCard(card: TestimonialCard) -> impl IntoView {
    view! {
        <div class="review-card-horizontal">
            <div class="review-card-header">
                <div class="review-avatar-circle">{card.initial}</div>
                <div class="review-meta">
                    <span class="review-author">{card.author}</span>
                    <span class="review-date-badge">{card.date_label}</span>
                </div>
            </div>
            <div class="review-stars-row">{card.stars}</div>
            <div class="review-text-content">{card.quote}</div>
        </div>
    }
}

#[component]
fn GoogleGlyph() -> impl IntoView {
    view! {
        <svg width="18" height="18" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 48" style="vertical-align: middle;">
            <path fill="#EA4335" d="M24 9.5c3.54 0 6.71 1.22 9.21 3.6l6.85-6.85C35.9 2.38 30.47 0 24 0 14.62 0 6.51 5.38 2.56 13.22l7.98 6.19C12.43 13.72 17.74 9.5 24 9.5z"/>
            <path fill="#4285F4" d="M46.98 24.55c0-1.57-.15-3.09-.38-4.55H24v9.02h12.94c-.58 2.96-2.26 5.48-4.78 7.18l7.73 6c4.51-4.18 7.09-10.36 7.09-17.65z"/>
            <path fill="#FBBC05" d="M10.53 28.59c-.48-1.45-.76-2.99-.76-4.59s.27-3.14.76-4.59l-7.98-6.19C.92 16.46 0 20.12 0 24c0 3.88.92 7.54 2.56 10.78l7.97-6.19z"/>
            <path fill="#34A853" d="M24 48c6.48 0 11.93-2.13 15.89-5.81l-7.73-6c-2.15 1.45-4.92 2.3-8.16 2.3-6.26 0-11.57-4.22-13.47-9.91l-7.98 6.19C6.51 42.62 14.62 48 24 48z"/>
            <path fill="none" d="M0 0h48v48H0z"/>
        </svg>
    }
}

/// Contents of the reviews section
#[component]
pub fn TestimonialStrip(
    cards: Vec<TestimonialCard>,
    title: &'static str,
    reviews_url: &'static str,
    review_count: u32,
) -> impl IntoView {
    view! {
        <div class="container">
            <h2 class="reviews-section-title">{title}</h2>

            <div class="reviews-track-container">
                <div class="reviews-track">
                    {cards
                        .into_iter()
                        .map(|card| view! { <ReviewCard card=card /> })
                        .collect_view()}
                </div>
            </div>

            <div class="reviews-cta-container">
                <a href=reviews_url target="_blank" rel="noopener noreferrer" class="btn btn-google">
                    <GoogleGlyph />
                    {format!(" Voir les {} avis sur Google", review_count)}
                </a>
            </div>
        </div>
    }
}

/// Insert the strip after the anchor section.
///
/// Returns `Ok(false)` without touching the page when the anchor is missing.
pub fn inject_testimonial_strip(view: &DomView, config: &ReviewsConfig) -> Result<bool, SiteError> {
    let Some(section) = place_strip(view, config)? else {
        return Ok(false);
    };

    let cards = build_cards(&TESTIMONIALS, config.repeat, Utc::now());
    let title = config.title;
    let reviews_url = config.reviews_url;
    let review_count = config.review_count;

    let parent: web_sys::HtmlElement = section.0.unchecked_into();
    leptos::mount::mount_to(parent, move || {
        view! {
            <TestimonialStrip cards=cards title=title reviews_url=reviews_url review_count=review_count />
        }
    })
    .forget();

    Ok(true)
}
