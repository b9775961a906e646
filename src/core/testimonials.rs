//! Client testimonials shown on the horizontal reviews strip
//!
//! The source list is fixed; the strip repeats it so the CSS marquee
//! animation can loop without a visible seam.

use chrono::{DateTime, Utc};

use super::config::ReviewsConfig;
use super::error::SiteError;
use super::relative_date::format_relative_date;
use super::view::{PageView, ViewNode};

/// Rating used when a record has none
pub const DEFAULT_RATING: u8 = 5;

/// When a review was written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDate {
    /// Ready-made label, shown as is
    Label(&'static str),
    /// Publication date, turned into a relative label
    Published(&'static str),
}

/// One customer quote
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub initial: char,
    pub text: &'static str,
    pub date: ReviewDate,
    pub rating: Option<u8>,
}

impl Testimonial {
    /// Star count, clamped to 1..=5
    pub fn stars(&self) -> u8 {
        self.rating.unwrap_or(DEFAULT_RATING).clamp(1, 5)
    }

    pub fn date_label(&self, now: DateTime<Utc>) -> String {
        match self.date {
            ReviewDate::Label(label) => label.to_string(),
            ReviewDate::Published(date) => format_relative_date(Some(date), now),
        }
    }
}

const SOME_TIME_AGO: ReviewDate = ReviewDate::Label("Il y a quelque temps");

/// Reviews left by clients of the firm
pub const TESTIMONIALS: [Testimonial; 9] = [
    Testimonial {
        author: "Jean Parent",
        initial: 'J',
        text: "Nous faisons confiance au cabinet valeurs & Patrimoine depuis 2 ans. Nous sommes très satisfaits de l'accompagnement et des conseils qui nous sont délivrés. Monsieur Frison est une personne compétente et soucieuse de l'intérêt de ses clients.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Dominique Dabin",
        initial: 'D',
        text: "Avec Grégory le contact est facile, les explications claires et les choix proposés pertinents. Sa disponibilité fait de lui un contact privilégié pour un bonne gestion de son patrimoine.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Jean-Marc Godard",
        initial: 'J',
        text: "Visite du 26 février : Ai reçu ce jour monsieur Frison Grégory pour un changement de contrat. Entretien toujours très agréable doublé de compétences irréprochables. Vous prie de m’excuser pour le retard à vous répondre. Bien cordialement.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Odile Lucas",
        initial: 'O',
        text: "Très professionnel, à l'écoute de ses clients, de bon conseil ; vous pouvez contacter Mr Frison en toute confiance en aucun cas vous ne serez déçu",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Didier Moreau",
        initial: 'D',
        text: "Monsieur Frison est un courtier à l'écoute, disponible et réactif. Je recommande sans hésiter.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Delphine Boureux",
        initial: 'D',
        text: "Un conseiller à l'écoute et qui donne des conseils adaptés à nos besoins avec qui on est parfaitement en confiance.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Chantal Pardailhe-galabrun",
        initial: 'C',
        text: "Grégory Frison a su nous conseiller de façon très favorable , mon mari et moi , pour placer au mieux un héritage familial. Nous en sommes très satisfaits.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Laurence Gamard",
        initial: 'L',
        text: "Très satisfaite des conseils et des contrats souscrits avec le cabinet valeurs et patrimoine. Je recommande.",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
    Testimonial {
        author: "Samet Ghislaine",
        initial: 'S',
        text: "Très bon conseiller ,très avenant et à l'écoute du client Toujours de bonne disponibilité Je le recommande fortement",
        date: SOME_TIME_AGO,
        rating: Some(5),
    },
];

/// `source` concatenated with itself `times` times, order preserved
pub fn repeated<T: Clone>(source: &[T], times: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(source.len() * times);
    for _ in 0..times {
        out.extend_from_slice(source);
    }
    out
}

/// Everything a rendered card shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialCard {
    pub initial: String,
    pub author: String,
    pub date_label: String,
    pub stars: String,
    /// Quote wrapped in double quotes
    pub quote: String,
}

impl TestimonialCard {
    pub fn from_testimonial(testimonial: &Testimonial, now: DateTime<Utc>) -> Self {
        Self {
            initial: testimonial.initial.to_string(),
            author: testimonial.author.to_string(),
            date_label: testimonial.date_label(now),
            stars: "★".repeat(usize::from(testimonial.stars())),
            quote: format!("\"{}\"", testimonial.text),
        }
    }
}

/// Cards for the whole track: the source list repeated `times` times
pub fn build_cards(source: &[Testimonial], times: usize, now: DateTime<Utc>) -> Vec<TestimonialCard> {
    let cards: Vec<TestimonialCard> = source
        .iter()
        .map(|t| TestimonialCard::from_testimonial(t, now))
        .collect();
    repeated(&cards, times)
}

/// Create the strip's section right after the anchor section.
///
/// `Ok(None)` when the page has no anchor; the page is left untouched.
pub fn place_strip<V: PageView>(
    view: &V,
    config: &ReviewsConfig,
) -> Result<Option<V::Node>, SiteError> {
    let Some(anchor) = view.query(config.anchor) else {
        return Ok(None);
    };
    anchor
        .insert_after("section", config.section_class)
        .map(Some)
}
