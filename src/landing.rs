//! Server-rendered landing page.
//!
//! The page content lives in the `SERVICES`, `STEPS` and `FAQS` tables and is
//! rendered by a single template. The WhatsApp buttons fall back to the in-page
//! form anchor when no number is configured.

use axum::extract::{RawQuery, State};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::sync::Arc;
use url::form_urlencoded;

use crate::contact_link::ContactLinkBuilder;
use crate::handlers::AppState;
use crate::models::LeadGoal;

pub const BRAND_NAME: &str = "Fúcsia";

/// In-page anchor of the contact form.
pub const CONTACT_ANCHOR: &str = "#contato";

const ACCENT: &str = "#C026D3";
const ACCENT_2: &str = "#7C3AED";
const GRAPHITE: &str = "#3E3F43";
const GRAPHITE_2: &str = "#2F3034";

/// A titled block of copy (service, process step).
#[derive(Debug, Clone, Copy)]
pub struct ContentCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SERVICES: &[ContentCard] = &[
    ContentCard {
        title: "Tráfego pago",
        description: "Campanhas com criativos e copy alinhados à oferta, focadas em lead qualificado.",
    },
    ContentCard {
        title: "Social media",
        description: "Conteúdo com intenção: constrói desejo e melhora a conversão do tráfego.",
    },
    ContentCard {
        title: "Copy",
        description: "Mensagem certa no anúncio e na página, reduzindo objeções e aumentando resposta.",
    },
    ContentCard {
        title: "Estratégia",
        description: "Oferta, funil e posicionamento: sem isso, performance vira sorte.",
    },
    ContentCard {
        title: "Captação de leads",
        description: "WhatsApp + formulário com triagem e roteiro pra vender com previsibilidade.",
    },
    ContentCard {
        title: "Vídeo (gravação/edição)",
        description: "Criativos de performance: hook, prova, retenção e CTA, sem enrolação.",
    },
];

pub const STEPS: &[ContentCard] = &[
    ContentCard {
        title: "Diagnóstico",
        description: "Entendemos seu cenário e mapeamos o que precisa ser ajustado pra converter melhor.",
    },
    ContentCard {
        title: "Execução",
        description: "Copy + criativos + landing + tracking + campanha no ar com velocidade.",
    },
    ContentCard {
        title: "Otimização",
        description: "Rotina de testes e melhorias contínuas pra baixar CPL e subir qualidade do lead.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Vocês atendem qualquer tipo de negócio?",
        answer: "Atendemos serviços, negócios locais e digitais. O principal é ter oferta clara e demanda real.",
    },
    Faq {
        question: "Preciso ter site pronto?",
        answer: "Não. Subimos uma landing rápida focada em conversão e tráfego pago.",
    },
    Faq {
        question: "Qual o prazo pra começar?",
        answer: "Normalmente 3 a 7 dias, dependendo do volume de criativos e do setup de tracking.",
    },
    Faq {
        question: "Dá pra fazer só tráfego?",
        answer: "Dá. Mas o melhor resultado vem quando copy + criativo + página andam juntos.",
    },
    Faq {
        question: "Como é o primeiro contato?",
        answer: "Você chama no WhatsApp ou preenche o formulário. A gente faz perguntas rápidas e define o próximo passo.",
    },
];

/// GET /
///
/// The query string is parsed leniently; tracking parameters or repeated keys
/// never fail the page.
pub async fn landing_page(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Markup {
    render_landing(&state.contact_link, is_submitted(query.as_deref()))
}

/// Whether the query carries the `ok=1` marker set by the lead redirect.
fn is_submitted(query: Option<&str>) -> bool {
    query
        .map(|q| {
            form_urlencoded::parse(q.as_bytes()).any(|(key, value)| key == "ok" && value == "1")
        })
        .unwrap_or(false)
}

/// Renders the full page. `submitted` shows the thank-you banner.
pub fn render_landing(link: &ContactLinkBuilder, submitted: bool) -> Markup {
    let whatsapp_href = link.href_or(CONTACT_ANCHOR);
    let external = link.has_destination();

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Agência de Marketing" }
                meta name="description" content="Landing page de alta conversão";
                style { (PreEscaped(page_css())) }
            }
            body {
                header class="hero" {
                    p class="brand" { (BRAND_NAME) " • Marketing & Performance" }
                    h1 { "Mais leads qualificados, com copy, criativo e tráfego no mesmo plano." }
                    (cta(&whatsapp_href, external, "Falar no WhatsApp"))
                    a class="cta-secondary" href=(CONTACT_ANCHOR) { "Entre em contato" }
                }

                @if submitted {
                    div class="banner" role="status" {
                        "Recebemos seus dados! Em breve a gente te chama no WhatsApp."
                    }
                }

                main {
                    section id="servicos" {
                        h2 { "Serviços" }
                        div class="grid" {
                            @for card in SERVICES {
                                (content_card(card))
                            }
                        }
                    }

                    section id="processo" {
                        h2 { "Como funciona" }
                        ol class="steps" {
                            @for (i, step) in STEPS.iter().enumerate() {
                                li {
                                    span class="step-index" { (format!("{:02}", i + 1)) }
                                    (content_card(step))
                                }
                            }
                        }
                    }

                    section id="faq" {
                        h2 { "Perguntas frequentes" }
                        @for faq in FAQS {
                            details {
                                summary { (faq.question) }
                                p { (faq.answer) }
                            }
                        }
                    }

                    section id="contato" {
                        h2 { "Quer um diagnóstico rápido?" }
                        (lead_form())
                        (cta(&whatsapp_href, external, "Prefiro chamar no WhatsApp"))
                    }
                }

                footer {
                    p { "© " (BRAND_NAME) " • Marketing & Performance" }
                }
            }
        }
    }
}

fn content_card(card: &ContentCard) -> Markup {
    html! {
        div class="card" {
            p class="card-title" { (card.title) }
            p class="card-desc" { (card.description) }
        }
    }
}

fn cta(href: &str, external: bool, label: &str) -> Markup {
    html! {
        @if external {
            a class="cta" href=(href) target="_blank" rel="noopener noreferrer" { (label) }
        } @else {
            a class="cta" href=(href) { (label) }
        }
    }
}

fn lead_form() -> Markup {
    html! {
        form action="/api/lead" method="POST" class="lead-form" {
            label {
                "Nome"
                input name="name" type="text" placeholder="Seu nome" required;
            }
            label {
                "WhatsApp"
                input name="whatsapp" type="tel" placeholder="(11) 99999-9999" required;
            }
            label {
                "Objetivo"
                select name="goal" {
                    @for goal in LeadGoal::ALL {
                        option { (goal.label()) }
                    }
                }
            }
            button type="submit" { "Quero meu diagnóstico" }
        }
    }
}

fn page_css() -> String {
    format!(
        "body{{margin:0;font-family:system-ui,sans-serif;color:#18181b}}\
         .hero{{background:linear-gradient(180deg,{g1} 0%,{g2} 100%);color:#fff;padding:4rem 1rem}}\
         .brand{{letter-spacing:.16em;text-transform:uppercase;font-size:.85rem}}\
         .cta{{display:inline-block;border-radius:999px;padding:.75rem 1.25rem;color:#fff;\
         background:linear-gradient(90deg,{a1},{a2});text-decoration:none;font-weight:600}}\
         .cta-secondary{{margin-left:1rem;color:#fff}}\
         .banner{{background:#fdf4ff;border:1px solid {a1};padding:1rem;text-align:center}}\
         main{{max-width:72rem;margin:0 auto;padding:2rem 1rem}}\
         .grid{{display:grid;gap:1rem;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr))}}\
         .card{{border:1px solid #e4e4e7;border-radius:1.5rem;padding:1.25rem}}\
         .card-title{{font-weight:600}}.card-desc{{color:#52525b}}\
         .step-index{{color:{a1};font-weight:700}}\
         .lead-form{{display:grid;gap:.75rem;max-width:32rem;margin-bottom:1rem}}\
         .lead-form label{{display:grid;gap:.25rem}}",
        g1 = GRAPHITE,
        g2 = GRAPHITE_2,
        a1 = ACCENT,
        a2 = ACCENT_2,
    )
}
