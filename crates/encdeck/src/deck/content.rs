use eframe::egui::Color32;

use super::{Block, Card, GraphicKind, ModelCard, Panel, Slide, Span};

/// Prompt suggestions shown under the presenter notes.
pub const QUICK_PROMPTS: [&str; 3] = [
    "\"Show me an example screenshot and ask the model to explain it.\"",
    "\"Try OCR on a receipt. What's the total and items?\"",
    "\"What's the smallest model that still works well?\"",
];

fn card(title: &str, detail: &str) -> Card {
    Card {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn panel(title: &str, bullets: &[&str]) -> Panel {
    Panel {
        title: title.to_string(),
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
    }
}

/// The hand-authored workshop slides, in presentation order.
pub fn workshop_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Multimodal Models".to_string(),
            kicker: "Local-first AI Workshop".to_string(),
            body: vec![
                Block::Paragraph {
                    spans: vec![Span::text(
                        "Multimodal models understand more than text - they can reason \
                         over images, audio, video, and documents.",
                    )],
                },
                Block::Cards {
                    items: vec![
                        card("Text", "Instructions, chat, tool calls"),
                        card("Images", "Screenshots, UI, photos"),
                        card("Audio", "Speech, background context"),
                        card("Video", "Events, actions, motion"),
                    ],
                },
            ],
            notes: Some(
                "Define multimodal simply. Emphasize shared representation across \
                 modalities. This audience cares about running it locally."
                    .to_string(),
            ),
            compact_heading: false,
            graphic: Some(GraphicKind::SharedCore),
            doc_page: None,
        },
        Slide {
            title: "Cloud vs Local".to_string(),
            kicker: "Tradeoffs that matter".to_string(),
            body: vec![
                Block::Panels {
                    items: vec![
                        panel(
                            "Cloud",
                            &[
                                "Easy scale, best frontier quality",
                                "Network latency + ongoing token cost",
                                "Less control over privacy + data flow",
                            ],
                        ),
                        panel(
                            "Local",
                            &[
                                "Private by default",
                                "Low latency, offline-capable",
                                "Quantization + hardware constraints",
                            ],
                        ),
                    ],
                },
                Block::Callout {
                    spans: vec![
                        Span::text("For this workshop, we focus on "),
                        Span::strong("local-first"),
                        Span::text(
                            ": run models on your laptop / mini-PC, keep data private, \
                             iterate fast.",
                        ),
                    ],
                },
            ],
            notes: Some(
                "Keep it practical: latency, privacy, cost, control. Tie back to \
                 OpenClaw philosophy."
                    .to_string(),
            ),
            compact_heading: false,
            graphic: None,
            doc_page: None,
        },
        Slide {
            title: "What makes a model good locally?".to_string(),
            kicker: "Builder checklist".to_string(),
            body: vec![
                Block::Cards {
                    items: vec![
                        card("Runs in Ollama / LM Studio", ""),
                        card("Quantizes well (4-8 bit)", ""),
                        card("Fast first-token latency", ""),
                        card("Good OCR + screenshot understanding", ""),
                        card("Stable + low hallucination on images", ""),
                        card("Fits your VRAM budget", ""),
                    ],
                },
                Block::Callout {
                    spans: vec![
                        Span::strong("Rule of thumb:"),
                        Span::text(
                            " the best model is the one you can run reliably on your machine.",
                        ),
                    ],
                },
            ],
            notes: Some("Keep it actionable. This is what people ask during setup.".to_string()),
            compact_heading: false,
            graphic: None,
            doc_page: None,
        },
        Slide {
            title: "Good Local Multimodal Models".to_string(),
            kicker: "Practical VLM choices".to_string(),
            body: vec![Block::ModelCards {
                items: vec![
                    ModelCard {
                        name: "Qwen2.5-Omni-7B".to_string(),
                        why: "Native multimodal model (text + image + audio + video)".to_string(),
                        fit: "Desktop / server".to_string(),
                        url: "https://huggingface.co/Qwen/Qwen2.5-Omni-7B".to_string(),
                        tint: Color32::from_rgb(0x8B, 0x5C, 0xF6),
                        facts: vec![
                            ("Params".to_string(), "7B".to_string()),
                            ("OmniBench avg".to_string(), "56.13".to_string()),
                            ("15s BF16 VRAM".to_string(), "31.11GB".to_string()),
                        ],
                    },
                    ModelCard {
                        name: "MiniCPM-V 2.6".to_string(),
                        why: "Efficient, strong small-model performance".to_string(),
                        fit: "Laptop / edge".to_string(),
                        url: "https://huggingface.co/openbmb/MiniCPM-V-2_6".to_string(),
                        tint: Color32::from_rgb(0x06, 0xB6, 0xD4),
                        facts: vec![
                            ("Params".to_string(), "8B".to_string()),
                            ("Ollama size".to_string(), "5.5GB".to_string()),
                            ("OpenCompass avg".to_string(), "65.2".to_string()),
                        ],
                    },
                    ModelCard {
                        name: "Qwen2.5-VL-7B".to_string(),
                        why: "Strong OCR + visual reasoning; multilingual".to_string(),
                        fit: "Desktop / mini-PC".to_string(),
                        url: "https://huggingface.co/Qwen/Qwen2.5-VL-7B-Instruct".to_string(),
                        tint: Color32::from_rgb(0xF5, 0x9E, 0x0B),
                        facts: vec![
                            ("Params".to_string(), "8.29B".to_string()),
                            ("Ollama size".to_string(), "6.0GB".to_string()),
                            ("MMMU (val)".to_string(), "58.6".to_string()),
                        ],
                    },
                    ModelCard {
                        name: "Gemma 3 4B".to_string(),
                        why: "Small multimodal model with strong local footprint".to_string(),
                        fit: "Laptop-friendly".to_string(),
                        url: "https://huggingface.co/google/gemma-3-4b-it".to_string(),
                        tint: Color32::from_rgb(0x22, 0xC5, 0x5E),
                        facts: vec![
                            ("Params".to_string(), "4.3B".to_string()),
                            ("Ollama size".to_string(), "3.3GB".to_string()),
                            ("Context".to_string(), "128K".to_string()),
                        ],
                    },
                ],
            }],
            notes: Some(
                "Name-drop a few strong local options. Don't overclaim 'best' - \
                 emphasize 'good for local demos'."
                    .to_string(),
            ),
            compact_heading: true,
            graphic: Some(GraphicKind::FitMap),
            doc_page: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workshop_slide_order() {
        let slides = workshop_slides();
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[0].title, "Multimodal Models");
        assert_eq!(slides[3].title, "Good Local Multimodal Models");
        assert!(slides[3].compact_heading);
    }

    #[test]
    fn test_comparison_slides_are_single_column() {
        let slides = workshop_slides();
        assert!(slides[1].graphic.is_none());
        assert!(slides[2].graphic.is_none());
    }

    #[test]
    fn test_model_cards_carry_facts() {
        let slides = workshop_slides();
        let Block::ModelCards { items } = &slides[3].body[0] else {
            panic!("expected model cards on the VLM slide");
        };
        assert_eq!(items.len(), 4);
        for m in items {
            assert_eq!(m.facts.len(), 3);
            assert!(m.url.starts_with("https://huggingface.co/"));
        }
    }
}
