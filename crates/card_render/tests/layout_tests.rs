use card_render::{
    layout_card, CanvasSize, CardSpec, CardTextFields, Color, FontSet, Shape, TextAnchor,
    VisualFormat,
};

fn layout(format: VisualFormat, fields: &CardTextFields) -> CardSpec {
    layout_card(format, fields, CanvasSize::default(), &FontSet::builtin())
}

fn runs(spec: &CardSpec) -> Vec<String> {
    spec.text_runs().map(str::to_string).collect()
}

fn rounded_rects(spec: &CardSpec) -> Vec<(f32, f32, f32, f32, Option<Color>)> {
    spec.shapes
        .iter()
        .filter_map(|s| match s {
            Shape::RoundedRect {
                origin,
                width,
                height,
                fill,
                ..
            } => Some((origin.x, origin.y, *width, *height, *fill)),
            _ => None,
        })
        .collect()
}

fn fields() -> CardTextFields {
    CardTextFields {
        hook: "hola".to_string(),
        pain_point: "dolor".to_string(),
        explanation: "causa".to_string(),
        action_step: "accion".to_string(),
        call_to_action: "cta".to_string(),
        watermark_text: "natala.online".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_empty_fields_emit_no_text() {
    for format in VisualFormat::ALL {
        let spec = layout(format, &CardTextFields::default());
        assert!(spec.text_runs().all(|t| !t.is_empty()));
        assert!(!runs(&spec).contains(&"> ".to_string()));
    }
}

#[test]
fn test_notes_ruled_lines_and_action_prefix() {
    let spec = layout(VisualFormat::Notes, &fields());
    let lines = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Line { .. }))
        .count();
    // 230, 282, ... while y < 1820
    assert_eq!(lines, 31);
    assert!(runs(&spec).contains(&"> accion".to_string()));
    assert_eq!(spec.background, Color::hex(0xFFF8DC));
}

#[test]
fn test_notes_cta_pinned_near_bottom() {
    let spec = layout(VisualFormat::Notes, &fields());
    let cta_y = spec.shapes.iter().find_map(|s| match s {
        Shape::Text {
            content, position, ..
        } if content == "cta" => Some(position.y),
        _ => None,
    });
    assert_eq!(cta_y, Some(1920.0 - 250.0));
}

#[test]
fn test_chat_conversation_order() {
    let spec = layout(VisualFormat::Chat, &fields());
    let order: Vec<String> = runs(&spec)
        .into_iter()
        .filter(|t| ["dolor", "hola", "causa", "accion", "cta"].contains(&t.as_str()))
        .collect();
    assert_eq!(order, vec!["dolor", "hola", "causa", "accion", "cta"]);
    let stamps: Vec<String> = runs(&spec)
        .into_iter()
        .filter(|t| t.ends_with(" PM"))
        .collect();
    assert_eq!(
        stamps,
        vec!["3:42 PM", "3:42 PM", "3:43 PM", "3:43 PM", "3:44 PM", "3:44 PM"]
    );
}

#[test]
fn test_chat_bubble_geometry() {
    let spec = layout(VisualFormat::Chat, &fields());
    let bubbles = rounded_rects(&spec);
    // five bubbles plus the input field
    assert_eq!(bubbles.len(), 6);

    // "hola" in the block face: 4 * 0.6 * 32 = 76.8 wide
    let (x, _, w, h, fill) = bubbles[1];
    assert!((w - (76.8 + 60.0)).abs() < 1e-3);
    assert!((x - (1080.0 - 50.0 - w)).abs() < 1e-3);
    assert!((h - (42.0 + 45.0)).abs() < 1e-3);
    assert_eq!(fill, Some(Color::hex(0x005C4B)));

    let (x, y, _, _, fill) = bubbles[0];
    assert_eq!((x, y), (50.0, 200.0));
    assert_eq!(fill, Some(Color::hex(0x1F2C34)));
    // next bubble: 200 + 87 + 18 + 8
    assert!((bubbles[1].1 - 313.0).abs() < 1e-3);
}

#[test]
fn test_chat_bubble_width_capped() {
    let mut f = fields();
    f.pain_point = format!("{} b", "a".repeat(60));
    let spec = layout(VisualFormat::Chat, &f);
    let (_, _, w, h, _) = rounded_rects(&spec)[0];
    assert!((w - (1080.0 - 250.0)).abs() < 1e-3);
    assert!((h - (2.0 * 42.0 + 45.0)).abs() < 1e-3);
}

#[test]
fn test_chat_skips_blank_bubbles() {
    let f = CardTextFields {
        hook: "solo".to_string(),
        ..Default::default()
    };
    let spec = layout(VisualFormat::Chat, &f);
    let bubbles = rounded_rects(&spec);
    assert_eq!(bubbles.len(), 2);
    assert_eq!(bubbles[0].1, 200.0);
}

fn marks(spec: &CardSpec) -> Vec<String> {
    runs(spec)
        .into_iter()
        .filter(|t| t == "✓" || t == "☐")
        .collect()
}

#[test]
fn test_checklist_pattern() {
    let mut f = fields();
    f.on_screen_lines = vec!["uno".to_string(), "".to_string(), "dos\ntres".to_string()];
    let spec = layout(VisualFormat::Checklist, &f);
    assert_eq!(marks(&spec), vec!["✓", "✓", "☐", "✓", "☐"]);
    let texts = runs(&spec);
    assert!(texts.contains(&"dos".to_string()));
    assert!(!texts.contains(&"tres".to_string()));
}

#[test]
fn test_checklist_blank_slot_keeps_position() {
    let mut f = fields();
    f.explanation.clear();
    f.on_screen_lines = vec!["uno".to_string()];
    let spec = layout(VisualFormat::Checklist, &f);
    // slot 1 skipped; slots 0, 2, 3 drawn
    assert_eq!(marks(&spec), vec!["✓", "☐", "✓"]);
}

#[test]
fn test_diagnostico_clips_to_two_lines() {
    let mut f = fields();
    // each word fills a line: 40 * 0.6 * 34 = 816 > 900 / 2
    f.pain_point = ["a", "b", "c", "d"]
        .iter()
        .map(|c| c.repeat(40))
        .collect::<Vec<_>>()
        .join(" ");
    let spec = layout(VisualFormat::Diagnostico, &f);
    let texts = runs(&spec);
    assert!(texts.contains(&"a".repeat(40)));
    assert!(texts.contains(&"b".repeat(40)));
    assert!(!texts.contains(&"c".repeat(40)));
    for label in ["RESULTADO", "SÍNTOMA", "CAUSA", "ACCIÓN"] {
        assert!(texts.contains(&label.to_string()), "missing {}", label);
    }
    assert_eq!(texts.iter().filter(|t| t.as_str() == "↓").count(), 2);
    assert_eq!(rounded_rects(&spec).len(), 3);
}

#[test]
fn test_tarot_cards() {
    let mut f = fields();
    f.pain_point = (1..=8).map(|i| format!("palabra{:02}x", i)).collect::<Vec<_>>().join(" ");
    let spec = layout(VisualFormat::Tarot, &f);

    let cards: Vec<_> = rounded_rects(&spec)
        .into_iter()
        .filter(|r| r.4.is_some())
        .collect();
    assert_eq!(cards.len(), 3);
    let total = 3.0 * 280.0 + 2.0 * 30.0;
    assert!((cards[0].0 - (1080.0 - total) / 2.0).abs() < 1e-3);
    assert!((cards[2].0 + 280.0 - (1080.0 + total) / 2.0).abs() < 1e-3);
    assert!(cards.iter().all(|c| c.2 == 280.0 && c.3 == 420.0));

    let texts = runs(&spec);
    assert!(texts.contains(&"Elige 1, 2 o 3".to_string()));
    for n in ["1", "2", "3"] {
        assert!(texts.contains(&n.to_string()));
    }
    assert_eq!(texts.iter().filter(|t| t.starts_with("palabra")).count(), 5);
}

#[test]
fn test_minimal_centers_text() {
    let spec = layout(VisualFormat::Minimal, &fields());
    for shape in &spec.shapes {
        if let Shape::Text { position, anchor, .. } = shape {
            assert_eq!(*anchor, TextAnchor::Middle);
            assert_eq!(position.x, 540.0);
        }
    }
    assert_eq!(spec.background, Color::BLACK);
}

#[test]
fn test_unknown_format_uses_minimal() {
    let format: VisualFormat = "CAROUSEL".parse().unwrap();
    assert_eq!(layout(format, &fields()), layout(VisualFormat::Minimal, &fields()));
}

#[test]
fn test_spec_serializes_with_shape_tags() {
    let spec = layout(VisualFormat::Minimal, &fields());
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["width"], 1080);
    assert_eq!(json["shapes"][0]["type"], "Text");
}
