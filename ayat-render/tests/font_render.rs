//! Renders with a real font face when one is installed; otherwise the tests
//! return early.

use ayat_render::{shape, FontContext, RenderConfig, TextRasterizer, VerseAddress, VerseImageGenerator};

fn load_font() -> Option<FontContext> {
    match FontContext::initialize_fonts() {
        Ok(font) => Some(font),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

// الحمد لله رب العالمين
const AL_HAMD: &str = "\u{0627}\u{0644}\u{062D}\u{0645}\u{062F} \u{0644}\u{0644}\u{0647} \u{0631}\u{0628} \u{0627}\u{0644}\u{0639}\u{0627}\u{0644}\u{0645}\u{064A}\u{0646}";

#[test]
fn real_font_render_is_deterministic_and_not_blank() {
    let Some(font) = load_font() else { return };
    let mut generator = VerseImageGenerator::new(font, RenderConfig::default());
    let shaped = shape(AL_HAMD);
    let address = VerseAddress::new(1, 2);

    let a = generator
        .render_canvas(&shaped, "[All] praise is [due] to Allah, Lord of the worlds", address)
        .unwrap();
    let b = generator
        .render_canvas(&shaped, "[All] praise is [due] to Allah, Lord of the worlds", address)
        .unwrap();

    assert_eq!(a.dimensions(), (1920, 1080));
    assert_eq!(a.as_raw(), b.as_raw());
    assert!(a.pixels().any(|p| p.0 != [0, 0, 0]));
    // Nothing is drawn above the top margin
    assert!((0..100).all(|y| (0..1920).all(|x| a.get_pixel(x, y).0 == [0, 0, 0])));
}

#[test]
fn measured_width_grows_with_text() {
    let Some(mut font) = load_font() else { return };
    let short = font.measure("Say", 35.0);
    let long = font.measure("Say, He is Allah, [who is] One", 35.0);

    assert!(short.width > 0.0);
    assert!(long.width > short.width);
    assert!(short.height > 0.0);
    assert_eq!(font.measure("", 35.0).width, 0.0);
}
