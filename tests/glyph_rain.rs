mod common;

use common::{Op, Recorder};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use snapdeck::color::Color;
use snapdeck::config::GlyphRainConfig;
use snapdeck::glyph_rain::{column_count, GlyphRain};

fn rain(config: &GlyphRainConfig, width: f64, height: f64) -> GlyphRain {
    GlyphRain::new(config, width, height, SmallRng::seed_from_u64(1))
}

#[test]
fn columns_are_whole_glyph_widths() {
    assert_eq!(column_count(1010.0, 20.0), 50);
    assert_eq!(column_count(1000.0, 20.0), 50);
    assert_eq!(column_count(19.0, 20.0), 0);
    assert_eq!(column_count(0.0, 20.0), 0);
    assert_eq!(column_count(100.0, 0.0), 0);
}

#[test]
fn new_rain_starts_every_drop_at_one() {
    let r = rain(&GlyphRainConfig::default(), 1010.0, 600.0);
    assert_eq!(r.drops().len(), 50);
    assert!(r.drops().iter().all(|&d| d == 1));
    assert_eq!(r.font(), "20px arial");
}

#[test]
fn tick_fades_then_prints_one_glyph_per_column() {
    let config = GlyphRainConfig {
        alphabet: "x".into(),
        ..GlyphRainConfig::default()
    };
    let mut r = rain(&config, 100.0, 400.0);
    let mut surface = Recorder::new(100.0, 400.0);
    r.tick(&mut surface);

    assert_eq!(
        surface.ops[0],
        Op::Rect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 400.0,
            color: Color::black(0.1)
        }
    );
    let texts: Vec<&Op> = surface.ops[1..].iter().collect();
    assert_eq!(texts.len(), 5);
    for (column, op) in texts.into_iter().enumerate() {
        assert_eq!(
            op,
            &Op::Text {
                text: "x".into(),
                x: column as f64 * 20.0,
                y: 20.0,
                font: "20px arial".into()
            }
        );
    }
    assert!(r.drops().iter().all(|&d| d == 2));
}

#[test]
fn glyphs_come_from_the_alphabet() {
    let config = GlyphRainConfig {
        alphabet: "01".into(),
        ..GlyphRainConfig::default()
    };
    let mut r = rain(&config, 400.0, 400.0);
    let mut surface = Recorder::new(400.0, 400.0);
    for _ in 0..10 {
        r.tick(&mut surface);
    }
    let texts = surface.count(|op| matches!(op, Op::Text { text, .. } if text == "0" || text == "1"));
    assert_eq!(texts, 10 * 20);
}

#[test]
fn drops_below_the_bottom_respawn_when_the_dice_say_so() {
    let always = GlyphRainConfig {
        respawn_probability: 1.0,
        ..GlyphRainConfig::default()
    };
    let mut r = rain(&always, 60.0, 40.0);
    let mut surface = Recorder::new(60.0, 40.0);
    // Rows 1 and 2 are still on screen, row 3 (60px) is past the bottom.
    r.tick(&mut surface);
    r.tick(&mut surface);
    assert!(r.drops().iter().all(|&d| d == 3));
    r.tick(&mut surface);
    assert!(r.drops().iter().all(|&d| d == 1));
}

#[test]
fn drops_keep_falling_without_respawn() {
    let never = GlyphRainConfig {
        respawn_probability: 0.0,
        ..GlyphRainConfig::default()
    };
    let mut r = rain(&never, 60.0, 40.0);
    let mut surface = Recorder::new(60.0, 40.0);
    for _ in 0..10 {
        r.tick(&mut surface);
    }
    assert!(r.drops().iter().all(|&d| d == 11));
}

#[test]
fn resize_keeps_surviving_columns() {
    let mut r = rain(&GlyphRainConfig::default(), 100.0, 400.0);
    r.tick(&mut Recorder::new(100.0, 400.0));

    r.resize(50.0, 400.0);
    assert_eq!(r.drops(), &[2, 2]);

    r.resize(150.0, 400.0);
    assert_eq!(r.drops(), &[2, 2, 1, 1, 1, 1, 1]);
}

#[test]
fn same_seed_same_rain() {
    let config = GlyphRainConfig::default();
    let mut a = rain(&config, 200.0, 200.0);
    let mut b = rain(&config, 200.0, 200.0);
    let mut sa = Recorder::new(200.0, 200.0);
    let mut sb = Recorder::new(200.0, 200.0);
    for _ in 0..50 {
        a.tick(&mut sa);
        b.tick(&mut sb);
    }
    assert_eq!(sa.ops, sb.ops);
    assert_eq!(a.drops(), b.drops());
}
