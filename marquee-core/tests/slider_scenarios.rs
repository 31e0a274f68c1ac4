use std::collections::HashMap;

use marquee_core::carousel::{
    ComputedLayout, DragSource, NavDirection, SliderController, SliderMessage,
    handle_slider_message, recalculate_bounds,
};
use marquee_core::prelude::*;
use marquee_core::view::{RowContainer, populate_row};

fn measured(max_scroll: f32) -> SliderController {
    let mut controller = SliderController::new(CarouselConfig::default());
    controller.register(CategoryKey::trending(), Vec::new());
    let probe = HashMap::from([(
        CategoryKey::trending(),
        RowMeasurement::new(1200.0 + max_scroll, 1200.0),
    )]);
    recalculate_bounds(&mut controller, &probe);
    controller
}

fn offset(controller: &SliderController) -> f32 {
    controller.get(&CategoryKey::trending()).unwrap().offset()
}

fn send(controller: &mut SliderController, message: SliderMessage) -> SliderUpdate {
    handle_slider_message(controller, message)
}

fn forward() -> SliderMessage {
    SliderMessage::Navigate(CategoryKey::trending(), NavDirection::Forward)
}

#[test]
fn single_page_press_clamps_to_shorter_max() {
    let mut controller = measured(1200.0);
    let update = send(&mut controller, forward());
    let frame = &update.frames[0];
    assert_eq!(frame.offset, 1200.0);
    assert_eq!(frame.transform(), "translateX(-1200px)");
    assert!(!frame.nav.forward_enabled);
    assert!(frame.nav.backward_enabled);
}

#[test]
fn wheel_from_start_moves_one_card() {
    let mut controller = measured(5000.0);
    send(&mut controller, SliderMessage::PointerEntered(CategoryKey::trending()));
    let update = send(
        &mut controller,
        SliderMessage::Wheel {
            key: CategoryKey::trending(),
            delta_y: 53.0,
        },
    );
    assert!(update.suppress_default);
    assert_eq!(offset(&controller), 308.0);
}

#[test]
fn flat_row_ignores_every_input() {
    let mut controller = measured(0.0);
    let key = CategoryKey::trending();
    send(&mut controller, SliderMessage::PointerEntered(key.clone()));

    let inputs = vec![
        forward(),
        SliderMessage::Navigate(key.clone(), NavDirection::Backward),
        SliderMessage::Wheel {
            key: key.clone(),
            delta_y: 100.0,
        },
        SliderMessage::DragStart {
            key: key.clone(),
            source: DragSource::Touch,
            x: 10.0,
        },
        SliderMessage::DragMove {
            key: key.clone(),
            x: -500.0,
        },
        SliderMessage::DragEnd(key.clone()),
    ];
    for input in inputs {
        let update = send(&mut controller, input);
        assert!(update.frames.is_empty());
        assert!(!update.suppress_default);
        assert_eq!(offset(&controller), 0.0);
    }

    let frame = &controller.frames()[0];
    assert!(!frame.nav.backward_enabled && !frame.nav.forward_enabled);
}

#[test]
fn mixed_inputs_never_leave_bounds() {
    let mut controller = measured(2500.0);
    let key = CategoryKey::trending();
    send(&mut controller, SliderMessage::PointerEntered(key.clone()));

    let script = vec![
        forward(),
        forward(),
        SliderMessage::Wheel {
            key: key.clone(),
            delta_y: 1.0,
        },
        SliderMessage::DragStart {
            key: key.clone(),
            source: DragSource::Pointer,
            x: 0.0,
        },
        SliderMessage::DragMove {
            key: key.clone(),
            x: 4000.0,
        },
        SliderMessage::DragMove {
            key: key.clone(),
            x: -9000.0,
        },
        SliderMessage::ReleaseAll,
        SliderMessage::Navigate(key.clone(), NavDirection::Backward),
        SliderMessage::Wheel {
            key: key.clone(),
            delta_y: -1.0,
        },
    ];
    for message in script {
        let update = send(&mut controller, message);
        for frame in &update.frames {
            assert!((0.0..=2500.0).contains(&frame.offset));
        }
    }
    assert_eq!(offset(&controller), 2500.0 - 1848.0 - 308.0);
}

#[test]
fn shrinking_viewport_reclamps_on_recalculation() {
    let mut controller = SliderController::new(CarouselConfig::default());
    let ids = (1..=20).map(ContentId).collect();
    controller.register(CategoryKey::trending(), ids);

    // 20 cards: 6000 + 19 * 8 = 6152 wide.
    let mut layout = ComputedLayout::new(&controller, 1000.0);
    recalculate_bounds(&mut controller, &layout);
    for _ in 0..4 {
        send(&mut controller, forward());
    }
    assert_eq!(offset(&controller), 5152.0);

    layout.set_viewport_width(4000.0);
    let frames = recalculate_bounds(&mut controller, &layout);
    assert_eq!(frames[0].offset, 2152.0);
    assert!(!frames[0].nav.forward_enabled);
}

#[test]
fn populating_twice_keeps_one_set_of_cards() {
    let prefs = Preferences::new(MemoryStore::new());
    let items: Vec<Content> =
        (1..=7u64).map(|id| Content::new(id, format!("T{id}"))).collect();
    let mut row = RowContainer::standard(CategoryKey::originals());

    populate_row(&mut row, &items, &prefs);
    populate_row(&mut row, &items, &prefs);

    assert_eq!(row.card_count(), 7);
    assert!(row.has_prev_control());
    assert!(row.has_next_control());
}
