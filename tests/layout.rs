use std::{cell::Cell, rc::Rc};

use arbor::{
    Container, Drawable, Invalidation, LayoutEvent, Lifetime, NodeId, Scene, SceneConfig,
    SizeMode, Vec2, vec2,
};
use proptest::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn auto_container(scene: &mut Scene, drawable: Drawable) -> NodeId {
    let root = scene.root();
    let c = scene.insert_auto_size(drawable);
    scene.add(root, c);
    c
}

fn count_recomputes(scene: &mut Scene, id: NodeId) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    scene.on_auto_size(id, move || h.set(h.get() + 1));
    hits
}

fn count_shape_invalidations(scene: &mut Scene, id: NodeId) -> Rc<Cell<usize>> {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    scene.on_invalidate(id, move |fresh| {
        if fresh.contains(Invalidation::SCREEN_SHAPE) {
            h.set(h.get() + 1);
        }
    });
    hits
}

#[test]
fn fixed_and_inheriting_children_multiply() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let a = scene.insert(Drawable::new().with_size(vec2(10.0, 20.0)));
    let b = scene.insert(
        Drawable::new()
            .with_size(vec2(5.0, 5.0))
            .with_size_mode(SizeMode::X),
    );
    scene.add_range(c, [a, b]);

    scene.update(0.0);
    assert_eq!(scene.actual_size(c), vec2(50.0, 20.0));
    assert_eq!(scene.actual_size(b), vec2(250.0, 5.0));
}

#[test]
fn each_axis_is_measured_from_the_other_child() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let wide_fill = scene.insert(
        Drawable::new()
            .with_size(vec2(2.0, 30.0))
            .with_size_mode(SizeMode::X),
    );
    let tall_fill = scene.insert(
        Drawable::new()
            .with_size(vec2(40.0, 3.0))
            .with_size_mode(SizeMode::Y),
    );
    scene.add_range(c, [wide_fill, tall_fill]);

    scene.update(0.0);
    // width 40 from the Y-inheriting child, height 30 from the X-inheriting one
    assert_eq!(scene.actual_size(c), vec2(80.0, 90.0));
}

#[test]
fn hiding_a_child_shrinks_and_showing_restores() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let small = scene.insert(Drawable::new().with_size(vec2(10.0, 10.0)));
    let wide = scene.insert(Drawable::new().with_size(vec2(30.0, 5.0)));
    scene.add_range(c, [small, wide]);
    scene.update(0.0);
    assert_eq!(scene.actual_size(c), vec2(30.0, 10.0));

    let shapes = count_shape_invalidations(&mut scene, c);
    let recomputes = count_recomputes(&mut scene, c);

    scene.set_visible(wide, false);
    assert_eq!(shapes.get(), 1);
    scene.update(1.0);
    assert_eq!(scene.actual_size(c), vec2(10.0, 10.0));
    assert_eq!(recomputes.get(), 1);

    shapes.set(0);
    scene.set_visible(wide, true);
    assert_eq!(shapes.get(), 1);
    scene.update(2.0);
    assert_eq!(scene.actual_size(c), vec2(30.0, 10.0));
    assert_eq!(recomputes.get(), 2);
}

#[test]
fn fully_inheriting_container_never_recomputes() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(
        &mut scene,
        Drawable::new()
            .with_size(vec2(0.5, 0.5))
            .with_size_mode(SizeMode::XY),
    );
    let child = scene.insert(Drawable::new().with_size(vec2(1000.0, 1000.0)));
    scene.add(c, child);
    let recomputes = count_recomputes(&mut scene, c);

    for frame in 0..5 {
        scene.invalidate(c, Invalidation::SCREEN_SIZE);
        assert!(!scene.require_auto_size(c));
        assert_eq!(scene.actual_size(c), vec2(400.0, 300.0));
        scene.update(frame as f64);
    }
    assert_eq!(recomputes.get(), 0);
    assert_eq!(scene.actual_size(c), vec2(400.0, 300.0));
}

#[test]
fn only_inheriting_children_fall_back_to_the_parent() {
    init();
    let mut scene = Scene::new(SceneConfig::default().with_size(200.0, 100.0));
    let c = auto_container(&mut scene, Drawable::new());
    let fill = scene.insert(
        Drawable::new()
            .with_size(vec2(1.0, 1.0))
            .with_size_mode(SizeMode::XY),
    );
    scene.add(c, fill);

    assert_eq!(scene.draw_quad_for_bounds(c).size, vec2(200.0, 100.0));
    scene.update(0.0);
    assert_eq!(scene.actual_size(c), vec2(200.0, 100.0));
    assert_eq!(scene.actual_size(fill), vec2(200.0, 100.0));

    let lone = scene.insert_auto_size(Drawable::new());
    let lone_fill = scene.insert(
        Drawable::new()
            .with_size(vec2(1.0, 1.0))
            .with_size_mode(SizeMode::XY),
    );
    scene.add(lone, lone_fill);
    assert_eq!(scene.draw_quad_for_bounds(lone).size, Vec2::ZERO);
}

#[test]
fn adding_after_settling_recomputes_once() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let a = scene.insert(Drawable::new().with_size(vec2(3.0, 3.0)));
    let b = scene.insert(Drawable::new().with_size(vec2(4.0, 4.0)));
    scene.add_range(c, [a, b]);
    scene.update(0.0);
    assert!(!scene.require_auto_size(c));

    let recomputes = count_recomputes(&mut scene, c);
    let third = scene.insert(
        Drawable::new()
            .with_position(vec2(10.0, 0.0))
            .with_size(vec2(5.0, 5.0)),
    );
    scene.add(c, third);
    assert!(scene.require_auto_size(c));

    scene.update(1.0);
    scene.update(2.0);
    assert_eq!(recomputes.get(), 1);
    assert_eq!(scene.actual_size(c), vec2(15.0, 5.0));
}

#[test]
fn removing_recomputes_once() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let a = scene.insert(Drawable::new().with_size(vec2(3.0, 3.0)));
    let b = scene.insert(Drawable::new().with_size(vec2(40.0, 4.0)));
    scene.add_range(c, [a, b]);
    scene.update(0.0);

    let recomputes = count_recomputes(&mut scene, c);
    assert!(scene.remove(c, b, true));
    scene.update(1.0);
    scene.update(2.0);
    assert_eq!(recomputes.get(), 1);
    assert_eq!(scene.actual_size(c), vec2(3.0, 3.0));
}

#[test]
fn expired_child_is_removed_and_container_shrinks() {
    init();
    let mut scene = Scene::default();
    let events = scene.subscribe();
    let c = auto_container(&mut scene, Drawable::new());
    let stays = scene.insert(Drawable::new().with_size(vec2(10.0, 10.0)));
    let flash = scene.insert(
        Drawable::new()
            .with_size(vec2(50.0, 50.0))
            .with_lifetime(Lifetime::new(0.0, 1.0))
            .with_remove_when_not_alive(true),
    );
    scene.add_range(c, [stays, flash]);

    scene.update(0.5);
    assert_eq!(scene.actual_size(c), vec2(50.0, 50.0));
    scene.update(1.0);
    assert!(!scene.contains(flash));
    assert_eq!(scene.actual_size(c), vec2(10.0, 10.0));

    let seen: Vec<_> = events.try_iter().collect();
    assert_eq!(
        seen,
        vec![
            LayoutEvent::AutoSized(c),
            LayoutEvent::Expired(flash),
            LayoutEvent::AutoSized(c),
        ]
    );
}

#[test]
fn child_not_yet_alive_does_not_count() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let now = scene.insert(Drawable::new().with_size(vec2(5.0, 5.0)));
    let later = scene.insert(
        Drawable::new()
            .with_size(vec2(20.0, 20.0))
            .with_lifetime(Lifetime::new(2.0, f64::INFINITY)),
    );
    scene.add_range(c, [now, later]);

    scene.update(0.0);
    assert_eq!(scene.actual_size(c), vec2(5.0, 5.0));
    scene.update(2.0);
    assert_eq!(scene.actual_size(c), vec2(20.0, 20.0));
}

#[test]
fn rotated_child_counts_with_its_bounding_box() {
    init();
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    let child = scene.insert(
        Drawable::new()
            .with_position(vec2(10.0, 0.0))
            .with_size(vec2(10.0, 10.0))
            .with_rotation(std::f32::consts::FRAC_PI_2),
    );
    scene.add(c, child);

    scene.update(0.0);
    let size = scene.actual_size(c);
    assert!((size - vec2(10.0, 10.0)).abs().max_element() < 1e-4);
}

#[test]
fn masked_auto_container_clips_to_its_measured_bounds() {
    init();
    let mut scene = Scene::default();
    let root = scene.root();
    let c = scene.insert_container(
        Drawable::new().with_position(vec2(5.0, 5.0)),
        Container::auto_sized().with_masking(true),
    );
    scene.add(root, c);
    let leaf = scene.insert(Drawable::new().with_size(vec2(12.0, 8.0)));
    scene.add(c, leaf);

    let tree = scene.frame(0.0).unwrap();
    let clip = tree.children[0].clip.unwrap();
    assert_eq!(clip.origin, vec2(5.0, 5.0));
    assert_eq!(clip.size, vec2(12.0, 8.0));
}

/// outer auto container holding an inner one that takes its width from outer.
fn nested_auto(scene: &mut Scene) -> (NodeId, NodeId) {
    let outer = auto_container(scene, Drawable::new());
    let inner = scene.insert_auto_size(
        Drawable::new()
            .with_size(vec2(1.0, 0.0))
            .with_size_mode(SizeMode::X),
    );
    let leaf = scene.insert(Drawable::new().with_size(vec2(4.0, 6.0)));
    let fixed = scene.insert(Drawable::new().with_size(vec2(30.0, 10.0)));
    scene.add_range(outer, [inner, fixed]);
    scene.add(inner, leaf);
    (outer, inner)
}

#[test]
fn nested_inheriting_auto_size_settles() {
    init();
    let mut scene = Scene::default();
    let (outer, inner) = nested_auto(&mut scene);
    scene.update(0.0);
    scene.update(1.0);

    let outer_hits = count_recomputes(&mut scene, outer);
    let inner_hits = count_recomputes(&mut scene, inner);
    let events = scene.subscribe();
    for frame in 2..12 {
        scene.update(frame as f64);
        assert!(!scene.require_auto_size(outer));
        assert!(!scene.require_auto_size(inner));
    }
    assert_eq!(outer_hits.get(), 0);
    assert_eq!(inner_hits.get(), 0);
    assert_eq!(events.try_iter().count(), 0);

    assert_eq!(scene.actual_size(outer), vec2(30.0, 10.0));
    assert_eq!(scene.drawable(inner).unwrap().size(), vec2(1.0, 6.0));
    assert_eq!(scene.actual_size(inner), vec2(30.0, 6.0));

    let tree = scene.draw().unwrap();
    let drawn = tree.children[0].children[0].quad.bottom_right;
    assert_eq!(drawn, vec2(30.0, 6.0));
}

#[test]
fn growing_the_inner_container_recomputes_each_level_once() {
    init();
    let mut scene = Scene::default();
    let (outer, inner) = nested_auto(&mut scene);
    scene.update(0.0);

    let outer_hits = count_recomputes(&mut scene, outer);
    let inner_hits = count_recomputes(&mut scene, inner);
    let tall = scene.insert(Drawable::new().with_size(vec2(4.0, 12.0)));
    scene.add(inner, tall);
    assert!(scene.require_auto_size(inner));
    assert!(scene.require_auto_size(outer));

    for frame in 1..4 {
        scene.update(frame as f64);
    }
    assert_eq!(inner_hits.get(), 1);
    assert_eq!(outer_hits.get(), 1);
    assert_eq!(scene.actual_size(inner), vec2(30.0, 12.0));
    assert_eq!(scene.actual_size(outer), vec2(30.0, 12.0));
}

fn boxes() -> impl Strategy<Value = Vec<(u8, u8, u8, u8)>> {
    prop::collection::vec((0u8..50, 0u8..50, 1u8..40, 1u8..40), 1..8)
}

fn measure(children: &[(u8, u8, u8, u8)]) -> Vec2 {
    let mut scene = Scene::default();
    let c = auto_container(&mut scene, Drawable::new());
    for &(x, y, w, h) in children {
        let child = scene.insert(
            Drawable::new()
                .with_position(vec2(x.into(), y.into()))
                .with_size(vec2(w.into(), h.into())),
        );
        scene.add(c, child);
    }
    scene.update(0.0);
    scene.actual_size(c)
}

proptest! {
    #[test]
    fn bounds_do_not_depend_on_child_order(children in boxes()) {
        let forward = measure(&children);
        let mut reversed = children.clone();
        reversed.reverse();
        prop_assert_eq!(forward, measure(&reversed));

        let right = children
            .iter()
            .map(|&(x, _, w, _)| f32::from(x) + f32::from(w))
            .fold(0.0, f32::max);
        let bottom = children
            .iter()
            .map(|&(_, y, _, h)| f32::from(y) + f32::from(h))
            .fold(0.0, f32::max);
        prop_assert_eq!(forward, vec2(right, bottom));
    }
}
