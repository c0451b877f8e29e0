use arbor::{
    Container, Drawable, LayoutEvent, Result, Scene, SceneConfig, SizeMode, debug::dump_tree, vec2,
};

fn main() -> Result<()> {
    arbor::init_logging();

    let config = SceneConfig::default()
        .with_name("demo")
        .with_size(640.0, 480.0);
    let mut scene = Scene::new(config);
    let events = scene.subscribe();
    let root = scene.root();

    let panel = scene.insert_container(
        Drawable::new().with_name("panel").with_position(vec2(20.0, 20.0)),
        Container::auto_sized().with_masking(true),
    );
    scene.try_add(root, panel)?;

    let title = scene.insert(
        Drawable::new()
            .with_name("title")
            .with_size(vec2(120.0, 24.0)),
    );
    let rule = scene.insert(
        Drawable::new()
            .with_name("rule")
            .with_position(vec2(0.0, 28.0))
            .with_size(vec2(1.0, 2.0))
            .with_size_mode(SizeMode::X),
    );
    scene.add_range(panel, [title, rule]);

    let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
    let c = clicks.clone();
    scene.on_click(panel, move || {
        c.set(c.get() + 1);
        log::info!("Panel clicked {} time(s)", c.get());
    });

    let frame = scene.frame(0.0);
    for event in events.try_iter() {
        if let LayoutEvent::AutoSized(id) = event {
            log::info!("{id:?} resized to {}", scene.actual_size(id));
        }
    }
    print!("{}", dump_tree(&scene, root));

    scene.click_at(vec2(30.0, 30.0));
    scene.set_size(title, vec2(200.0, 24.0));
    scene.update(1.0);
    print!("{}", dump_tree(&scene, root));

    if let Some(frame) = frame {
        println!("{} quads in the first frame", frame.flatten().len());
    }
    Ok(())
}
