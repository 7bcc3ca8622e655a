use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use vitrine::engine::ShowcaseEngine;
use vitrine::input::InputEvent;
use vitrine::options::Options;
use vitrine::scene::NullAdapter;
use vitrine::scheduler::FrameScheduler;

/// Scripted interaction: (tick index, event).
fn demo_script() -> Vec<(u32, InputEvent)> {
    vec![
        (60, InputEvent::pointer_enter("original")),
        (120, InputEvent::pointer_leave("original")),
        (180, InputEvent::click("sugarfree")),
        (300, InputEvent::key_down("ArrowRight")),
        (420, InputEvent::key_down("ArrowLeft")),
        (540, InputEvent::key_down("Escape")),
    ]
}

fn run(options: Options) -> Result<(), vitrine::error::VitrineError> {
    let mut engine = ShowcaseEngine::new(options)?;
    for item in engine.items().to_vec() {
        engine.set_item_ready(item.id.as_str(), true);
    }

    let engine = Rc::new(RefCell::new(engine));
    let mut scheduler = FrameScheduler::new();
    let subscription = scheduler.subscribe({
        let engine = Rc::clone(&engine);
        let mut adapter = NullAdapter;
        move |dt, _| {
            let mut engine = engine.borrow_mut();
            let _ = engine.advance(dt);
            engine.apply_to(&mut adapter);
        }
    });

    let script = demo_script();
    for tick in 0..640u32 {
        for (at, event) in &script {
            if *at == tick {
                log::info!("tick {tick}: {event:?}");
                engine.borrow_mut().handle_event(event);
            }
        }

        scheduler.tick_delta(1.0 / 60.0);

        if tick % 60 == 0 {
            let engine = engine.borrow();
            let pose = engine.camera_pose();
            log::info!(
                "tick {tick}: phase {:?}, camera distance {:.2}, \
                 {} particle(s)",
                engine.phase(),
                (pose.position - pose.look_at).length(),
                engine.frame().particles.len(),
            );
        }
    }

    scheduler.unsubscribe(subscription);
    engine.borrow_mut().release();
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options preset: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
