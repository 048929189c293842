//! Browser bindings
//!
//! Mounts each effect onto its element, drives the ambient effect from
//! `requestAnimationFrame` and the typing machine from a `setTimeout` chain.
//! A missing element or context only skips the effect that needed it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use super::TaskHandle;
use crate::effect::Effect;
use crate::error::{AmbientError, Result};
use crate::greeting::greeting_for_hour;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;
use crate::sim::TypingMachine;

/// Handles for whatever effects managed to start
#[derive(Debug, Default)]
pub struct Mounted {
    pub frame_loop: Option<TaskHandle>,
    pub typing: Option<TaskHandle>,
}

/// Start everything the page has elements for
pub fn mount(settings: &Settings) -> Mounted {
    let Some(window) = web_sys::window() else {
        log::debug!("No window, nothing mounted");
        return Mounted::default();
    };

    if let Err(e) = mount_greeting(&window, settings) {
        log::debug!("Greeting skipped: {e}");
    }

    let typing = mount_typing(&window, settings)
        .inspect_err(|e| log::debug!("Typing effect skipped: {e}"))
        .ok();

    let frame_loop = mount_effect(&window, settings)
        .inspect_err(|e| log::debug!("Ambient effect skipped: {e}"))
        .ok();

    Mounted { frame_loop, typing }
}

/// Seed for an effect's RNG
pub fn seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::fill(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => js_sys::Date::now() as u64,
    }
}

fn element(window: &Window, id: &str) -> Result<Element> {
    window
        .document()
        .ok_or(AmbientError::NoDocument)?
        .get_element_by_id(id)
        .ok_or_else(|| AmbientError::MissingElement(id.to_string()))
}

// ---------------------------------------------------------------------------
// Greeting
// ---------------------------------------------------------------------------

pub fn mount_greeting(window: &Window, settings: &Settings) -> Result<()> {
    let el = element(window, &settings.elements.greeting)?;
    let hour = js_sys::Date::new_0().get_hours();
    el.set_text_content(Some(greeting_for_hour(hour)));
    Ok(())
}

// ---------------------------------------------------------------------------
// Ambient effect
// ---------------------------------------------------------------------------

/// The running effect and the canvas it paints
struct Scene {
    effect: Effect,
    surface: CanvasSurface,
}

pub fn mount_effect(window: &Window, settings: &Settings) -> Result<TaskHandle> {
    let surface = CanvasSurface::from_element_id(window, &settings.elements.canvas)?;
    let dims = surface.resize_to_viewport(window);
    let seed = seed();
    let effect = Effect::from_settings(settings, dims, seed);

    log::info!(
        "{} started: {}x{}, {} entities, seed {}",
        effect.kind().as_str(),
        dims.width,
        dims.height,
        effect.len(),
        seed
    );

    let scene = Rc::new(RefCell::new(Scene { effect, surface }));
    listen_for_resize(window, scene.clone());
    Ok(start_frame_loop(scene))
}

fn listen_for_resize(window: &Window, scene: Rc<RefCell<Scene>>) {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut scene = scene.borrow_mut();
        let dims = scene.surface.resize_to_viewport(&window);
        scene.effect.resize(dims);
    });
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    // Lives as long as the page
    closure.forget();
}

fn start_frame_loop(scene: Rc<RefCell<Scene>>) -> TaskHandle {
    let handle = TaskHandle::new();
    request_frame(scene, handle.clone());
    handle
}

fn request_frame(scene: Rc<RefCell<Scene>>, handle: TaskHandle) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let task = handle.clone();
    let callback = Closure::once_into_js(move |_time: f64| {
        let rearm = task.run(|| {
            let mut scene = scene.borrow_mut();
            let Scene { effect, surface } = &mut *scene;
            effect.render_frame(surface);
        });
        if rearm {
            request_frame(scene, task);
        }
    });

    match window.request_animation_frame(callback.unchecked_ref()) {
        Ok(id) => handle.set_pending(id),
        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
    }
}

/// Stop a frame loop started by `mount_effect`
pub fn stop_frame_loop(handle: &TaskHandle) {
    if let (Some(id), Some(window)) = (handle.cancel(), web_sys::window()) {
        let _ = window.cancel_animation_frame(id);
    }
}

// ---------------------------------------------------------------------------
// Typing effect
// ---------------------------------------------------------------------------

pub fn mount_typing(window: &Window, settings: &Settings) -> Result<TaskHandle> {
    let el = element(window, &settings.elements.typed_text)?;
    let machine = TypingMachine::new(settings.typing.roles.clone(), settings.typing.delays())?;

    let handle = TaskHandle::new();
    // First character goes up right away
    type_tick(machine, el, handle.clone());
    Ok(handle)
}

fn type_tick(mut machine: TypingMachine, el: Element, handle: TaskHandle) {
    let mut delay = Duration::ZERO;
    let rearm = handle.run(|| {
        delay = machine.advance_until_wait(|text| el.set_text_content(Some(text)));
    });
    if rearm {
        schedule_typing(machine, el, handle, delay);
    }
}

fn schedule_typing(machine: TypingMachine, el: Element, handle: TaskHandle, delay: Duration) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let task = handle.clone();
    let callback = Closure::once_into_js(move || type_tick(machine, el, task));
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;

    match window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms) {
        Ok(id) => handle.set_pending(id),
        Err(e) => log::warn!("setTimeout failed: {:?}", e),
    }
}

/// Stop a typing effect started by `mount_typing`
pub fn stop_typing(handle: &TaskHandle) {
    if let (Some(id), Some(window)) = (handle.cancel(), web_sys::window()) {
        window.clear_timeout_with_handle(id);
    }
}
