//! Portfolio Ambient entry point
//!
//! On the web this mounts the effects once the module loads (the page loads
//! it after the DOM is ready). Natively it runs a short headless demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let settings = portfolio_ambient::Settings::load();
    let mounted = portfolio_ambient::platform::web::mount(&settings);
    log::info!(
        "Portfolio ambient running (effect: {}, typing: {})",
        mounted.frame_loop.is_some(),
        mounted.typing.is_some()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio ambient (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the real page");

    demo::run_effects();
    demo::run_typing();
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use portfolio_ambient::renderer::{RecordingSurface, Surface};
    use portfolio_ambient::sim::{SurfaceDims, TypingDriver, TypingMachine};
    use portfolio_ambient::{Effect, EffectKind, Settings};

    const FRAMES: u64 = 600;
    const SEED: u64 = 12345;

    /// Ten seconds of each effect at 60 Hz, with a resize halfway through
    pub fn run_effects() {
        for kind in [EffectKind::Starfield, EffectKind::Grid] {
            let settings = Settings {
                effect: kind,
                ..Settings::default()
            };
            let mut surface = RecordingSurface::new(SurfaceDims::new(1280.0, 720.0));
            let mut effect = Effect::from_settings(&settings, surface.dims(), SEED);

            let (mut spawned, mut culled) = (0, 0);
            for frame in 1..=FRAMES {
                if frame == FRAMES / 2 {
                    let dims = surface.resize(SurfaceDims::new(1920.0, 1080.0));
                    effect.resize(dims);
                }
                let outcome = effect.render_frame(&mut surface);
                spawned += outcome.spawned as usize;
                culled += outcome.culled;
            }

            log::info!(
                "{}: {} frames, {} alive, {} spawned, {} culled, {} draw calls in last frame",
                kind.as_str(),
                effect.frame(),
                effect.len(),
                spawned,
                culled,
                surface.commands().len()
            );
        }
    }

    /// One full cycle of the typing effect on a virtual clock
    pub fn run_typing() {
        let typing = Settings::default().typing;
        let delays = typing.delays();
        let machine = match TypingMachine::new(typing.roles, delays) {
            Ok(machine) => machine,
            Err(e) => {
                log::warn!("Typing demo skipped: {e}");
                return;
            }
        };
        let mut driver = TypingDriver::new(machine, 0.0);

        let mut now = 0.0;
        while now <= 15_000.0 {
            driver.poll(now, |text| log::debug!("{now:>7.0} ms  {text:?}"));
            now = driver.next_due_ms();
        }
        log::info!("Typing: {:?} after {:.0} ms", driver.machine().phase(), now);
    }
}
