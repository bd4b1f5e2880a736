//! Weather background mounted on a browser canvas

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::{fit_to_viewport, CanvasPainter};
use crate::config::BackdropOptions;
use crate::error::BackdropError;
use crate::frame_loop::FrameLoop;
use crate::scene::Scene;

struct Stage {
    scene: Scene,
    painter: CanvasPainter,
    rng: SmallRng,
}

impl Stage {
    fn tick(&mut self) {
        if let Err(err) = self.scene.render_frame(&mut self.painter, &mut self.rng) {
            log::debug!("frame skipped: {err}");
        }
    }
}

/// Keeps the canvas sized to the viewport. Removed from the window on drop.
struct ResizeListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    fn attach(
        window: &Window,
        canvas: HtmlCanvasElement,
        stage: Rc<RefCell<Stage>>,
    ) -> Result<Self, BackdropError> {
        let win = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || match fit_to_viewport(&win, &canvas) {
            Ok((width, height)) => {
                stage.borrow_mut().scene.resize(f64::from(width), f64::from(height));
                log::trace!("canvas resized to {width}x{height}");
            }
            Err(err) => log::debug!("resize failed: {err}"),
        });
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref())
        {
            log::debug!("removing resize listener failed: {:?}", err);
        }
    }
}

struct Mount {
    stage: Rc<RefCell<Stage>>,
    // Dropped in declaration order: stop frames before detaching resize.
    frames: FrameLoop,
    _resize: ResizeListener,
}

impl Mount {
    fn new(options: &BackdropOptions) -> Result<Self, BackdropError> {
        let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
        let document = window.document().ok_or(BackdropError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&options.canvas_id)
            .ok_or_else(|| BackdropError::CanvasNotFound(options.canvas_id.clone()))?
            .dyn_into()
            .map_err(|_| BackdropError::NotACanvas(options.canvas_id.clone()))?;
        let painter = CanvasPainter::new(&canvas)?;

        let (width, height) = fit_to_viewport(&window, &canvas)?;
        let mut rng = SmallRng::from_entropy();
        let scene = Scene::new(
            options.condition.as_deref(),
            f64::from(width),
            f64::from(height),
            &mut rng,
        );
        let condition = scene.condition();

        let stage = Rc::new(RefCell::new(Stage { scene, painter, rng }));
        let resize = ResizeListener::attach(&window, canvas, Rc::clone(&stage))?;

        let frame_stage = Rc::clone(&stage);
        let frames = FrameLoop::start(window, move || frame_stage.borrow_mut().tick())?;

        log::info!(
            "weather background mounted on #{} ({width}x{height}, {condition})",
            options.canvas_id
        );
        Ok(Self {
            stage,
            frames,
            _resize: resize,
        })
    }
}

/// Animated sky behind the page. If the canvas or its 2D context is not
/// available the instance stays inert and draws nothing.
#[wasm_bindgen]
pub struct WeatherBackground {
    mount: Option<Mount>,
}

#[wasm_bindgen]
impl WeatherBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> WeatherBackground {
        let options = BackdropOptions::from_js(options);
        log::set_max_level(options.log_level);

        let mount = match Mount::new(&options) {
            Ok(mount) => Some(mount),
            Err(err) => {
                log::debug!("weather background inert: {err}");
                None
            }
        };
        Self { mount }
    }

    /// Switches weather. A changed label discards every particle and cloud
    /// and generates fresh ones.
    pub fn set_condition(&mut self, label: Option<String>) {
        let Some(mount) = &self.mount else {
            return;
        };
        let mut stage = mount.stage.borrow_mut();
        let Stage { scene, rng, .. } = &mut *stage;
        scene.set_label(label.as_deref(), rng);
    }

    /// Stops the animation and detaches the resize listener.
    pub fn destroy(&mut self) {
        if self.mount.take().is_some() {
            log::info!("weather background destroyed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.frames.is_running())
    }

    pub fn get_condition(&self) -> String {
        self.with_scene(|scene| scene.condition())
            .unwrap_or_default()
            .as_str()
            .into()
    }

    pub fn get_particle_count(&self) -> u32 {
        self.with_scene(|scene| scene.particles().len() as u32).unwrap_or(0)
    }

    pub fn get_cloud_count(&self) -> u32 {
        self.with_scene(|scene| scene.clouds().len() as u32).unwrap_or(0)
    }
}

impl WeatherBackground {
    fn with_scene<T>(&self, f: impl FnOnce(&Scene) -> T) -> Option<T> {
        self.mount.as_ref().map(|m| f(&m.stage.borrow().scene))
    }
}
