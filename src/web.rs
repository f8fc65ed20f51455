// Browser side of the background: owns the requestAnimationFrame loop and
// the window resize listener, and tears both down on dispose.

use crate::animation::Animation;
use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::surface::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

// The frame closure re-arms itself, so it has to be reachable from inside
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct ParticleBackground {
    inner: Option<Running>,
}

#[wasm_bindgen]
impl ParticleBackground {
    // Starts animating `canvas` at the size of the window.
    //
    // `options` may be undefined, a plain object or a JSON string. When the
    // canvas has no 2d context (or the options are invalid) a warning is
    // logged and the returned handle does nothing.
    pub fn mount(canvas: HtmlCanvasElement, options: JsValue) -> ParticleBackground {
        match Running::start(canvas, &options) {
            Ok(running) => ParticleBackground {
                inner: Some(running),
            },
            Err(err) => {
                log::warn!("particle background disabled: {}", err);
                ParticleBackground { inner: None }
            }
        }
    }

    // Forwards a viewport size that the page tracks itself.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(running) = &self.inner {
            running.resize(width, height);
        }
    }

    pub fn dispose(&mut self) {
        // Dropping stops the loop and removes the listener
        self.inner.take();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner
            .as_ref()
            .map_or(false, |r| r.animation.borrow().is_running())
    }
}

struct Running {
    window: Window,
    animation: Rc<RefCell<Animation<CanvasSurface>>>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl Running {
    fn start(canvas: HtmlCanvasElement, options: &JsValue) -> Result<Running, FieldError> {
        let window = web_sys::window().ok_or(FieldError::NoWindow)?;
        let config = parse_options(options)?;
        let surface = CanvasSurface::new(canvas)?;
        let (width, height) = viewport_size(&window)?;

        let seed = config.seed;
        let field = match seed {
            Some(seed) => ParticleField::new(config, width, height, &mut StdRng::seed_from_u64(seed)),
            None => ParticleField::new(config, width, height, &mut rand::thread_rng()),
        };
        log::info!(
            "particle background: {} particles on {}x{}",
            field.particles().len(),
            width,
            height
        );

        let animation = Rc::new(RefCell::new(Animation::new(field, surface)));
        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));

        {
            let animation = animation.clone();
            let window = window.clone();
            let next = frame.clone();
            let frame_id = frame_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame_id.set(None);
                if animation.borrow_mut().tick().is_none() {
                    return;
                }
                if let Some(callback) = next.borrow().as_ref() {
                    match request_frame(&window, callback) {
                        Ok(id) => frame_id.set(Some(id)),
                        Err(err) => log::warn!("particle background stopped: {}", err),
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        let on_resize = {
            let animation = animation.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || match viewport_size(&window) {
                Ok((width, height)) => {
                    if animation.borrow_mut().resize(width, height) {
                        log::debug!("particle background resized to {}x{}", width, height);
                    }
                }
                Err(err) => log::warn!("ignoring resize: {}", err),
            }) as Box<dyn FnMut()>)
        };

        // From here on an early return drops `running`, which stops it
        let running = Running {
            window,
            animation,
            frame,
            frame_id,
            on_resize,
        };
        running
            .window
            .add_event_listener_with_callback("resize", running.on_resize.as_ref().unchecked_ref())
            .map_err(FieldError::from_js)?;
        let first = match running.frame.borrow().as_ref() {
            Some(callback) => request_frame(&running.window, callback),
            None => Err(FieldError::Js("frame callback missing".to_owned())),
        };
        running.frame_id.set(Some(first?));
        Ok(running)
    }

    fn resize(&self, width: u32, height: u32) {
        if self.animation.borrow_mut().resize(width, height) {
            log::debug!("particle background resized to {}x{}", width, height);
        }
    }

    fn stop(&mut self) {
        if !self.animation.borrow().is_running() {
            return;
        }
        self.animation.borrow_mut().dispose();
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {:?}", err);
            }
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("removing resize listener failed: {:?}", err);
        }
        // Breaks the closure's reference to itself
        self.frame.borrow_mut().take();
        log::info!("particle background disposed");
    }
}

impl Drop for Running {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, FieldError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(FieldError::from_js)
}

fn viewport_size(window: &Window) -> Result<(u32, u32), FieldError> {
    let width = window.inner_width().map_err(FieldError::from_js)?;
    let height = window.inner_height().map_err(FieldError::from_js)?;
    Ok((
        width.as_f64().unwrap_or(0.0) as u32,
        height.as_f64().unwrap_or(0.0) as u32,
    ))
}

fn parse_options(options: &JsValue) -> Result<FieldConfig, FieldError> {
    if options.is_undefined() || options.is_null() {
        return Ok(FieldConfig::default());
    }
    let json = match options.as_string() {
        Some(text) => text,
        None => js_sys::JSON::stringify(options)
            .map(String::from)
            .map_err(FieldError::from_js)?,
    };
    FieldConfig::from_json(&json)
}
