use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::config::{AssetPaths, GameConfig};
use crate::error::{GameError, Result};
use crate::game::GameLoop;
use crate::model::MathRandom;
use crate::state::{AssetId, AssetSet, DelayedTick};

type SharedLoop = Rc<RefCell<GameLoop<HtmlImageElement>>>;
type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct StageViewProps {
    pub config: GameConfig,
}

#[function_component(StageView)]
pub fn stage_view(props: &StageViewProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let mounted = match Mounted::attach(&canvas_ref, &config) {
                Ok(m) => Some(m),
                Err(e) => {
                    log::error!("game failed to start: {}", e);
                    None
                }
            };
            move || drop(mounted)
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            id="stage"
            width={(props.config.stage_width as u32).to_string()}
            height={(props.config.stage_height as u32).to_string()}
            style="display:block;"
        ></canvas>
    }
}

struct ImageLoad {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

/// Everything the running game registered with the browser. Dropping it
/// removes the listeners and stops the frame loop.
struct Mounted {
    window: Window,
    game: SharedLoop,
    key_listeners: Vec<(&'static str, Closure<dyn FnMut(KeyboardEvent)>)>,
    images: Vec<ImageLoad>,
    frame: FrameCell,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl Mounted {
    fn attach(canvas_ref: &NodeRef, config: &GameConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(GameError::MissingGlobal("window"))?;
        let canvas: HtmlCanvasElement = canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or(GameError::CanvasNotMounted)?;
        canvas.set_width(config.stage_width as u32);
        canvas.set_height(config.stage_height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::NoRenderingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::NoRenderingContext)?;

        let assets = AssetSet::build(|_| HtmlImageElement::new().map_err(GameError::from))?;
        let game = GameLoop::new(config, assets, js_sys::Date::now(), &mut MathRandom);

        let mut mounted = Mounted {
            window,
            game: Rc::new(RefCell::new(game)),
            key_listeners: Vec::new(),
            images: Vec::new(),
            frame: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        };
        mounted.load_images(&config.assets);
        mounted.listen("keydown", |game, key| game.key_down(key))?;
        mounted.listen("keyup", |game, key| game.key_up(key))?;
        mounted.start_frames(ctx)?;
        log::info!(
            "stage {}x{} ready, waiting for input",
            config.stage_width,
            config.stage_height
        );
        Ok(mounted)
    }

    fn load_images(&mut self, paths: &AssetPaths) {
        for id in AssetId::ALL {
            let image = self.game.borrow().assets.get(id).handle.clone();
            let onload = {
                let game = self.game.clone();
                Closure::wrap(Box::new(move || {
                    game.borrow_mut().asset_loaded(id);
                }) as Box<dyn FnMut()>)
            };
            let onerror = {
                let path = id.path(paths).to_string();
                Closure::wrap(Box::new(move || {
                    log::warn!("{:?} image `{}` failed to load", id, path);
                }) as Box<dyn FnMut()>)
            };
            image.set_onload(Some(onload.as_ref().unchecked_ref()));
            image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            image.set_src(id.path(paths));
            self.images.push(ImageLoad {
                image,
                _onload: onload,
                _onerror: onerror,
            });
        }
    }

    fn listen(
        &mut self,
        event: &'static str,
        apply: fn(&mut GameLoop<HtmlImageElement>, &str),
    ) -> Result<()> {
        let cb = {
            let game = self.game.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                apply(&mut game.borrow_mut(), &e.key());
            }) as Box<dyn FnMut(_)>)
        };
        // kept before registering so a failure still gets cleaned up on drop
        self.key_listeners.push((event, cb));
        if let Some((_, cb)) = self.key_listeners.last() {
            self.window
                .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    fn start_frames(&mut self, ctx: CanvasRenderingContext2d) -> Result<()> {
        let frame_next = self.frame.clone();
        let game = self.game.clone();
        let window = self.window.clone();
        let raf_id = self.raf_id.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let delayed = game.borrow_mut().frame(js_sys::Date::now(), &ctx, &mut MathRandom);
            if let Some(tick) = delayed {
                if let Err(e) = schedule_delayed(&window, &game, &ctx, tick) {
                    log::warn!("could not schedule first tick: {}", e);
                }
            }
            if let Some(cb) = frame_next.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(e) => log::error!("frame loop stopped: {}", GameError::from(e)),
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = self.frame.borrow().as_ref() {
            let id = self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            self.raf_id.set(Some(id));
        }
        Ok(())
    }
}

fn schedule_delayed(
    window: &Window,
    game: &SharedLoop,
    ctx: &CanvasRenderingContext2d,
    tick: DelayedTick,
) -> Result<()> {
    let game = game.clone();
    let ctx = ctx.clone();
    let cb = Closure::once_into_js(move || {
        game.borrow_mut().delayed(tick, &ctx, &mut MathRandom);
    });
    let delay = i32::try_from(tick.delay_ms).unwrap_or(i32::MAX);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)?;
    Ok(())
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure's reference to its own cell
        self.frame.borrow_mut().take();
        for (event, cb) in &self.key_listeners {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
        for load in &self.images {
            load.image.set_onload(None);
            load.image.set_onerror(None);
        }
        let game = self.game.borrow();
        log::debug!(
            "stage unmounted while {:?} after {} catches",
            game.status(),
            game.state.monsters_caught
        );
    }
}
