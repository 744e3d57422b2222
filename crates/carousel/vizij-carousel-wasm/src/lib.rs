use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use vizij_carousel_core::{
    Carousel, CarouselConfig, FixedGeometry, Geometry, Input, Outputs, VisibleItem,
};

#[wasm_bindgen]
pub struct VizijCarousel {
    core: Carousel,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Geometry backed by a JS object exposing `itemExtent()` and `applyOffset(v)`.
struct JsGeometry {
    target: JsValue,
}

impl JsGeometry {
    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

impl Geometry for JsGeometry {
    fn item_extent(&self) -> f32 {
        self.method("itemExtent")
            .and_then(|f| f.call0(&self.target).ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn apply_offset(&mut self, offset: f32) {
        if let Some(f) = self.method("applyOffset") {
            // Host-side failures are ignored.
            let _ = f.call1(&self.target, &JsValue::from_f64(offset as f64));
        }
    }
}

#[derive(Serialize)]
struct StateView {
    current_index: i32,
    item_count: i32,
    running: bool,
    live_timer: Option<u64>,
    visible: Vec<VisibleItem>,
}

fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    swb::to_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

fn outputs_to_js(out: &Outputs) -> Result<JsValue, JsError> {
    to_js(out, "outputs")
}

#[wasm_bindgen]
impl VizijCarousel {
    /// Create a carousel over `item_count` items. `config` is a JSON object
    /// (or undefined/null for defaults). `geometry` is either a number (the
    /// item extent) or an object with `itemExtent()` / `applyOffset(v)`.
    /// Example:
    ///   new VizijCarousel({ visible: 4, circular: false }, 12, 120)
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        item_count: u32,
        geometry: JsValue,
    ) -> Result<VizijCarousel, JsError> {
        console_error_panic_hook::set_once();

        let cfg: CarouselConfig = if jsvalue_is_undefined_or_null(&config) {
            CarouselConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let core = if let Some(extent) = geometry.as_f64() {
            Carousel::new(cfg, item_count as usize, &mut FixedGeometry::new(extent as f32))
        } else if geometry.is_object() {
            Carousel::new(cfg, item_count as usize, &mut JsGeometry { target: geometry })
        } else {
            return Err(JsError::new(
                "geometry must be an item extent or an object with itemExtent()/applyOffset()",
            ));
        };

        Ok(VizijCarousel { core })
    }

    /// Create a carousel from a JSON config string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(
        config_json: &str,
        item_count: u32,
        item_extent: f32,
    ) -> Result<VizijCarousel, JsError> {
        console_error_panic_hook::set_once();
        let cfg = CarouselConfig::from_json(config_json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(VizijCarousel {
            core: Carousel::new(cfg, item_count as usize, &mut FixedGeometry::new(item_extent)),
        })
    }

    /// Arm auto-advance if configured. Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.start())
    }

    /// Apply one input (e.g. `{ type: "next" }`). Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, input: JsValue) -> Result<JsValue, JsError> {
        if jsvalue_is_undefined_or_null(&input) {
            return Err(JsError::new("dispatch: input is null/undefined"));
        }
        let input: Input =
            swb::from_value(input).map_err(|e| JsError::new(&format!("input error: {e}")))?;
        outputs_to_js(self.core.dispatch(input))
    }

    /// Navigate to a raw index in the extended sequence. Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn navigate(&mut self, target: i32) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.navigate(target))
    }

    /// Cancel the auto-advance timer. Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn teardown(&mut self) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.teardown())
    }

    /// Track/viewport sizes to apply at mount.
    #[wasm_bindgen]
    pub fn layout(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.layout(), "layout")
    }

    /// Snapshot of the navigation state.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsError> {
        let st = self.core.state();
        let view = StateView {
            current_index: st.current_index,
            item_count: st.item_count,
            running: st.is_running(),
            live_timer: self.core.live_timer().map(|t| t.0),
            visible: st.visible_items(),
        };
        to_js(&view, "state")
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> i32 {
        self.core.current_index()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
