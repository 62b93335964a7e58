//! penh-web - Browser binding for Permissions Enhancer
//!
//! Call [`attach()`] (or [`attach_with_config()`]) whenever the host page
//! has rendered a fragment that may contain the permissions table. The
//! processed marker makes repeated calls harmless.

pub mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use penh_app::config::parse_settings;
use penh_app::{BulkAction, Enhancer, Message, Settings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlTableElement};

pub use dom::DomTable;

type SharedEnhancer = Rc<RefCell<Enhancer<DomTable>>>;

/// Enhance the permissions table with default settings
#[wasm_bindgen]
pub fn attach() -> Result<(), JsValue> {
    attach_with_settings(Settings::default())
}

/// Enhance the permissions table with settings given as TOML text
#[wasm_bindgen(js_name = attachWithConfig)]
pub fn attach_with_config(config: &str) -> Result<(), JsValue> {
    let settings = parse_settings(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    attach_with_settings(settings)
}

pub fn attach_with_settings(settings: Settings) -> Result<(), JsValue> {
    init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(element) = document.get_element_by_id(&settings.selectors.table_id) else {
        tracing::debug!("No #{} table on this page", settings.selectors.table_id);
        return Ok(());
    };
    let Ok(table) = element.dyn_into::<HtmlTableElement>() else {
        tracing::warn!("#{} is not a table", settings.selectors.table_id);
        return Ok(());
    };

    let dom = DomTable::new(document.clone(), table);
    let rows = dom.read_rows();
    let Some(enhancer) = Enhancer::attach(dom, &rows, settings) else {
        return Ok(());
    };

    let headers: Vec<_> = enhancer
        .state()
        .groups()
        .iter()
        .filter_map(|g| {
            enhancer
                .view()
                .row_element(g.header())
                .map(|el| (g.header(), el.clone()))
        })
        .collect();
    let classes = enhancer.settings().classes.clone();
    let enhancer: SharedEnhancer = Rc::new(RefCell::new(enhancer));

    // The whole header row is the click target, not only its cell
    for (row, element) in headers {
        bind_click(&element, enhancer.clone(), Message::HeaderClicked(row))?;
    }

    for action in BulkAction::ALL {
        let triggers = document.get_elements_by_class_name(&action.trigger_class(&classes));
        for trigger in (0..triggers.length()).filter_map(|i| triggers.item(i)) {
            bind_click(&trigger, enhancer.clone(), action.message())?;
        }
    }

    Ok(())
}

/// Dispatch `message` on every click, suppressing the default action.
/// Listeners live as long as the page.
fn bind_click(
    target: &EventTarget,
    enhancer: SharedEnhancer,
    message: Message,
) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        enhancer.borrow_mut().dispatch(message);
    });
    target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized when the host calls attach more than once
    let _ = console_log::init_with_level(log::Level::Info);
}
