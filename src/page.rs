//! The host page: where song metadata is read from and where progress-bar
//! clicks come from.

use crate::error::{BootstrapError, Result};
use crate::seek::ProgressClick;
use crate::settings::BootstrapSettings;

/// Read access to the host page.
pub trait SongPage {
    /// `Ok(None)` when the element exists but the attribute does not.
    fn attribute(&self, element_id: &str, attribute: &str) -> Result<Option<String>>;

    /// The raw song metadata named by `settings`.
    fn song_info(&self, settings: &BootstrapSettings) -> Result<String> {
        self.attribute(&settings.song_info_element_id, &settings.song_info_attribute)?
            .ok_or_else(|| BootstrapError::MissingAttribute {
                element: settings.song_info_element_id.clone(),
                attribute: settings.song_info_attribute.clone(),
            })
    }
}

/// Click source for the played-progress bar.
pub trait ProgressBar {
    /// Call `on_click` for every click on the element matching `selector`,
    /// for the lifetime of the page. `MissingElement` when nothing matches.
    fn on_progress_click<F>(&self, selector: &str, on_click: F) -> Result<()>
    where
        F: FnMut(ProgressClick) + 'static;
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::*;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{window, Document, Element, MouseEvent};

    /// The live browser document.
    pub struct DomPage {
        document: Document,
    }

    impl DomPage {
        pub fn current() -> Result<Self> {
            let document = window()
                .and_then(|w| w.document())
                .ok_or_else(|| BootstrapError::MissingElement("document".to_string()))?;
            Ok(Self { document })
        }

        pub fn query(&self, selector: &str) -> Result<Element> {
            self.document
                .query_selector(selector)
                .ok()
                .flatten()
                .ok_or_else(|| BootstrapError::MissingElement(selector.to_string()))
        }
    }

    impl ProgressBar for DomPage {
        fn on_progress_click<F>(&self, selector: &str, mut on_click: F) -> Result<()>
        where
            F: FnMut(ProgressClick) + 'static,
        {
            let element = self.query(selector)?;
            let bar = element.clone();
            let click_cb = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = bar.get_bounding_client_rect();
                on_click(ProgressClick::new(
                    event.client_x() as f64,
                    rect.left(),
                    rect.width(),
                ));
            }) as Box<dyn FnMut(MouseEvent)>);

            element
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .map_err(|err| {
                    BootstrapError::Listener(
                        err.as_string()
                            .unwrap_or_else(|| "addEventListener failed".to_string()),
                    )
                })?;
            click_cb.forget();
            Ok(())
        }
    }

    impl SongPage for DomPage {
        fn attribute(&self, element_id: &str, attribute: &str) -> Result<Option<String>> {
            let element = self
                .document
                .get_element_by_id(element_id)
                .ok_or_else(|| BootstrapError::MissingElement(format!("#{element_id}")))?;
            Ok(element.get_attribute(attribute))
        }
    }
}
