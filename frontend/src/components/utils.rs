use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

pub const ACCEPTED_TYPES: &str = ".png,.jpg,.jpeg,image/png,image/jpeg";

/// Tags in-flight predictions with the file selection they were made for.
/// Selecting or clearing a file advances it, so late replies for the old
/// image can be recognised and dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// png, jpg and jpeg only, by MIME type or, failing that, by extension.
pub fn is_accepted_image(mime: &str, name: &str) -> bool {
    match mime {
        "image/png" | "image/jpeg" | "image/jpg" => true,
        "" => {
            let name = name.to_ascii_lowercase();
            name.ends_with(".png") || name.ends_with(".jpg") || name.ends_with(".jpeg")
        }
        _ => false,
    }
}

/// Picks the first png/jpg/jpeg from the list; the page handles one image at a time.
pub fn first_accepted_image(file_list: &FileList) -> Result<GlooFile, String> {
    let mut rejected = None;
    for i in 0..file_list.length() {
        if let Some(file) = file_list.item(i) {
            if is_accepted_image(&file.type_(), &file.name()) {
                return Ok(GlooFile::from(file));
            }
            rejected.get_or_insert(file.name());
        }
    }

    match rejected {
        Some(name) => {
            log::warn!("Skipping unsupported file: {}", name);
            Err(format!(
                "Unsupported file: {}. Please choose a PNG, JPG or JPEG image.",
                name
            ))
        }
        None => Err("No image selected.".to_string()),
    }
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
