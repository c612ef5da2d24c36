//! Image carousel with thumbnails, autoplay and a fullscreen overlay.
//!
//! The slide state lives in [`CarouselState`]; the component only wires it
//! to clicks, the autoplay [`Interval`] and the fullscreen keyboard listener.

use crate::shared::config::{asset_url, AUTOPLAY_INTERVAL_MS};
use crate::shared::icons::Icon;
use gloo_timers::callback::Interval;
use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use std::collections::BTreeSet;

pub const EMPTY_STATE_TEXT: &str = "No images available";

/// Inline "Image Error" graphic shown in place of a reference that failed to load.
pub const PLACEHOLDER_SRC: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 100 100'%3E%3Crect width='100' height='100' fill='%23f1f5f9'/%3E%3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' font-family='monospace' font-size='10' fill='%2394a3b8'%3EImage Error%3C/text%3E%3C/svg%3E";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselState {
    index: usize,
    len: usize,
    fullscreen: bool,
    autoplaying: bool,
    failed: BTreeSet<usize>,
}

impl CarouselState {
    pub fn new(len: usize, autoplay: bool) -> Self {
        Self {
            len,
            autoplaying: autoplay,
            ..Default::default()
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplaying
    }

    /// Arrows, counter and thumbnails only make sense with several slides.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    /// Advance, wrapping from the last slide to the first.
    pub fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Retreat, wrapping from the first slide to the last.
    pub fn prev(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Some(self.index)
    }

    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.index = index;
        Some(index)
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplaying = !self.autoplaying;
        self.autoplaying
    }

    /// The autoplay timer exists only while this holds.
    pub fn timer_should_run(&self) -> bool {
        self.autoplaying && self.len > 1
    }

    /// One autoplay step.
    pub fn tick(&mut self) -> Option<usize> {
        if self.timer_should_run() {
            self.next()
        } else {
            None
        }
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    pub fn mark_failed(&mut self, index: usize) {
        if index < self.len && self.failed.insert(index) {
            log::warn!("carousel: image {} failed to load", index);
        }
    }

    pub fn is_failed(&self, index: usize) -> bool {
        self.failed.contains(&index)
    }

    /// Resolved `src` for a slide, or the placeholder once it has failed.
    pub fn src_for(&self, index: usize, reference: &str) -> String {
        if self.is_failed(index) {
            PLACEHOLDER_SRC.to_string()
        } else {
            asset_url(reference)
        }
    }
}

/// Keys handled while the fullscreen overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    ExitFullscreen,
    ToggleAutoplay,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::ExitFullscreen),
            " " => Some(Self::ToggleAutoplay),
            _ => None,
        }
    }

    /// Space would otherwise scroll the page.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::ToggleAutoplay)
    }
}

/// Caller switches for the optional parts of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub show_thumbnails: bool,
    pub show_counter: bool,
    pub show_fullscreen: bool,
    pub autoplay: bool,
}

/// Which pieces of chrome are rendered for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chrome {
    pub empty_state: bool,
    pub arrows: bool,
    pub counter: bool,
    pub thumbnails: bool,
    pub dots: bool,
    pub play_control: bool,
    pub fullscreen_button: bool,
}

impl CarouselState {
    pub fn chrome(&self, options: CarouselOptions) -> Chrome {
        if self.is_empty() {
            return Chrome {
                empty_state: true,
                ..Chrome::default()
            };
        }
        let nav = self.has_navigation();
        Chrome {
            empty_state: false,
            arrows: nav,
            counter: nav && options.show_counter,
            thumbnails: nav && options.show_thumbnails,
            dots: nav && !options.show_thumbnails,
            play_control: nav && options.autoplay,
            fullscreen_button: options.show_fullscreen,
        }
    }
}

/// Holds at most one live resource (timer, listener). `sync` installs it
/// when `live` turns true and drops it when `live` turns false; dropping
/// is what cancels the resource.
#[derive(Debug)]
pub struct ResourceSlot<T> {
    current: Option<T>,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> ResourceSlot<T> {
    /// Returns true when the slot changed.
    pub fn sync(&mut self, live: bool, install: impl FnOnce() -> T) -> bool {
        match (live, self.current.is_some()) {
            (true, false) => {
                self.current = Some(install());
                true
            }
            (false, true) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_installed(&self) -> bool {
        self.current.is_some()
    }
}

/// Window keydown listener removed on drop.
struct KeyListener(Option<WindowListenerHandle>);

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

fn step_slide(
    state: RwSignal<CarouselState>,
    on_slide_change: Option<Callback<usize>>,
    step: impl FnOnce(&mut CarouselState) -> Option<usize>,
) {
    let mut moved = None;
    state.update(|s| moved = step(s));
    if let (Some(index), Some(cb)) = (moved, on_slide_change) {
        cb.run(index);
    }
}

#[component]
pub fn ImageCarousel(
    /// Image references, absolute or relative to the asset origin
    #[prop(into)]
    images: Vec<String>,
    #[prop(default = "24rem".to_string(), into)] height: String,
    /// Thumbnail strip below the stage, dots otherwise
    #[prop(default = true)]
    show_thumbnails: bool,
    #[prop(default = true)] show_counter: bool,
    #[prop(default = true)] show_fullscreen: bool,
    /// Start playing and show the play/pause control
    #[prop(optional)]
    autoplay: bool,
    #[prop(default = AUTOPLAY_INTERVAL_MS)] autoplay_interval: u32,
    #[prop(optional, into)] class: String,
    #[prop(default = EMPTY_STATE_TEXT.to_string(), into)] empty_state_text: String,
    /// Replaces the click-to-fullscreen behaviour of the main image
    #[prop(optional)]
    on_image_click: Option<Callback<usize>>,
    #[prop(optional)] on_slide_change: Option<Callback<usize>>,
) -> impl IntoView {
    let len = images.len();
    let options = CarouselOptions {
        show_thumbnails,
        show_counter,
        show_fullscreen,
        autoplay,
    };
    let state = RwSignal::new(CarouselState::new(len, autoplay));
    // The image list is fixed for the component's lifetime, and so is the chrome
    let chrome = state.with_untracked(|s| s.chrome(options));

    if chrome.empty_state {
        return view! {
            <div class="image-carousel image-carousel--empty">
                {Icon::Image.view(64)}
                <p class="image-carousel__empty-text">{empty_state_text}</p>
            </div>
        }
        .into_any();
    }

    let images = StoredValue::new(images);
    let height = StoredValue::new(height);
    let fullscreen = Memo::new(move |_| state.with(|s| s.is_fullscreen()));
    let playing = Memo::new(move |_| state.with(|s| s.is_autoplaying()));

    // Autoplay: dropping the Interval cancels it
    let timer_live = Memo::new(move |_| state.with(|s| s.timer_should_run()));
    let timer = StoredValue::new_local(ResourceSlot::<Interval>::default());
    Effect::new(move |_| {
        let live = timer_live.get();
        timer.update_value(|slot| {
            let changed = slot.sync(live, || {
                Interval::new(autoplay_interval, move || {
                    step_slide(state, on_slide_change, CarouselState::tick)
                })
            });
            if changed {
                log::debug!("carousel: autoplay timer live={} ({}ms)", live, autoplay_interval);
            }
        });
    });

    // Keyboard navigation is live for the fullscreen lifetime only
    let key_listener = StoredValue::new_local(ResourceSlot::<KeyListener>::default());
    Effect::new(move |_| {
        let live = fullscreen.get();
        key_listener.update_value(|slot| {
            slot.sync(live, || {
                KeyListener(Some(window_event_listener(
                    ev::keydown,
                    move |e: ev::KeyboardEvent| {
                        let Some(command) = KeyCommand::from_key(&e.key()) else {
                            return;
                        };
                        if command.prevents_default() {
                            e.prevent_default();
                        }
                        match command {
                            KeyCommand::Previous => {
                                step_slide(state, on_slide_change, CarouselState::prev)
                            }
                            KeyCommand::Next => {
                                step_slide(state, on_slide_change, CarouselState::next)
                            }
                            KeyCommand::ExitFullscreen => state.update(|s| s.exit_fullscreen()),
                            KeyCommand::ToggleAutoplay => state.update(|s| {
                                s.toggle_autoplay();
                            }),
                        }
                    },
                )))
            });
        });
    });

    on_cleanup(move || {
        timer.try_update_value(ResourceSlot::clear);
        key_listener.try_update_value(ResourceSlot::clear);
    });

    let toggle_fullscreen = move |_| {
        state.update(|s| {
            s.toggle_fullscreen();
        })
    };
    let toggle_autoplay = move |_| {
        state.update(|s| {
            s.toggle_autoplay();
        })
    };
    let main_click = move |_| {
        let index = state.with_untracked(|s| s.index());
        if let Some(cb) = on_image_click {
            cb.run(index);
        } else if chrome.fullscreen_button {
            state.update(|s| {
                s.toggle_fullscreen();
            });
        }
    };
    let slide_src = move |index: usize| {
        images.with_value(|imgs| state.with(|s| s.src_for(index, &imgs[index])))
    };

    let content = move || {
        view! {
            <div class="image-carousel__stage" style:height=height.get_value()>
                <img
                    class="image-carousel__image"
                    src=move || slide_src(state.with(|s| s.index()))
                    alt=move || format!("Image {}", state.with(|s| s.index()) + 1)
                    on:click=main_click
                    on:error=move |_| {
                        let index = state.with_untracked(|s| s.index());
                        state.update(|s| s.mark_failed(index));
                    }
                />

                {chrome.arrows.then(|| view! {
                    <button
                        class="image-carousel__arrow image-carousel__arrow--prev"
                        aria-label="Previous image"
                        on:click=move |_| step_slide(state, on_slide_change, CarouselState::prev)
                    >
                        {Icon::ChevronLeft.view(24)}
                    </button>
                    <button
                        class="image-carousel__arrow image-carousel__arrow--next"
                        aria-label="Next image"
                        on:click=move |_| step_slide(state, on_slide_change, CarouselState::next)
                    >
                        {Icon::ChevronRight.view(24)}
                    </button>
                })}

                {chrome.counter.then(|| view! {
                    <div class="image-carousel__counter">
                        {move || state.with(|s| s.counter_label())}
                    </div>
                })}

                <div class="image-carousel__controls">
                    {chrome.play_control.then(|| view! {
                        <button
                            class="image-carousel__control"
                            title=move || if playing.get() { "Pause slideshow" } else { "Play slideshow" }
                            aria-label=move || if playing.get() { "Pause slideshow" } else { "Play slideshow" }
                            on:click=toggle_autoplay
                        >
                            {move || if playing.get() { "⏸️" } else { "▶️" }}
                        </button>
                    })}
                    {chrome.fullscreen_button.then(|| view! {
                        <button
                            class="image-carousel__control"
                            title="Toggle fullscreen"
                            aria-label=move || if fullscreen.get() { "Exit fullscreen" } else { "Enter fullscreen" }
                            on:click=toggle_fullscreen
                        >
                            {move || if fullscreen.get() {
                                Icon::X.view(20)
                            } else {
                                view! { <span class="image-carousel__fullscreen-glyph">"⛶"</span> }.into_any()
                            }}
                        </button>
                    })}
                </div>
            </div>

            {chrome.thumbnails.then(|| view! {
                <div class="image-carousel__thumbs">
                    {(0..len).map(|i| {
                        let active = move || state.with(|s| s.index() == i);
                        view! {
                            <button
                                class="image-carousel__thumb"
                                class:image-carousel__thumb--active=active
                                aria-label=format!("View image {}", i + 1)
                                aria-current=move || active().to_string()
                                on:click=move |_| step_slide(state, on_slide_change, move |s| s.go_to(i))
                            >
                                <img
                                    src=move || slide_src(i)
                                    alt=format!("Thumbnail {}", i + 1)
                                    on:error=move |_| state.update(|s| s.mark_failed(i))
                                />
                            </button>
                        }
                    }).collect_view()}
                </div>
            })}

            {chrome.dots.then(|| view! {
                <div class="image-carousel__dots">
                    {(0..len).map(|i| view! {
                        <button
                            class="image-carousel__dot"
                            class:image-carousel__dot--active=move || state.with(|s| s.index() == i)
                            aria-label=format!("Go to slide {}", i + 1)
                            on:click=move |_| step_slide(state, on_slide_change, move |s| s.go_to(i))
                        />
                    }).collect_view()}
                </div>
            })}
        }
    };

    let frame_class = format!("image-carousel {}", class);

    view! {
        {move || if fullscreen.get() {
            view! {
                <div class="image-carousel-fullscreen">
                    <div class="image-carousel-fullscreen__inner">{content()}</div>
                    <div class="image-carousel-fullscreen__actions">
                        <button on:click=toggle_fullscreen>
                            {Icon::X.view(16)}
                            "Exit Fullscreen (ESC)"
                        </button>
                        {chrome.play_control.then(|| view! {
                            <button on:click=toggle_autoplay>
                                {move || if playing.get() { "⏸️ Pause" } else { "▶️ Play" }}
                            </button>
                        })}
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! { <div class=frame_class.clone()>{content()}</div> }.into_any()
        }}
    }
    .into_any()
}
